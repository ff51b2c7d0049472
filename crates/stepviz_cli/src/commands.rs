//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use stepviz_engine::{PlaybackConfig, PlaybackController, Trace};
use stepviz_scenarios::{catalog, find, SceneSnapshot, Scenario};

use crate::render;

/// Print the catalog with recorded step counts.
pub fn list() -> Result<()> {
    println!("{:<16} {:>6}  {}", "NAME", "STEPS", "TITLE");
    for scenario in catalog() {
        let trace = scenario.record()?;
        println!("{:<16} {:>6}  {}", scenario.name, trace.len(), scenario.title);
    }
    Ok(())
}

/// Print one scenario's metadata and reference listing.
pub fn show(name: &str) -> Result<()> {
    let scenario = lookup(name)?;
    let trace = scenario.record()?;

    println!("{} ({})", scenario.title, scenario.name);
    println!("{}", scenario.summary);
    println!();
    print!("{}", render::listing(scenario.source));
    println!();
    println!("{} steps when recorded", trace.len());
    Ok(())
}

/// Record a scenario and write its trace as JSON.
pub fn export(name: &str, output: Option<&Path>, pretty: bool) -> Result<()> {
    let scenario = lookup(name)?;
    let trace = scenario.record()?;

    let json = if pretty {
        serde_json::to_string_pretty(&trace)?
    } else {
        serde_json::to_string(&trace)?
    };

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} steps to {}", trace.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Play a trace to completion, printing one line per step.
pub async fn play(
    name: Option<&str>,
    file: Option<&Path>,
    interval_ms: u64,
    speed: f64,
) -> Result<()> {
    let (label, trace) = match (name, file) {
        (Some(name), None) => {
            let scenario = lookup(name)?;
            (scenario.title.to_string(), scenario.record()?)
        }
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let trace: Trace<SceneSnapshot> = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            (path.display().to_string(), trace)
        }
        _ => bail!("give either a scenario name or --file, not both"),
    };

    let total = trace.len();
    let controller = PlaybackController::new(
        trace,
        PlaybackConfig::default()
            .with_base_interval(Duration::from_millis(interval_ms))
            .with_speed(speed),
    )?;

    println!("playing {label}: {total} steps, {interval_ms}ms per step at {speed}x");
    println!("{}", render::step_line(controller.current_step(), total));

    if total > 1 {
        let mut frames = controller.subscribe();
        let mut printed = 0;
        controller.play();
        loop {
            frames.changed().await?;
            let frame = *frames.borrow();
            for index in printed + 1..=frame.index {
                println!(
                    "{}",
                    render::step_line(&controller.trace().steps()[index], total)
                );
            }
            printed = frame.index;
            if !frame.playing && frame.index + 1 == total {
                break;
            }
        }
    }

    println!("done: {}", controller.current_step().message());
    Ok(())
}

fn lookup(name: &str) -> Result<&'static Scenario> {
    find(name).ok_or_else(|| {
        let known: Vec<&str> = catalog().iter().map(|scenario| scenario.name).collect();
        anyhow!(
            "unknown scenario {name:?}, expected one of: {}",
            known.join(", ")
        )
    })
}
