//! Stepviz Scenario Catalog
//!
//! A fixed set of instrumented algorithms that record playable traces:
//!
//! - **Scenarios**: Each catalog entry pairs an algorithm with its input
//!   data and a reference listing, recorded on demand
//! - **Snapshots**: All scenarios share the [`SceneSnapshot`] vocabulary,
//!   so one renderer covers the whole catalog
//!
//! # Example
//!
//! ```rust
//! let scenario = stepviz_scenarios::find("binary-search").unwrap();
//! let trace = scenario.record().unwrap();
//!
//! assert!(trace.len() > 1);
//! assert!(trace.last().message().contains("found"));
//! ```

mod scenarios;
mod snapshot;

pub use snapshot::SceneSnapshot;

use stepviz_engine::{StepEmitter, Trace, TraceError};

/// One catalog entry: an instrumented algorithm plus its presentation
/// metadata. Entries are static; the input data lives inside the
/// algorithm, which is what makes every recording reproducible.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Stable kebab-case identifier, used on the command line.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// One-sentence description of what the algorithm does.
    pub summary: &'static str,
    /// Reference listing; emitted steps point at its 1-based lines.
    pub source: &'static str,
    run: fn(&mut StepEmitter<'_, SceneSnapshot>),
}

impl Scenario {
    /// Run the instrumented algorithm once and capture its trace.
    ///
    /// Every call re-executes the algorithm from its fixed input, so the
    /// result is identical across calls.
    pub fn record(&self) -> Result<Trace<SceneSnapshot>, TraceError> {
        stepviz_engine::record(self.run)
    }
}

static CATALOG: [Scenario; 5] = [
    scenarios::sliding_window::SCENARIO,
    scenarios::bubble_sort::SCENARIO,
    scenarios::binary_search::SCENARIO,
    scenarios::bfs::SCENARIO,
    scenarios::n_queens::SCENARIO,
];

/// All catalog entries, in presentation order.
pub fn catalog() -> &'static [Scenario] {
    &CATALOG
}

/// Look up a scenario by its stable name.
pub fn find(name: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|scenario| scenario.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find_matches_exact_names() {
        assert!(find("bubble-sort").is_some());
        assert!(find("Bubble-Sort").is_none());
        assert!(find("quicksort").is_none());
    }

    #[test]
    fn test_every_scenario_has_presentation_metadata() {
        for scenario in catalog() {
            assert!(!scenario.name.is_empty());
            assert!(!scenario.title.is_empty());
            assert!(!scenario.summary.is_empty());
            assert!(scenario.source.lines().count() > 0);
        }
    }

    #[test]
    fn test_debug_output_names_the_scenario() {
        // The CLI unwraps lookup results, which requires entries to be
        // debug-printable.
        let scenario = find("bfs").unwrap();
        let text = format!("{scenario:?}");
        assert!(text.contains("bfs"));
        assert!(text.contains(scenario.title));
    }
}
