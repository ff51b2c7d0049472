//! Integration tests for trace recording + playback
//!
//! These tests verify that:
//! - Recording the same instrumented run twice yields identical traces
//! - Snapshots are isolated from the algorithm's live state
//! - One immutable trace can back several independent controllers
//! - The cursor stays in bounds under arbitrary command sequences
//! - Autoplay terminates on the final step and pauses
//! - A panicking run surfaces as an error, never as a partial trace

use std::panic;
use std::time::Duration;

use stepviz_engine::{record, PlaybackConfig, PlaybackController, Trace, TraceError};

/// One instrumented pass of insertion sort over a fixed input.
fn sort_run(em: &mut stepviz_engine::StepEmitter<'_, Vec<i32>>) {
    let mut values = vec![5, 2, 4, 1, 3];
    em.emit(&values, "initial order", 1);
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
        em.emit(&values, format!("inserted element {i}"), 5);
    }
    em.emit(&values, "sorted", 9);
}

/// Recording is a pure function of the instrumented run
#[test]
fn test_recording_is_deterministic() {
    let first = record(sort_run).unwrap();
    let second = record(sort_run).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
    assert_eq!(*first.last().snapshot(), vec![1, 2, 3, 4, 5]);
}

/// Each step keeps the state as it was at emit time, untouched by
/// later mutation of the same buffer
#[test]
fn test_snapshots_are_isolated_from_the_live_buffer() {
    let trace = record(sort_run).unwrap();

    // The algorithm sorted one buffer in place, yet the early steps
    // still hold the unsorted intermediates.
    assert_eq!(*trace.first().snapshot(), vec![5, 2, 4, 1, 3]);
    assert_eq!(*trace.step(1).unwrap().snapshot(), vec![2, 5, 4, 1, 3]);
    assert_ne!(trace.first().snapshot(), trace.last().snapshot());
}

/// Two controllers over one trace move independently and share storage
#[test]
fn test_controllers_share_one_immutable_trace() {
    let trace = record(sort_run).unwrap();

    let a = PlaybackController::new(trace.clone(), PlaybackConfig::default()).unwrap();
    let b = PlaybackController::new(trace, PlaybackConfig::default()).unwrap();

    a.step_forward();
    a.step_forward();
    assert_eq!(a.current_index(), 2);
    assert_eq!(b.current_index(), 0);

    // Same backing steps, not a copy per controller.
    assert!(std::ptr::eq(
        a.trace().steps().as_ptr(),
        b.trace().steps().as_ptr()
    ));
}

/// No command sequence can push the cursor outside the trace
#[test]
fn test_cursor_survives_a_command_storm() {
    let trace = record(sort_run).unwrap();
    let len = trace.len();
    let controller = PlaybackController::new(trace, PlaybackConfig::default()).unwrap();

    for round in 0..4 {
        for _ in 0..len + 3 {
            controller.step_forward();
            assert!(controller.current_index() < len);
        }
        assert_eq!(controller.current_index(), len - 1);

        for _ in 0..len + 3 {
            controller.step_back();
            assert!(controller.current_index() < len);
        }
        assert_eq!(controller.current_index(), 0);

        if round % 2 == 0 {
            controller.reset();
            assert_eq!(controller.current_index(), 0);
        }
    }
}

/// Autoplay walks the whole trace, parks on the last step, and stays there
#[tokio::test(start_paused = true)]
async fn test_autoplay_terminates_on_the_final_step() {
    let trace = record(sort_run).unwrap();
    let len = trace.len();
    let controller = PlaybackController::new(
        trace,
        PlaybackConfig::default()
            .with_base_interval(Duration::from_millis(50))
            .with_speed(2.0),
    )
    .unwrap();

    let mut frames = controller.subscribe();
    controller.play();
    while frames.borrow().playing {
        frames.changed().await.unwrap();
    }

    assert_eq!(controller.current_index(), len - 1);
    assert!(!controller.is_playing());
    assert_eq!(controller.current_step().message(), "sorted");

    // Replay after a reset lands in the same place.
    controller.reset();
    controller.play();
    let mut frames = controller.subscribe();
    while frames.borrow().playing {
        frames.changed().await.unwrap();
    }
    assert_eq!(controller.current_index(), len - 1);
}

/// A panic mid-run yields a generation error with the panic message
#[test]
fn test_panicking_run_produces_no_trace() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result: Result<Trace<Vec<i32>>, TraceError> = record(|em| {
        em.emit(&vec![1], "before the bug", 1);
        panic!("index out of range");
    });
    panic::set_hook(previous);

    match result {
        Err(TraceError::Generation(message)) => {
            assert!(message.contains("index out of range"));
        }
        other => panic!("expected generation failure, got {other:?}"),
    }
}

/// An instrumented run that never emits is rejected
#[test]
fn test_run_without_steps_is_rejected() {
    let result: Result<Trace<u8>, TraceError> = record(|_| {});
    assert!(matches!(result, Err(TraceError::Empty)));
}
