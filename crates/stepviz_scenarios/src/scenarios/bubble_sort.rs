//! Bubble sort with a shrinking bound and an early exit once a pass
//! makes no swap. One step per comparison, snapshot taken after the
//! swap when one happens.

use stepviz_engine::StepEmitter;

use crate::snapshot::SceneSnapshot;
use crate::Scenario;

const VALUES: [i64; 6] = [7, 3, 9, 1, 5, 8];

pub(crate) const SCENARIO: Scenario = Scenario {
    name: "bubble-sort",
    title: "Bubble sort",
    summary: "Repeatedly bubble the largest unsorted value to the end, \
              stopping after the first pass with no swaps.",
    source: SOURCE,
    run,
};

const SOURCE: &str = "\
let mut bound = values.len();
loop {
    let mut swapped = false;
    for j in 1..bound {
        if values[j - 1] > values[j] {
            values.swap(j - 1, j);
            swapped = true;
        }
    }
    bound -= 1;
    if !swapped {
        break;
    }
}";

fn run(em: &mut StepEmitter<'_, SceneSnapshot>) {
    let mut values = VALUES.to_vec();

    em.emit(
        &SceneSnapshot::Array {
            values: values.clone(),
            focus: vec![],
            window: None,
            best: None,
        },
        "unsorted input",
        1,
    );

    let mut bound = values.len();
    loop {
        let mut swapped = false;
        for j in 1..bound {
            let out_of_order = values[j - 1] > values[j];
            let (message, line) = if out_of_order {
                values.swap(j - 1, j);
                swapped = true;
                (
                    format!("{} > {}, swapped", values[j], values[j - 1]),
                    6,
                )
            } else {
                (
                    format!("{} <= {}, in order", values[j - 1], values[j]),
                    5,
                )
            };
            em.emit(
                &SceneSnapshot::Array {
                    values: values.clone(),
                    focus: vec![j - 1, j],
                    window: None,
                    best: None,
                },
                message,
                line,
            );
        }
        bound -= 1;
        if !swapped {
            break;
        }
    }

    em.emit(
        &SceneSnapshot::Array {
            values,
            focus: vec![],
            window: None,
            best: None,
        },
        "array sorted",
        12,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_step_is_sorted() {
        let trace = SCENARIO.record().unwrap();

        match trace.last().snapshot() {
            SceneSnapshot::Array { values, .. } => {
                let mut expected = VALUES.to_vec();
                expected.sort();
                assert_eq!(*values, expected);
            }
            other => panic!("expected an array snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_comparison_steps_focus_adjacent_pairs() {
        let trace = SCENARIO.record().unwrap();

        let comparisons = trace
            .iter()
            .filter(|step| {
                matches!(
                    step.snapshot(),
                    SceneSnapshot::Array { focus, .. } if !focus.is_empty()
                )
            })
            .count();
        assert_eq!(comparisons, trace.len() - 2);

        for step in trace.iter().skip(1).take(trace.len() - 2) {
            match step.snapshot() {
                SceneSnapshot::Array { focus, .. } => {
                    assert_eq!(focus.len(), 2);
                    assert_eq!(focus[1], focus[0] + 1);
                }
                other => panic!("expected an array snapshot, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_swap_messages_match_the_listing_lines() {
        let trace = SCENARIO.record().unwrap();

        for step in &trace {
            if step.message().contains("swapped") {
                assert_eq!(step.source_line(), 6);
            }
            if step.message().contains("in order") {
                assert_eq!(step.source_line(), 5);
            }
        }
    }
}
