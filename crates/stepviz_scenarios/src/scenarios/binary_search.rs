//! Binary search over a sorted array, narrowing an inclusive range until
//! the probe lands on the target. The active range is shown as the
//! window and each probe focuses the midpoint.

use stepviz_engine::StepEmitter;

use crate::snapshot::SceneSnapshot;
use crate::Scenario;

const VALUES: [i64; 10] = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
const TARGET: i64 = 23;

pub(crate) const SCENARIO: Scenario = Scenario {
    name: "binary-search",
    title: "Binary search",
    summary: "Halve a sorted range around the midpoint until the target \
              is found.",
    source: SOURCE,
    run,
};

const SOURCE: &str = "\
let mut lo = 0;
let mut hi = values.len() - 1;
while lo <= hi {
    let mid = (lo + hi) / 2;
    if values[mid] == target {
        return Some(mid);
    } else if values[mid] < target {
        lo = mid + 1;
    } else {
        hi = mid - 1;
    }
}
None";

fn run(em: &mut StepEmitter<'_, SceneSnapshot>) {
    search(em, VALUES.to_vec(), TARGET);
}

fn search(em: &mut StepEmitter<'_, SceneSnapshot>, values: Vec<i64>, target: i64) {
    let mut lo = 0usize;
    let mut hi = values.len() - 1;
    em.emit(
        &SceneSnapshot::Array {
            values: values.clone(),
            focus: vec![],
            window: Some((lo, hi)),
            best: None,
        },
        format!("searching for {target} in {} sorted values", values.len()),
        2,
    );

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let probed = values[mid];
        em.emit(
            &SceneSnapshot::Array {
                values: values.clone(),
                focus: vec![mid],
                window: Some((lo, hi)),
                best: None,
            },
            format!("probed {probed} at index {mid}"),
            4,
        );

        if probed == target {
            em.emit(
                &SceneSnapshot::Array {
                    values,
                    focus: vec![mid],
                    window: Some((mid, mid)),
                    best: None,
                },
                format!("found {target} at index {mid}"),
                6,
            );
            return;
        }

        let (message, line) = if probed < target {
            lo = mid + 1;
            (format!("{probed} < {target}, discarding the left half"), 8)
        } else {
            // Inclusive bounds cannot move below index zero; the range
            // is empty once the first element probes too high.
            if mid == 0 {
                break;
            }
            hi = mid - 1;
            (format!("{probed} > {target}, discarding the right half"), 10)
        };
        em.emit(
            &SceneSnapshot::Array {
                values: values.clone(),
                focus: vec![],
                window: (lo <= hi).then_some((lo, hi)),
                best: None,
            },
            message,
            line,
        );
    }

    em.emit(
        &SceneSnapshot::Array {
            values,
            focus: vec![],
            window: None,
            best: None,
        },
        format!("{target} is not in the array"),
        13,
    );
}
