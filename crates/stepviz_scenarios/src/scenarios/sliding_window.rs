//! Maximum window sum over a fixed sequence, by sliding a window of
//! width `K` one position at a time.
//!
//! The step shape is pure arithmetic: one opening step, `K` build steps,
//! one window-complete step, two steps per slide (move, then compare),
//! and one closing step. For `N` values that is `2 * (N - K) + K + 3`
//! steps, independent of the data.

use stepviz_engine::StepEmitter;

use crate::snapshot::SceneSnapshot;
use crate::Scenario;

const VALUES: [i64; 9] = [2, -1, 4, 3, -2, 5, 1, -3, 4];
const K: usize = 3;

pub(crate) const SCENARIO: Scenario = Scenario {
    name: "sliding-window",
    title: "Sliding window maximum sum",
    summary: "Scan a sequence with a fixed-width window, reusing the \
              running sum instead of re-adding every element.",
    source: SOURCE,
    run,
};

const SOURCE: &str = "\
let mut sum = 0;
for i in 0..K {
    sum += VALUES[i];
}
let mut best = sum;
for i in K..VALUES.len() {
    sum += VALUES[i] - VALUES[i - K];
    best = best.max(sum);
}
best";

fn run(em: &mut StepEmitter<'_, SceneSnapshot>) {
    let values = VALUES.to_vec();

    let mut sum: i64 = 0;
    em.emit(
        &SceneSnapshot::Array {
            values: values.clone(),
            focus: vec![],
            window: None,
            best: None,
        },
        "start with an empty window",
        1,
    );

    for i in 0..K {
        sum += values[i];
        em.emit(
            &SceneSnapshot::Array {
                values: values.clone(),
                focus: vec![i],
                window: Some((0, i)),
                best: None,
            },
            format!("took {} into the window, sum {sum}", values[i]),
            3,
        );
    }

    let mut best = sum;
    em.emit(
        &SceneSnapshot::Array {
            values: values.clone(),
            focus: vec![],
            window: Some((0, K - 1)),
            best: Some(best),
        },
        format!("first full window sums to {best}"),
        5,
    );

    for i in K..values.len() {
        let dropped = values[i - K];
        let taken = values[i];
        sum += taken - dropped;
        em.emit(
            &SceneSnapshot::Array {
                values: values.clone(),
                focus: vec![i - K, i],
                window: Some((i - K + 1, i)),
                best: Some(best),
            },
            format!("dropped {dropped}, took {taken}, sum {sum}"),
            7,
        );

        let improved = sum > best;
        best = best.max(sum);
        em.emit(
            &SceneSnapshot::Array {
                values: values.clone(),
                focus: vec![],
                window: Some((i - K + 1, i)),
                best: Some(best),
            },
            if improved {
                format!("sum {sum} is the new best")
            } else {
                format!("best stays at {best}")
            },
            8,
        );
    }

    em.emit(
        &SceneSnapshot::Array {
            values,
            focus: vec![],
            window: None,
            best: Some(best),
        },
        format!("best window sum: {best}"),
        10,
    );
}
