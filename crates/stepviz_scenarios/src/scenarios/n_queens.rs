//! N-queens by row-wise backtracking, recorded down to the dead ends.
//! Every probe, placement, and retreat is its own step, so playback
//! shows the search actually unwinding instead of jumping to the answer.

use stepviz_engine::StepEmitter;

use crate::snapshot::SceneSnapshot;
use crate::Scenario;

const N: usize = 4;

pub(crate) const SCENARIO: Scenario = Scenario {
    name: "n-queens",
    title: "N-queens backtracking",
    summary: "Place one queen per row, retreating a row whenever no \
              column is safe.",
    source: SOURCE,
    run,
};

const SOURCE: &str = "\
fn place_row(row) -> bool {
    if row == N {
        return true;
    }
    for col in 0..N {
        if let Some(clash) = conflict(row, col) {
            continue;
        }
        queens.push(col);
        if place_row(row + 1) {
            return true;
        }
        queens.pop();
    }
    false
}";

fn board(queens: &[usize], probe: Option<(usize, usize)>) -> SceneSnapshot {
    SceneSnapshot::Board {
        size: N,
        queens: queens.to_vec(),
        probe,
    }
}

/// Row of an already-placed queen attacking (row, col), if any.
fn conflict(queens: &[usize], row: usize, col: usize) -> Option<usize> {
    queens.iter().enumerate().find_map(|(placed_row, &placed_col)| {
        let same_column = placed_col == col;
        let same_diagonal = row - placed_row == placed_col.abs_diff(col);
        (same_column || same_diagonal).then_some(placed_row)
    })
}

fn place_row(row: usize, queens: &mut Vec<usize>, em: &mut StepEmitter<'_, SceneSnapshot>) -> bool {
    if row == N {
        return true;
    }
    for col in 0..N {
        if let Some(clash) = conflict(queens, row, col) {
            em.emit(
                &board(queens, Some((row, col))),
                format!("({row}, {col}) clashes with the queen on row {clash}"),
                6,
            );
            continue;
        }

        queens.push(col);
        em.emit(
            &board(queens, None),
            format!("placed a queen at ({row}, {col})"),
            9,
        );

        if place_row(row + 1, queens, em) {
            return true;
        }

        queens.pop();
        em.emit(
            &board(queens, None),
            format!("row {} dead-ends, removed the queen from row {row}", row + 1),
            13,
        );
    }
    false
}

fn run(em: &mut StepEmitter<'_, SceneSnapshot>) {
    let mut queens = Vec::new();
    em.emit(&board(&queens, None), format!("empty {N} by {N} board"), 1);

    if place_row(0, &mut queens, em) {
        em.emit(
            &board(&queens, None),
            format!("all {N} queens placed"),
            3,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_backtracks_before_solving() {
        let trace = SCENARIO.record().unwrap();

        let retreats = trace
            .iter()
            .filter(|step| step.message().contains("dead-ends"))
            .count();
        assert!(retreats > 0);
    }

    #[test]
    fn test_final_board_is_a_valid_solution() {
        let trace = SCENARIO.record().unwrap();

        match trace.last().snapshot() {
            SceneSnapshot::Board { queens, .. } => {
                assert_eq!(*queens, vec![1, 3, 0, 2]);
                for row in 0..queens.len() {
                    assert_eq!(conflict(&queens[..row], row, queens[row]), None);
                }
            }
            other => panic!("expected a board snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_queens_never_exceed_one_per_row() {
        let trace = SCENARIO.record().unwrap();

        for step in &trace {
            match step.snapshot() {
                SceneSnapshot::Board { queens, size, .. } => {
                    assert!(queens.len() <= *size);
                }
                other => panic!("expected a board snapshot, got {other:?}"),
            }
        }
    }
}
