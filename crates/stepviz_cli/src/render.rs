//! Plain-text rendering of steps and scenes, one line per step.

use stepviz_engine::Step;
use stepviz_scenarios::SceneSnapshot;

/// One playback line: position, listing line, message, and the scene.
pub fn step_line(step: &Step<SceneSnapshot>, total: usize) -> String {
    let width = total.to_string().len();
    format!(
        "[{:>width$}/{total}] L{:<3} {:<44} {}",
        step.sequence_index() + 1,
        step.source_line(),
        step.message(),
        scene(step.snapshot()),
    )
}

/// Compact single-line view of a snapshot.
///
/// Focused values are parenthesized and the active window is bracketed.
/// Out-of-range indices in a hand-edited trace file are ignored rather
/// than rendered wrong.
pub fn scene(snapshot: &SceneSnapshot) -> String {
    match snapshot {
        SceneSnapshot::Array {
            values,
            focus,
            window,
            best,
        } => {
            let mut pieces: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            for &index in focus {
                if let Some(piece) = pieces.get_mut(index) {
                    *piece = format!("({piece})");
                }
            }
            if let Some((lo, hi)) = window {
                if let Some(piece) = pieces.get_mut(*lo) {
                    *piece = format!("[{piece}");
                }
                if let Some(piece) = pieces.get_mut(*hi) {
                    *piece = format!("{piece}]");
                }
            }
            let mut line = pieces.join(" ");
            if let Some(best) = best {
                line.push_str(&format!("  best={best}"));
            }
            line
        }
        SceneSnapshot::Board { size, queens, probe } => {
            let mut rows = Vec::with_capacity(*size);
            for row in 0..*size {
                let mut cells = String::with_capacity(*size);
                for col in 0..*size {
                    let cell = if queens.get(row) == Some(&col) {
                        'Q'
                    } else if *probe == Some((row, col)) {
                        '?'
                    } else {
                        '.'
                    };
                    cells.push(cell);
                }
                rows.push(cells);
            }
            rows.join("|")
        }
        SceneSnapshot::Graph {
            visited,
            frontier,
            current,
            ..
        } => {
            let mut line = String::new();
            if let Some(current) = current {
                line.push_str(&format!("at {current} "));
            }
            line.push_str(&format!(
                "visited[{}] queue[{}]",
                join(visited),
                join(frontier)
            ));
            line
        }
    }
}

/// A reference listing with 1-based line numbers.
pub fn listing(source: &str) -> String {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>3} | {line}\n", i + 1))
        .collect()
}

fn join(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_scene_marks_focus_and_window() {
        let snapshot = SceneSnapshot::Array {
            values: vec![2, -1, 4, 3],
            focus: vec![1],
            window: Some((1, 3)),
            best: Some(6),
        };
        assert_eq!(scene(&snapshot), "2 [(-1) 4 3]  best=6");
    }

    #[test]
    fn test_array_scene_ignores_out_of_range_marks() {
        let snapshot = SceneSnapshot::Array {
            values: vec![5, 6],
            focus: vec![9],
            window: Some((0, 9)),
            best: None,
        };
        assert_eq!(scene(&snapshot), "[5 6");
    }

    #[test]
    fn test_board_scene_draws_queens_and_probe() {
        let snapshot = SceneSnapshot::Board {
            size: 4,
            queens: vec![1, 3],
            probe: Some((2, 0)),
        };
        assert_eq!(scene(&snapshot), ".Q..|...Q|?...|....");
    }

    #[test]
    fn test_graph_scene_lists_visited_and_queue() {
        let snapshot = SceneSnapshot::Graph {
            nodes: 4,
            edges: vec![(0, 1), (1, 2)],
            visited: vec![0, 1],
            frontier: vec![2],
            current: Some(1),
        };
        assert_eq!(scene(&snapshot), "at 1 visited[0 1] queue[2]");
    }

    #[test]
    fn test_listing_numbers_every_line() {
        assert_eq!(listing("first\nsecond"), "  1 | first\n  2 | second\n");
    }

    #[test]
    fn test_step_line_shape() {
        let trace = stepviz_engine::record(|em| {
            em.emit(
                &SceneSnapshot::Array {
                    values: vec![1, 2],
                    focus: vec![],
                    window: None,
                    best: None,
                },
                "two values",
                3,
            );
        })
        .unwrap();

        let line = step_line(trace.first(), 18);
        assert!(line.starts_with("[ 1/18] L3"));
        assert!(line.contains("two values"));
        assert!(line.ends_with("1 2"));
    }
}
