//! Breadth-first traversal of a small undirected graph, showing the
//! visit order and the live queue. Neighbors expand in edge-declaration
//! order, so the traversal is fully deterministic.

use std::collections::VecDeque;

use stepviz_engine::StepEmitter;

use crate::snapshot::SceneSnapshot;
use crate::Scenario;

const NODES: usize = 8;
const EDGES: [(usize, usize); 8] = [
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 4),
    (3, 5),
    (4, 5),
    (5, 6),
    (4, 7),
];
const START: usize = 0;

pub(crate) const SCENARIO: Scenario = Scenario {
    name: "bfs",
    title: "Breadth-first search",
    summary: "Visit a graph level by level from a start node, queueing \
              each node the first time it is discovered.",
    source: SOURCE,
    run,
};

const SOURCE: &str = "\
let mut queue = VecDeque::from([START]);
let mut seen = vec![false; NODES];
seen[START] = true;
while let Some(node) = queue.pop_front() {
    visit(node);
    for next in neighbors(node) {
        if !seen[next] {
            seen[next] = true;
            queue.push_back(next);
        }
    }
}";

fn run(em: &mut StepEmitter<'_, SceneSnapshot>) {
    let mut adjacency = vec![Vec::new(); NODES];
    for (a, b) in EDGES {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }

    let snapshot = |visited: &[usize], frontier: &VecDeque<usize>, current: Option<usize>| {
        SceneSnapshot::Graph {
            nodes: NODES,
            edges: EDGES.to_vec(),
            visited: visited.to_vec(),
            frontier: frontier.iter().copied().collect(),
            current,
        }
    };

    let mut queue = VecDeque::from([START]);
    let mut seen = vec![false; NODES];
    seen[START] = true;
    let mut visited = Vec::new();

    em.emit(
        &snapshot(&visited, &queue, None),
        format!("queued start node {START}"),
        1,
    );

    while let Some(node) = queue.pop_front() {
        visited.push(node);
        em.emit(
            &snapshot(&visited, &queue, Some(node)),
            format!("visiting node {node}"),
            5,
        );

        for &next in &adjacency[node] {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
                em.emit(
                    &snapshot(&visited, &queue, Some(node)),
                    format!("discovered node {next} from {node}"),
                    9,
                );
            }
        }
    }

    em.emit(
        &snapshot(&visited, &queue, None),
        format!("queue drained, visited {} nodes", visited.len()),
        4,
    );
}
