//! Graph traversal trace generators
//!
//! Graphs are adjacency lists indexed by node id. Traversals only ever touch nodes
//! reachable from the start node.
//!
//! Breadth-first marks a node discovered when it is enqueued, so each node is queued
//! once. Depth-first checks visitation when a node is popped, so a node can be pushed
//! (and announced with `queue`) several times before its single `visit`.

use super::{GraphAction, GraphStep};
use crate::error::TraceError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Adjacency-list graph with validated node ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph, rejecting neighbor ids that do not name a node
    pub fn new(adjacency: Vec<Vec<usize>>) -> Result<Self, TraceError> {
        let nodes = adjacency.len();
        for (node, neighbors) in adjacency.iter().enumerate() {
            if let Some(&neighbor) = neighbors.iter().find(|&&n| n >= nodes) {
                return Err(TraceError::NeighborOutOfRange {
                    node,
                    neighbor,
                    nodes,
                });
            }
        }
        Ok(Graph { adjacency })
    }

    /// Six-node demo graph
    ///
    /// ```text
    /// 0 → [1, 2]    3 → [1]
    /// 1 → [0, 3, 4] 4 → [1, 5]
    /// 2 → [0, 5]    5 → [2, 4]
    /// ```
    pub fn demo() -> Self {
        Graph {
            adjacency: vec![
                vec![1, 2],
                vec![0, 3, 4],
                vec![0, 5],
                vec![1],
                vec![1, 5],
                vec![2, 4],
            ],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn check_start(&self, start: usize) -> Result<(), TraceError> {
        if start >= self.node_count() {
            return Err(TraceError::StartOutOfRange {
                start,
                nodes: self.node_count(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<usize>>> for Graph {
    type Error = TraceError;

    fn try_from(adjacency: Vec<Vec<usize>>) -> Result<Self, TraceError> {
        Graph::new(adjacency)
    }
}

impl From<Graph> for Vec<Vec<usize>> {
    fn from(graph: Graph) -> Self {
        graph.adjacency
    }
}

fn event(kind: GraphAction, node: usize, description: String) -> GraphStep {
    GraphStep {
        kind,
        node,
        neighbors: None,
        description,
    }
}

fn explore(graph: &Graph, node: usize) -> GraphStep {
    let neighbors = graph.neighbors(node).to_vec();
    let listed = neighbors
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    GraphStep {
        kind: GraphAction::Explore,
        node,
        neighbors: Some(neighbors),
        description: format!("Exploring neighbors of {}: {}", node, listed),
    }
}

#[derive(Debug, Clone, Copy)]
enum BreadthPhase {
    Seed,
    Dequeue,
    Explore { node: usize },
    Discover { node: usize, next: usize },
}

/// FIFO traversal emitting `queue`, then per node `visit`, `explore`, one `queue` per
/// newly discovered neighbor, and `finished`
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    graph: Graph,
    start: usize,
    frontier: VecDeque<usize>,
    discovered: FxHashSet<usize>,
    phase: BreadthPhase,
}

impl BreadthFirst {
    pub fn new(graph: &Graph, start: usize) -> Result<Self, TraceError> {
        graph.check_start(start)?;
        let mut discovered = FxHashSet::default();
        discovered.insert(start);
        Ok(BreadthFirst {
            graph: graph.clone(),
            start,
            frontier: VecDeque::from([start]),
            discovered,
            phase: BreadthPhase::Seed,
        })
    }
}

impl Iterator for BreadthFirst {
    type Item = GraphStep;

    fn next(&mut self) -> Option<GraphStep> {
        loop {
            match self.phase {
                BreadthPhase::Seed => {
                    self.phase = BreadthPhase::Dequeue;
                    return Some(event(
                        GraphAction::Queue,
                        self.start,
                        format!("Starting BFS from node {}", self.start),
                    ));
                }
                BreadthPhase::Dequeue => {
                    let node = self.frontier.pop_front()?;
                    self.phase = BreadthPhase::Explore { node };
                    return Some(event(
                        GraphAction::Visit,
                        node,
                        format!("Visiting node {}", node),
                    ));
                }
                BreadthPhase::Explore { node } => {
                    self.phase = BreadthPhase::Discover { node, next: 0 };
                    return Some(explore(&self.graph, node));
                }
                BreadthPhase::Discover { node, next } => {
                    let neighbors = self.graph.neighbors(node);
                    let Some(&neighbor) = neighbors.get(next) else {
                        self.phase = BreadthPhase::Dequeue;
                        return Some(event(
                            GraphAction::Finished,
                            node,
                            format!("Finished processing node {}", node),
                        ));
                    };
                    self.phase = BreadthPhase::Discover {
                        node,
                        next: next + 1,
                    };
                    if self.discovered.insert(neighbor) {
                        self.frontier.push_back(neighbor);
                        return Some(event(
                            GraphAction::Queue,
                            neighbor,
                            format!("Queuing unvisited neighbor {}", neighbor),
                        ));
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum DepthPhase {
    Seed,
    Pop,
    Explore { node: usize },
    Push { node: usize, remaining: usize },
}

/// LIFO traversal. Neighbors are pushed in reverse so they pop in list order.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    graph: Graph,
    start: usize,
    stack: Vec<usize>,
    visited: FxHashSet<usize>,
    phase: DepthPhase,
}

impl DepthFirst {
    pub fn new(graph: &Graph, start: usize) -> Result<Self, TraceError> {
        graph.check_start(start)?;
        Ok(DepthFirst {
            graph: graph.clone(),
            start,
            stack: vec![start],
            visited: FxHashSet::default(),
            phase: DepthPhase::Seed,
        })
    }
}

impl Iterator for DepthFirst {
    type Item = GraphStep;

    fn next(&mut self) -> Option<GraphStep> {
        loop {
            match self.phase {
                DepthPhase::Seed => {
                    self.phase = DepthPhase::Pop;
                    return Some(event(
                        GraphAction::Queue,
                        self.start,
                        format!("Starting DFS from node {}", self.start),
                    ));
                }
                DepthPhase::Pop => {
                    let node = self.stack.pop()?;
                    if !self.visited.insert(node) {
                        continue;
                    }
                    self.phase = DepthPhase::Explore { node };
                    return Some(event(
                        GraphAction::Visit,
                        node,
                        format!("Visiting node {}", node),
                    ));
                }
                DepthPhase::Explore { node } => {
                    self.phase = DepthPhase::Push {
                        node,
                        remaining: self.graph.neighbors(node).len(),
                    };
                    return Some(explore(&self.graph, node));
                }
                DepthPhase::Push { node, remaining } => {
                    if remaining == 0 {
                        self.phase = DepthPhase::Pop;
                        continue;
                    }
                    let neighbor = self.graph.neighbors(node)[remaining - 1];
                    self.phase = DepthPhase::Push {
                        node,
                        remaining: remaining - 1,
                    };
                    if !self.visited.contains(&neighbor) {
                        self.stack.push(neighbor);
                        return Some(event(
                            GraphAction::Queue,
                            neighbor,
                            format!("Pushing neighbor {} to stack", neighbor),
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visits(steps: &[GraphStep]) -> Vec<usize> {
        steps
            .iter()
            .filter(|s| s.kind == GraphAction::Visit)
            .map(|s| s.node)
            .collect()
    }

    #[test]
    fn test_bfs_demo_graph_order() {
        let steps: Vec<_> = BreadthFirst::new(&Graph::demo(), 0).unwrap().collect();
        assert_eq!(visits(&steps), vec![0, 1, 2, 3, 4, 5]);

        let head: Vec<GraphAction> = steps.iter().take(6).map(|s| s.kind).collect();
        assert_eq!(
            head,
            vec![
                GraphAction::Queue,
                GraphAction::Visit,
                GraphAction::Explore,
                GraphAction::Queue,
                GraphAction::Queue,
                GraphAction::Finished,
            ]
        );
        assert_eq!(steps[2].neighbors.as_deref(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_bfs_queues_each_node_once() {
        let steps: Vec<_> = BreadthFirst::new(&Graph::demo(), 0).unwrap().collect();
        let mut queued: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == GraphAction::Queue)
            .map(|s| s.node)
            .collect();
        queued.sort();
        assert_eq!(queued, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dfs_demo_graph_order() {
        let steps: Vec<_> = DepthFirst::new(&Graph::demo(), 0).unwrap().collect();
        assert_eq!(visits(&steps), vec![0, 1, 3, 4, 5, 2]);
        assert!(steps.iter().all(|s| s.kind != GraphAction::Finished));
    }

    #[test]
    fn test_dfs_keeps_duplicate_queue_events() {
        // 0 → [1, 2], 1 → [2]: node 2 is pushed from 0 and again from 1
        let graph = Graph::new(vec![vec![1, 2], vec![2], vec![]]).unwrap();
        let steps: Vec<_> = DepthFirst::new(&graph, 0).unwrap().collect();
        let queued_two = steps
            .iter()
            .filter(|s| s.kind == GraphAction::Queue && s.node == 2)
            .count();

        assert_eq!(queued_two, 2);
        assert_eq!(visits(&steps), vec![0, 1, 2]);
    }

    #[test]
    fn test_unreachable_nodes_never_appear() {
        let graph = Graph::new(vec![vec![1], vec![0], vec![3], vec![2]]).unwrap();
        let bfs: Vec<_> = BreadthFirst::new(&graph, 0).unwrap().collect();
        let dfs: Vec<_> = DepthFirst::new(&graph, 0).unwrap().collect();

        for step in bfs.iter().chain(dfs.iter()) {
            assert!(step.node < 2, "unexpected node in {:?}", step);
        }
    }

    #[test]
    fn test_invalid_neighbor_rejected() {
        match Graph::new(vec![vec![1], vec![5]]) {
            Err(TraceError::NeighborOutOfRange {
                node,
                neighbor,
                nodes,
            }) => {
                assert_eq!((node, neighbor, nodes), (1, 5, 2));
            }
            other => panic!("Expected NeighborOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_start_out_of_range() {
        assert!(matches!(
            BreadthFirst::new(&Graph::demo(), 6),
            Err(TraceError::StartOutOfRange { start: 6, nodes: 6 })
        ));
        assert!(matches!(
            DepthFirst::new(&Graph::demo(), 9),
            Err(TraceError::StartOutOfRange { .. })
        ));
    }

    #[test]
    fn test_graph_deserialization_validates() {
        let graph: Graph = serde_json::from_str("[[1],[0]]").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert!(serde_json::from_str::<Graph>("[[3]]").is_err());
    }
}
