//! Renderable state derived from step events
//!
//! [`Presentation`] is what a front end draws: the current array, which indices or
//! nodes to highlight, and a narration line. It is rebuilt purely by folding events
//! over the initial state, so replaying the same events always yields the same view.

use crate::catalog::Category;
use crate::input::Input;
use crate::trace::{GraphAction, SearchAction, SortAction, Step, Value};
use serde::Serialize;

/// Highlight and narration state for one position in a trace
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Presentation {
    pub description: String,
    /// Latest array contents (sorting and searching)
    pub array: Vec<Value>,
    /// Indices under comparison
    pub compared: Vec<usize>,
    /// Indices just written or swapped
    pub active: Vec<usize>,
    /// Indices known to be in final position, in the order they were marked
    pub sorted: Vec<usize>,
    pub found: Option<usize>,
    pub active_node: Option<usize>,
    /// Visited nodes, in visit order
    pub visited: Vec<usize>,
    /// Nodes announced by `queue` and not yet visited
    pub frontier: Vec<usize>,
}

impl Presentation {
    pub fn initial(input: &Input) -> Self {
        Presentation {
            description: "Ready to start".to_string(),
            array: input.values().to_vec(),
            ..Presentation::default()
        }
    }

    pub fn apply(&mut self, step: &Step) {
        self.description = step.description().to_string();
        self.compared.clear();
        self.active.clear();

        match step {
            Step::Sort(s) => {
                self.array.clone_from(&s.snapshot);
                match s.kind {
                    SortAction::Compare => self.compared.extend(s.indices.iter().copied()),
                    SortAction::Swap | SortAction::Overwrite => {
                        self.active.extend(s.indices.iter().copied())
                    }
                    SortAction::Sorted => {
                        for &index in &s.indices {
                            if !self.sorted.contains(&index) {
                                self.sorted.push(index);
                            }
                        }
                    }
                }
            }
            Step::Search(s) => match s.kind {
                SearchAction::Compare => self.active.extend(s.indices.iter().copied()),
                SearchAction::Found => self.found = s.indices.first().copied(),
                SearchAction::NotFound => self.found = None,
            },
            Step::Graph(s) => match s.kind {
                GraphAction::Visit => {
                    self.active_node = Some(s.node);
                    if !self.visited.contains(&s.node) {
                        self.visited.push(s.node);
                    }
                    self.frontier.retain(|&n| n != s.node);
                }
                GraphAction::Explore => self.active_node = Some(s.node),
                GraphAction::Queue => {
                    if !self.frontier.contains(&s.node) {
                        self.frontier.push(s.node);
                    }
                }
                GraphAction::Finished => {}
            },
        }
    }

    /// Narration once the trace is exhausted
    pub fn finish(&mut self, category: Category) {
        self.compared.clear();
        self.active.clear();
        self.description = match category {
            Category::Sorting => "Sorted!",
            Category::Searching => "Search complete",
            Category::Graph => "Traversal complete!",
            Category::Other => "Done",
        }
        .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::graph::Graph;
    use crate::trace::Algorithm;

    #[test]
    fn test_sort_projection_tracks_highlights() {
        let input = Input::Sequence {
            values: vec![5, 3, 8, 1],
        };
        let mut view = Presentation::initial(&input);
        let mut trace = Algorithm::BubbleSort.trace(&input).unwrap();

        view.apply(&trace.next().unwrap());
        assert_eq!(view.compared, vec![0, 1]);
        assert!(view.active.is_empty());

        view.apply(&trace.next().unwrap());
        assert!(view.compared.is_empty());
        assert_eq!(view.active, vec![0, 1]);
        assert_eq!(view.array, vec![3, 5, 8, 1]);
    }

    #[test]
    fn test_graph_projection_moves_nodes_out_of_frontier() {
        let input = Input::Graph {
            graph: Graph::demo(),
            start: 0,
        };
        let mut view = Presentation::initial(&input);
        // queue 0, visit 0, explore 0, queue 1, queue 2
        for step in Algorithm::Bfs.trace(&input).unwrap().take(5) {
            view.apply(&step);
        }

        assert_eq!(view.visited, vec![0]);
        assert_eq!(view.frontier, vec![1, 2]);
        assert_eq!(view.active_node, Some(0));
    }

    #[test]
    fn test_finish_text() {
        let mut view = Presentation::default();
        view.finish(Category::Graph);
        assert_eq!(view.description, "Traversal complete!");
    }
}
