//! Step-trace engine
//!
//! Every algorithm in this module is an explicit state machine that implements
//! [`Iterator`]: each call to `next()` runs the algorithm just far enough to produce
//! one step event, then suspends. Recursive algorithms keep their own work stack so
//! they can stop between any two events, including mid-recursion.
//!
//! - [`sorting`]: bubble, selection, insertion, quick and merge sort
//! - [`searching`]: linear and binary search
//! - [`graph`]: breadth-first and depth-first traversal over a [`graph::Graph`]
//!
//! # Working copies
//!
//! Generators copy their input when constructed. The caller's data is never mutated,
//! and two generators built from equal input produce identical event sequences.
//!
//! # Event vocabularies
//!
//! Each family has its own closed set of event kinds ([`SortAction`],
//! [`SearchAction`], [`GraphAction`]). The vocabularies are not symmetric: only
//! breadth-first traversal emits `finished`.

pub mod graph;
pub mod searching;
pub mod sorting;

use crate::catalog::Category;
use crate::error::TraceError;
use crate::input::Input;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use graph::{BreadthFirst, DepthFirst};
use searching::{BinarySearch, LinearSearch};
use sorting::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};

/// Element type used by the driver and the command-line front end
pub type Value = i64;

/// Array positions an event refers to (at most three)
pub type Indices = SmallVec<[usize; 3]>;

/// Event kinds emitted by sorting traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAction {
    Compare,
    Swap,
    Overwrite,
    Sorted,
}

/// One sorting event, with a copy of the array as it was when the event fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortStep<T> {
    pub kind: SortAction,
    pub indices: Indices,
    pub snapshot: Vec<T>,
    pub description: String,
}

/// Event kinds emitted by searching traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAction {
    Compare,
    Found,
    NotFound,
}

/// One searching event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStep {
    pub kind: SearchAction,
    pub indices: Indices,
    pub description: String,
}

/// Event kinds emitted by graph traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphAction {
    Visit,
    Explore,
    Queue,
    Finished,
}

/// One traversal event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStep {
    pub kind: GraphAction,
    pub node: usize,
    /// Neighbor list, present only on `explore`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbors: Option<Vec<usize>>,
    pub description: String,
}

/// A step event from any family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "kebab-case")]
pub enum Step {
    Sort(SortStep<Value>),
    Search(SearchStep),
    Graph(GraphStep),
}

impl Step {
    /// Human-readable narration. Never used for control decisions.
    pub fn description(&self) -> &str {
        match self {
            Step::Sort(s) => &s.description,
            Step::Search(s) => &s.description,
            Step::Graph(s) => &s.description,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Step::Sort(_) => Category::Sorting,
            Step::Search(_) => Category::Searching,
            Step::Graph(_) => Category::Graph,
        }
    }

    /// Short kind tag, as serialized (`compare`, `not-found`, ...)
    pub fn kind_name(&self) -> &'static str {
        match self {
            Step::Sort(s) => match s.kind {
                SortAction::Compare => "compare",
                SortAction::Swap => "swap",
                SortAction::Overwrite => "overwrite",
                SortAction::Sorted => "sorted",
            },
            Step::Search(s) => match s.kind {
                SearchAction::Compare => "compare",
                SearchAction::Found => "found",
                SearchAction::NotFound => "not-found",
            },
            Step::Graph(s) => match s.kind {
                GraphAction::Visit => "visit",
                GraphAction::Explore => "explore",
                GraphAction::Queue => "queue",
                GraphAction::Finished => "finished",
            },
        }
    }
}

/// Every algorithm the engine can trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    QuickSort,
    MergeSort,
    LinearSearch,
    BinarySearch,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Look up the generator family for a slug
    pub fn from_slug(slug: &str) -> Result<Self, TraceError> {
        Self::ALL
            .into_iter()
            .find(|a| a.slug() == slug)
            .ok_or_else(|| TraceError::UnsupportedAlgorithm {
                slug: slug.to_string(),
            })
    }

    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::SelectionSort => "selection-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::MergeSort => "merge-sort",
            Algorithm::LinearSearch => "linear-search",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Algorithm::BubbleSort
            | Algorithm::SelectionSort
            | Algorithm::InsertionSort
            | Algorithm::QuickSort
            | Algorithm::MergeSort => Category::Sorting,
            Algorithm::LinearSearch | Algorithm::BinarySearch => Category::Searching,
            Algorithm::Bfs | Algorithm::Dfs => Category::Graph,
        }
    }

    /// Instantiate a fresh trace over a working copy of `input`
    pub fn trace(self, input: &Input) -> Result<Trace, TraceError> {
        let trace = match (self, input) {
            (Algorithm::BubbleSort, Input::Sequence { values }) => {
                Trace::Bubble(BubbleSort::new(values))
            }
            (Algorithm::SelectionSort, Input::Sequence { values }) => {
                Trace::Selection(SelectionSort::new(values))
            }
            (Algorithm::InsertionSort, Input::Sequence { values }) => {
                Trace::Insertion(InsertionSort::new(values))
            }
            (Algorithm::QuickSort, Input::Sequence { values }) => Trace::Quick(QuickSort::new(values)),
            (Algorithm::MergeSort, Input::Sequence { values }) => Trace::Merge(MergeSort::new(values)),
            (Algorithm::LinearSearch, Input::Search { values, target }) => {
                Trace::Linear(LinearSearch::new(values, *target))
            }
            (Algorithm::BinarySearch, Input::Search { values, target }) => {
                Trace::Binary(BinarySearch::new(values, *target))
            }
            (Algorithm::Bfs, Input::Graph { graph, start }) => {
                Trace::Breadth(BreadthFirst::new(graph, *start)?)
            }
            (Algorithm::Dfs, Input::Graph { graph, start }) => {
                Trace::Depth(DepthFirst::new(graph, *start)?)
            }
            (algorithm, input) => {
                return Err(TraceError::CategoryMismatch {
                    slug: algorithm.slug().to_string(),
                    expected: algorithm.category(),
                    got: input.category(),
                });
            }
        };

        debug!(algorithm = self.slug(), "instantiated trace");
        Ok(trace)
    }
}

/// A running trace of any algorithm
#[derive(Debug, Clone)]
pub enum Trace {
    Bubble(BubbleSort<Value>),
    Selection(SelectionSort<Value>),
    Insertion(InsertionSort<Value>),
    Quick(QuickSort<Value>),
    Merge(MergeSort<Value>),
    Linear(LinearSearch<Value>),
    Binary(BinarySearch<Value>),
    Breadth(BreadthFirst),
    Depth(DepthFirst),
}

impl Trace {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Trace::Bubble(_) => Algorithm::BubbleSort,
            Trace::Selection(_) => Algorithm::SelectionSort,
            Trace::Insertion(_) => Algorithm::InsertionSort,
            Trace::Quick(_) => Algorithm::QuickSort,
            Trace::Merge(_) => Algorithm::MergeSort,
            Trace::Linear(_) => Algorithm::LinearSearch,
            Trace::Binary(_) => Algorithm::BinarySearch,
            Trace::Breadth(_) => Algorithm::Bfs,
            Trace::Depth(_) => Algorithm::Dfs,
        }
    }
}

impl Iterator for Trace {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self {
            Trace::Bubble(t) => t.next().map(Step::Sort),
            Trace::Selection(t) => t.next().map(Step::Sort),
            Trace::Insertion(t) => t.next().map(Step::Sort),
            Trace::Quick(t) => t.next().map(Step::Sort),
            Trace::Merge(t) => t.next().map(Step::Sort),
            Trace::Linear(t) => t.next().map(Step::Search),
            Trace::Binary(t) => t.next().map(Step::Search),
            Trace::Breadth(t) => t.next().map(Step::Graph),
            Trace::Depth(t) => t.next().map(Step::Graph),
        }
    }
}
