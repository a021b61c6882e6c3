//! Algorithm descriptors
//!
//! A [`Catalog`] is a read-only, in-memory collection of [`AlgorithmDescriptor`]s keyed
//! by slug. The engine only needs a descriptor's [`Category`] to pick a trace family;
//! the rest is metadata for whoever presents it.
//!
//! Descriptors come from [`Catalog::builtin`] or from a JSON array via
//! [`Catalog::from_json`]. Categories the engine has no generators for are kept
//! (as [`Category::Other`]) and resolve to an "unsupported algorithm" error.

use crate::error::TraceError;
use crate::trace::Algorithm;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    /// Known to the record store, but without trace generators
    #[serde(other)]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graph => "graph",
            Category::Other => "other",
        };
        f.write_str(name)
    }
}

/// Asymptotic cost, as display strings (`"O(n log n)"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub time: String,
    pub space: String,
}

/// Metadata record for one algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmDescriptor {
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub complexity: Complexity,
}

impl AlgorithmDescriptor {
    fn new(
        slug: &str,
        name: &str,
        category: Category,
        description: &str,
        time: &str,
        space: &str,
    ) -> Self {
        AlgorithmDescriptor {
            slug: slug.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            complexity: Complexity {
                time: time.to_string(),
                space: space.to_string(),
            },
        }
    }
}

/// Descriptors indexed by slug, in load order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    descriptors: Vec<AlgorithmDescriptor>,
    by_slug: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog. A later descriptor with a duplicate slug replaces the earlier one.
    pub fn new(descriptors: Vec<AlgorithmDescriptor>) -> Self {
        let mut catalog = Catalog::default();
        for descriptor in descriptors {
            catalog.insert(descriptor);
        }
        catalog
    }

    fn insert(&mut self, descriptor: AlgorithmDescriptor) {
        match self.by_slug.get(&descriptor.slug) {
            Some(&index) => {
                warn!(slug = %descriptor.slug, "duplicate descriptor replaces earlier entry");
                self.descriptors[index] = descriptor;
            }
            None => {
                self.by_slug
                    .insert(descriptor.slug.clone(), self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
    }

    /// Decode a JSON array of descriptors
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        let descriptors: Vec<AlgorithmDescriptor> = serde_json::from_str(json)?;
        debug!(count = descriptors.len(), "loaded catalog");
        Ok(Catalog::new(descriptors))
    }

    /// The nine algorithms this engine can trace
    pub fn builtin() -> Self {
        use Category::*;
        Catalog::new(vec![
            AlgorithmDescriptor::new(
                "bubble-sort",
                "Bubble Sort",
                Sorting,
                "A simple sorting algorithm that repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                "O(n²)",
                "O(1)",
            ),
            AlgorithmDescriptor::new(
                "selection-sort",
                "Selection Sort",
                Sorting,
                "Sorts an array by repeatedly finding the minimum element from unsorted part and putting it at the beginning.",
                "O(n²)",
                "O(1)",
            ),
            AlgorithmDescriptor::new(
                "insertion-sort",
                "Insertion Sort",
                Sorting,
                "Builds the final sorted array one item at a time. It is much less efficient on large lists than more advanced algorithms.",
                "O(n²)",
                "O(1)",
            ),
            AlgorithmDescriptor::new(
                "quick-sort",
                "Quick Sort",
                Sorting,
                "A divide-and-conquer algorithm. It works by selecting a 'pivot' element from the array and partitioning the other elements into two sub-arrays.",
                "O(n log n)",
                "O(log n)",
            ),
            AlgorithmDescriptor::new(
                "merge-sort",
                "Merge Sort",
                Sorting,
                "A divide-and-conquer algorithm that divides the input array into two halves, calls itself for the two halves, and then merges the two sorted halves.",
                "O(n log n)",
                "O(n)",
            ),
            AlgorithmDescriptor::new(
                "linear-search",
                "Linear Search",
                Searching,
                "Sequentially checks each element of the list until a match is found or the whole list has been searched.",
                "O(n)",
                "O(1)",
            ),
            AlgorithmDescriptor::new(
                "binary-search",
                "Binary Search",
                Searching,
                "Search a sorted array by repeatedly dividing the search interval in half.",
                "O(log n)",
                "O(1)",
            ),
            AlgorithmDescriptor::new(
                "bfs",
                "Breadth First Search",
                Graph,
                "Traverses a graph level by level, visiting all neighbors of a node before moving to the next level.",
                "O(V + E)",
                "O(V)",
            ),
            AlgorithmDescriptor::new(
                "dfs",
                "Depth First Search",
                Graph,
                "Traverses a graph by exploring as far as possible along each branch before backtracking.",
                "O(V + E)",
                "O(V)",
            ),
        ])
    }

    pub fn get(&self, slug: &str) -> Option<&AlgorithmDescriptor> {
        self.by_slug.get(slug).map(|&i| &self.descriptors[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.descriptors.iter()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.category == category)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Find the descriptor for `slug` and the trace family its category selects
    pub fn resolve(&self, slug: &str) -> Result<(&AlgorithmDescriptor, Algorithm), TraceError> {
        let unsupported = || TraceError::UnsupportedAlgorithm {
            slug: slug.to_string(),
        };
        let descriptor = self.get(slug).ok_or_else(unsupported)?;
        if descriptor.category == Category::Other {
            return Err(unsupported());
        }

        let algorithm = Algorithm::from_slug(slug)?;
        if algorithm.category() != descriptor.category {
            return Err(TraceError::CategoryMismatch {
                slug: slug.to_string(),
                expected: algorithm.category(),
                got: descriptor.category,
            });
        }
        Ok((descriptor, algorithm))
    }
}
