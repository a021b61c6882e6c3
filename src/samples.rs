//! Sample input generation
//!
//! Produces the inputs a visualizer starts with when the user has not typed any:
//! a random array for sorting, a random array plus a target drawn from it for
//! searching (sorted ascending for binary search), and the demo graph from node 0.
//! Generation is seeded, so the same seed always yields the same input.

use crate::config::SampleConfig;
use crate::input::Input;
use crate::trace::graph::Graph;
use crate::trace::{Algorithm, Value};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded generator of sample inputs
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    rng: ChaCha8Rng,
    config: SampleConfig,
}

impl SampleGenerator {
    pub fn new(seed: u64, config: SampleConfig) -> Self {
        SampleGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
        }
    }

    fn values(&mut self, len: usize, min: Value, max: Value) -> Vec<Value> {
        let (low, high) = (min.min(max), min.max(max));
        (0..len).map(|_| self.rng.gen_range(low..=high)).collect()
    }

    /// A fresh input suited to `algorithm`
    pub fn input_for(&mut self, algorithm: Algorithm) -> Input {
        match algorithm {
            Algorithm::LinearSearch | Algorithm::BinarySearch => {
                let (len, min, max) = (
                    self.config.searching_len,
                    self.config.searching_min,
                    self.config.searching_max,
                );
                let mut values = self.values(len, min, max);
                if algorithm == Algorithm::BinarySearch {
                    values.sort_unstable();
                }
                let target = values.choose(&mut self.rng).copied().unwrap_or(min);
                Input::Search { values, target }
            }
            Algorithm::Bfs | Algorithm::Dfs => Input::Graph {
                graph: Graph::demo(),
                start: 0,
            },
            _ => {
                let (len, min, max) = (
                    self.config.sorting_len,
                    self.config.sorting_min,
                    self.config.sorting_max,
                );
                Input::Sequence {
                    values: self.values(len, min, max),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_input() {
        let mut a = SampleGenerator::new(7, SampleConfig::default());
        let mut b = SampleGenerator::new(7, SampleConfig::default());
        assert_eq!(
            a.input_for(Algorithm::MergeSort),
            b.input_for(Algorithm::MergeSort)
        );
    }

    #[test]
    fn test_sorting_sample_shape() {
        let mut samples = SampleGenerator::new(1, SampleConfig::default());
        let input = samples.input_for(Algorithm::BubbleSort);
        let values = input.values();
        assert_eq!(values.len(), 24);
        assert!(values.iter().all(|v| (10..=99).contains(v)));
    }

    #[test]
    fn test_binary_search_sample_is_sorted_and_hits() {
        let mut samples = SampleGenerator::new(3, SampleConfig::default());
        match samples.input_for(Algorithm::BinarySearch) {
            Input::Search { values, target } => {
                assert_eq!(values.len(), 16);
                assert!(values.windows(2).all(|w| w[0] <= w[1]));
                assert!(values.contains(&target));
            }
            other => panic!("Expected search input, got {:?}", other),
        }
    }

    #[test]
    fn test_graph_sample_is_demo() {
        let mut samples = SampleGenerator::new(0, SampleConfig::default());
        assert_eq!(
            samples.input_for(Algorithm::Dfs),
            Input::Graph {
                graph: Graph::demo(),
                start: 0
            }
        );
    }
}
