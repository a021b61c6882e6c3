//! Searching trace generators
//!
//! Both searches end in exactly one terminal event: `found` (once) or `not-found`.
//! Binary search assumes an ascending array; it does not check.

use super::{Indices, SearchAction, SearchStep};
use smallvec::smallvec;
use std::fmt::Display;

fn event(kind: SearchAction, indices: Indices, description: String) -> SearchStep {
    SearchStep {
        kind,
        indices,
        description,
    }
}

#[derive(Debug, Clone, Copy)]
enum LinearPhase {
    Scan,
    Found(usize),
    Done,
}

/// Left-to-right scan; stops at the first exact match
#[derive(Debug, Clone)]
pub struct LinearSearch<T> {
    arr: Vec<T>,
    target: T,
    i: usize,
    phase: LinearPhase,
}

impl<T: Ord + Clone + Display> LinearSearch<T> {
    pub fn new(input: &[T], target: T) -> Self {
        LinearSearch {
            arr: input.to_vec(),
            target,
            i: 0,
            phase: LinearPhase::Scan,
        }
    }
}

impl<T: Ord + Clone + Display> Iterator for LinearSearch<T> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        match self.phase {
            LinearPhase::Scan => {
                let i = self.i;
                if i >= self.arr.len() {
                    self.phase = LinearPhase::Done;
                    return Some(event(
                        SearchAction::NotFound,
                        Indices::new(),
                        format!("{} not found in the array.", self.target),
                    ));
                }
                self.phase = if self.arr[i] == self.target {
                    LinearPhase::Found(i)
                } else {
                    self.i += 1;
                    LinearPhase::Scan
                };
                Some(event(
                    SearchAction::Compare,
                    smallvec![i],
                    format!("Checking index {}: Is {} == {}?", i, self.arr[i], self.target),
                ))
            }
            LinearPhase::Found(i) => {
                self.phase = LinearPhase::Done;
                Some(event(
                    SearchAction::Found,
                    smallvec![i],
                    format!("Found {} at index {}!", self.target, i),
                ))
            }
            LinearPhase::Done => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum BinaryPhase {
    Probe,
    Narrow { mid: usize },
    Found(usize),
    Done,
}

/// Interval halving over an ascending array.
///
/// The interval is kept half-open (`[lo, hi)`) internally so it can shrink to empty
/// without underflow; events report the inclusive bounds `[lo, hi - 1]`.
#[derive(Debug, Clone)]
pub struct BinarySearch<T> {
    arr: Vec<T>,
    target: T,
    lo: usize,
    hi: usize,
    phase: BinaryPhase,
}

impl<T: Ord + Clone + Display> BinarySearch<T> {
    pub fn new(input: &[T], target: T) -> Self {
        BinarySearch {
            arr: input.to_vec(),
            target,
            lo: 0,
            hi: input.len(),
            phase: BinaryPhase::Probe,
        }
    }
}

impl<T: Ord + Clone + Display> Iterator for BinarySearch<T> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        match self.phase {
            BinaryPhase::Probe => {
                if self.lo >= self.hi {
                    self.phase = BinaryPhase::Done;
                    return Some(event(
                        SearchAction::NotFound,
                        Indices::new(),
                        format!("{} not found.", self.target),
                    ));
                }
                let (left, right) = (self.lo, self.hi - 1);
                let mid = left + (right - left) / 2;
                self.phase = if self.arr[mid] == self.target {
                    BinaryPhase::Found(mid)
                } else {
                    BinaryPhase::Narrow { mid }
                };
                Some(event(
                    SearchAction::Compare,
                    smallvec![mid, left, right],
                    format!(
                        "Checking middle index {} (value: {}). Range: [{}, {}]",
                        mid, self.arr[mid], left, right
                    ),
                ))
            }
            BinaryPhase::Narrow { mid } => {
                self.phase = BinaryPhase::Probe;
                let description = if self.arr[mid] < self.target {
                    self.lo = mid + 1;
                    format!("{} < {}, searching right half.", self.arr[mid], self.target)
                } else {
                    self.hi = mid;
                    format!("{} > {}, searching left half.", self.arr[mid], self.target)
                };
                Some(event(SearchAction::Compare, smallvec![mid], description))
            }
            BinaryPhase::Found(mid) => {
                self.phase = BinaryPhase::Done;
                Some(event(
                    SearchAction::Found,
                    smallvec![mid],
                    format!("Found {} at index {}!", self.target, mid),
                ))
            }
            BinaryPhase::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_walkthrough() {
        let steps: Vec<_> = BinarySearch::new(&[1, 3, 5, 7, 9, 11], 7).collect();
        let summary: Vec<(SearchAction, Vec<usize>)> = steps
            .iter()
            .map(|s| (s.kind, s.indices.to_vec()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (SearchAction::Compare, vec![2, 0, 5]),
                (SearchAction::Compare, vec![2]),
                (SearchAction::Compare, vec![4, 3, 5]),
                (SearchAction::Compare, vec![4]),
                (SearchAction::Compare, vec![3, 3, 3]),
                (SearchAction::Found, vec![3]),
            ]
        );
        assert_eq!(steps[1].description, "5 < 7, searching right half.");
        assert_eq!(steps[3].description, "9 > 7, searching left half.");
    }

    #[test]
    fn test_binary_search_below_first_element() {
        let steps: Vec<_> = BinarySearch::new(&[4, 8], 1).collect();
        assert_eq!(steps.last().unwrap().kind, SearchAction::NotFound);
        assert!(steps.iter().all(|s| s.kind != SearchAction::Found));
    }

    #[test]
    fn test_binary_search_empty() {
        let empty: [i64; 0] = [];
        let steps: Vec<_> = BinarySearch::new(&empty, 3).collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, SearchAction::NotFound);
        assert!(steps[0].indices.is_empty());
    }

    #[test]
    fn test_linear_search_not_found() {
        let steps: Vec<_> = LinearSearch::new(&[10, 20, 5, 3], 99).collect();
        let compares = steps
            .iter()
            .filter(|s| s.kind == SearchAction::Compare)
            .count();

        assert_eq!(compares, 4);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[4].kind, SearchAction::NotFound);
        assert_eq!(steps[4].description, "99 not found in the array.");
    }

    #[test]
    fn test_linear_search_stops_at_first_match() {
        let steps: Vec<_> = LinearSearch::new(&[4, 2, 4, 2], 2).collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].kind, SearchAction::Found);
        assert_eq!(steps[2].indices.as_slice(), &[1]);
    }
}
