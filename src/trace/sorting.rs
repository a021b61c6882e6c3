//! Sorting trace generators
//!
//! Each generator owns a working copy of its input and sorts it ascending, emitting a
//! [`SortStep`] for every comparison and every write. All of them finish by marking
//! each index `sorted` exactly once:
//!
//! | algorithm | `sorted` emission                                         |
//! |-----------|-----------------------------------------------------------|
//! | bubble    | one per pass (last unsorted slot), then index 0           |
//! | selection | one per outer iteration                                   |
//! | insertion | all indices, ascending, after the last insertion          |
//! | quick     | all indices, ascending, after the whole recursion         |
//! | merge     | all indices, ascending, after the whole recursion         |
//!
//! An empty input produces no events. A single element produces one `sorted [0]`.

use super::{Indices, SortAction, SortStep};
use smallvec::smallvec;
use std::fmt::Display;
use std::mem;

fn event<T: Clone>(
    arr: &[T],
    kind: SortAction,
    indices: Indices,
    description: String,
) -> SortStep<T> {
    SortStep {
        kind,
        indices,
        snapshot: arr.to_vec(),
        description,
    }
}

/// Trailing run of `sorted` events covering `[0, n)` in ascending order
#[derive(Debug, Clone, Copy, Default)]
struct SortedSweep {
    next: usize,
}

impl SortedSweep {
    fn advance<T: Clone + Display>(&mut self, arr: &[T]) -> Option<SortStep<T>> {
        let index = self.next;
        if index >= arr.len() {
            return None;
        }
        self.next += 1;
        Some(event(
            arr,
            SortAction::Sorted,
            smallvec![index],
            format!("{} is in its final position", arr[index]),
        ))
    }
}

// ---------------------------------------------------------------------------
// Bubble sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum BubblePhase {
    Compare,
    Exchange,
    Closing,
    Done,
}

/// Adjacent compare-and-swap passes; equal neighbors never swap
#[derive(Debug, Clone)]
pub struct BubbleSort<T> {
    arr: Vec<T>,
    pass: usize,
    j: usize,
    phase: BubblePhase,
}

impl<T: Ord + Clone + Display> BubbleSort<T> {
    pub fn new(input: &[T]) -> Self {
        BubbleSort {
            arr: input.to_vec(),
            pass: 0,
            j: 0,
            phase: if input.is_empty() {
                BubblePhase::Done
            } else {
                BubblePhase::Compare
            },
        }
    }

    /// Current contents of the working copy
    pub fn array(&self) -> &[T] {
        &self.arr
    }
}

impl<T: Ord + Clone + Display> Iterator for BubbleSort<T> {
    type Item = SortStep<T>;

    fn next(&mut self) -> Option<SortStep<T>> {
        let n = self.arr.len();
        loop {
            match self.phase {
                BubblePhase::Compare => {
                    if self.pass + 1 >= n {
                        self.phase = BubblePhase::Closing;
                        continue;
                    }
                    let end = n - self.pass - 1;
                    if self.j < end {
                        let j = self.j;
                        self.phase = BubblePhase::Exchange;
                        return Some(event(
                            &self.arr,
                            SortAction::Compare,
                            smallvec![j, j + 1],
                            format!("Comparing {} and {}", self.arr[j], self.arr[j + 1]),
                        ));
                    }
                    // Pass complete: the largest unsorted value sits at `end`
                    self.pass += 1;
                    self.j = 0;
                    return Some(event(
                        &self.arr,
                        SortAction::Sorted,
                        smallvec![end],
                        format!("{} is sorted", self.arr[end]),
                    ));
                }
                BubblePhase::Exchange => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = BubblePhase::Compare;
                    if self.arr[j] > self.arr[j + 1] {
                        self.arr.swap(j, j + 1);
                        return Some(event(
                            &self.arr,
                            SortAction::Swap,
                            smallvec![j, j + 1],
                            format!("Swapping {} and {}", self.arr[j + 1], self.arr[j]),
                        ));
                    }
                }
                BubblePhase::Closing => {
                    self.phase = BubblePhase::Done;
                    return Some(event(
                        &self.arr,
                        SortAction::Sorted,
                        smallvec![0],
                        "Array is sorted".to_string(),
                    ));
                }
                BubblePhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Selection sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum SelectionPhase {
    Select,
    Scan { min: usize, j: usize },
    Place { min: usize },
    Mark,
    Done,
}

/// Repeatedly moves the minimum of the unsorted suffix to its front.
/// The first minimum wins ties.
#[derive(Debug, Clone)]
pub struct SelectionSort<T> {
    arr: Vec<T>,
    i: usize,
    phase: SelectionPhase,
}

impl<T: Ord + Clone + Display> SelectionSort<T> {
    pub fn new(input: &[T]) -> Self {
        SelectionSort {
            arr: input.to_vec(),
            i: 0,
            phase: SelectionPhase::Select,
        }
    }

    pub fn array(&self) -> &[T] {
        &self.arr
    }
}

impl<T: Ord + Clone + Display> Iterator for SelectionSort<T> {
    type Item = SortStep<T>;

    fn next(&mut self) -> Option<SortStep<T>> {
        let n = self.arr.len();
        loop {
            match self.phase {
                SelectionPhase::Select => {
                    if self.i >= n {
                        self.phase = SelectionPhase::Done;
                        continue;
                    }
                    self.phase = SelectionPhase::Scan {
                        min: self.i,
                        j: self.i + 1,
                    };
                }
                SelectionPhase::Scan { min, j } => {
                    if j >= n {
                        self.phase = SelectionPhase::Place { min };
                        continue;
                    }
                    let step = event(
                        &self.arr,
                        SortAction::Compare,
                        smallvec![min, j],
                        format!(
                            "Comparing current minimum {} with {}",
                            self.arr[min], self.arr[j]
                        ),
                    );
                    let min = if self.arr[j] < self.arr[min] { j } else { min };
                    self.phase = SelectionPhase::Scan { min, j: j + 1 };
                    return Some(step);
                }
                SelectionPhase::Place { min } => {
                    self.phase = SelectionPhase::Mark;
                    if min != self.i {
                        let i = self.i;
                        self.arr.swap(i, min);
                        return Some(event(
                            &self.arr,
                            SortAction::Swap,
                            smallvec![i, min],
                            format!("Swapping new minimum {} to position {}", self.arr[i], i),
                        ));
                    }
                }
                SelectionPhase::Mark => {
                    let i = self.i;
                    self.i += 1;
                    self.phase = SelectionPhase::Select;
                    return Some(event(
                        &self.arr,
                        SortAction::Sorted,
                        smallvec![i],
                        format!("{} is sorted", self.arr[i]),
                    ));
                }
                SelectionPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum InsertionPhase<T> {
    Select,
    Shift { key: T, hole: usize },
    Move { key: T, hole: usize },
    Sweep(SortedSweep),
    Done,
}

/// Shifts larger elements right one slot at a time (`overwrite`, never `swap`),
/// then drops the held key into the hole.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    arr: Vec<T>,
    i: usize,
    phase: InsertionPhase<T>,
}

impl<T: Ord + Clone + Display> InsertionSort<T> {
    pub fn new(input: &[T]) -> Self {
        InsertionSort {
            arr: input.to_vec(),
            i: 1,
            phase: InsertionPhase::Select,
        }
    }

    pub fn array(&self) -> &[T] {
        &self.arr
    }
}

impl<T: Ord + Clone + Display> Iterator for InsertionSort<T> {
    type Item = SortStep<T>;

    fn next(&mut self) -> Option<SortStep<T>> {
        loop {
            match mem::replace(&mut self.phase, InsertionPhase::Done) {
                InsertionPhase::Select => {
                    if self.i >= self.arr.len() {
                        self.phase = InsertionPhase::Sweep(SortedSweep::default());
                        continue;
                    }
                    let key = self.arr[self.i].clone();
                    let step = event(
                        &self.arr,
                        SortAction::Compare,
                        smallvec![self.i],
                        format!("Selected {} to insert", key),
                    );
                    self.phase = InsertionPhase::Shift { key, hole: self.i };
                    return Some(step);
                }
                InsertionPhase::Shift { key, hole } => {
                    if hole > 0 && self.arr[hole - 1] > key {
                        let step = event(
                            &self.arr,
                            SortAction::Compare,
                            smallvec![hole - 1, hole],
                            format!("Comparing {} with {}", self.arr[hole - 1], key),
                        );
                        self.phase = InsertionPhase::Move { key, hole };
                        return Some(step);
                    }
                    let description = format!("Inserted {} at position {}", key, hole);
                    self.arr[hole] = key;
                    self.i += 1;
                    self.phase = InsertionPhase::Select;
                    return Some(event(
                        &self.arr,
                        SortAction::Overwrite,
                        smallvec![hole],
                        description,
                    ));
                }
                InsertionPhase::Move { key, hole } => {
                    self.arr[hole] = self.arr[hole - 1].clone();
                    let step = event(
                        &self.arr,
                        SortAction::Overwrite,
                        smallvec![hole],
                        format!("Moving {} forward", self.arr[hole]),
                    );
                    self.phase = InsertionPhase::Shift {
                        key,
                        hole: hole - 1,
                    };
                    return Some(step);
                }
                InsertionPhase::Sweep(mut sweep) => {
                    let step = sweep.advance(&self.arr);
                    if step.is_some() {
                        self.phase = InsertionPhase::Sweep(sweep);
                    }
                    return step;
                }
                InsertionPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Quick sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum QuickPhase {
    Next,
    Scan {
        low: usize,
        high: usize,
        store: usize,
        j: usize,
    },
    Check {
        low: usize,
        high: usize,
        store: usize,
        j: usize,
    },
    Sweep(SortedSweep),
    Done,
}

/// Lomuto partitioning with the last element as pivot.
///
/// Pending ranges live on an explicit stack. The right range is pushed before the
/// left one, so the left partition (and everything under it) is finished first.
#[derive(Debug, Clone)]
pub struct QuickSort<T> {
    arr: Vec<T>,
    pending: Vec<(usize, usize)>,
    phase: QuickPhase,
}

impl<T: Ord + Clone + Display> QuickSort<T> {
    pub fn new(input: &[T]) -> Self {
        let pending = if input.len() >= 2 {
            vec![(0, input.len() - 1)]
        } else {
            Vec::new()
        };
        QuickSort {
            arr: input.to_vec(),
            pending,
            phase: QuickPhase::Next,
        }
    }

    pub fn array(&self) -> &[T] {
        &self.arr
    }
}

impl<T: Ord + Clone + Display> Iterator for QuickSort<T> {
    type Item = SortStep<T>;

    fn next(&mut self) -> Option<SortStep<T>> {
        loop {
            match self.phase {
                QuickPhase::Next => {
                    self.phase = match self.pending.pop() {
                        Some((low, high)) => QuickPhase::Scan {
                            low,
                            high,
                            store: low,
                            j: low,
                        },
                        None => QuickPhase::Sweep(SortedSweep::default()),
                    };
                }
                QuickPhase::Scan {
                    low,
                    high,
                    store,
                    j,
                } => {
                    if j < high {
                        self.phase = QuickPhase::Check {
                            low,
                            high,
                            store,
                            j,
                        };
                        return Some(event(
                            &self.arr,
                            SortAction::Compare,
                            smallvec![j, high],
                            format!("Comparing {} with pivot {}", self.arr[j], self.arr[high]),
                        ));
                    }

                    self.arr.swap(store, high);
                    let step = event(
                        &self.arr,
                        SortAction::Swap,
                        smallvec![store, high],
                        format!("Placing pivot {} at correct position", self.arr[store]),
                    );
                    if store + 1 < high {
                        self.pending.push((store + 1, high));
                    }
                    if store > low + 1 {
                        self.pending.push((low, store - 1));
                    }
                    self.phase = QuickPhase::Next;
                    return Some(step);
                }
                QuickPhase::Check {
                    low,
                    high,
                    store,
                    j,
                } => {
                    if self.arr[j] < self.arr[high] {
                        self.arr.swap(store, j);
                        self.phase = QuickPhase::Scan {
                            low,
                            high,
                            store: store + 1,
                            j: j + 1,
                        };
                        return Some(event(
                            &self.arr,
                            SortAction::Swap,
                            smallvec![store, j],
                            format!("Swapping {} and {}", self.arr[store], self.arr[j]),
                        ));
                    }
                    self.phase = QuickPhase::Scan {
                        low,
                        high,
                        store,
                        j: j + 1,
                    };
                }
                QuickPhase::Sweep(mut sweep) => {
                    let step = sweep.advance(&self.arr);
                    self.phase = match step {
                        Some(_) => QuickPhase::Sweep(sweep),
                        None => QuickPhase::Done,
                    };
                    return step;
                }
                QuickPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Merge sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum MergeFrame {
    Split { l: usize, r: usize },
    Merge { l: usize, m: usize, r: usize },
}

/// In-progress merge of `[l, m]` and `[m + 1, r]`
#[derive(Debug, Clone)]
struct MergeRun<T> {
    left: Vec<T>,
    right: Vec<T>,
    l: usize,
    m: usize,
    i: usize,
    j: usize,
    k: usize,
}

#[derive(Debug, Clone)]
enum MergePhase<T> {
    Next,
    Compare(MergeRun<T>),
    Take(MergeRun<T>),
    DrainLeft(MergeRun<T>),
    DrainRight(MergeRun<T>),
    Sweep(SortedSweep),
    Done,
}

/// Top-down merge sort, left-biased split, stable merge (ties take the left element)
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    arr: Vec<T>,
    frames: Vec<MergeFrame>,
    phase: MergePhase<T>,
}

impl<T: Ord + Clone + Display> MergeSort<T> {
    pub fn new(input: &[T]) -> Self {
        let frames = if input.is_empty() {
            Vec::new()
        } else {
            vec![MergeFrame::Split {
                l: 0,
                r: input.len() - 1,
            }]
        };
        MergeSort {
            arr: input.to_vec(),
            frames,
            phase: MergePhase::Next,
        }
    }

    pub fn array(&self) -> &[T] {
        &self.arr
    }
}

impl<T: Ord + Clone + Display> Iterator for MergeSort<T> {
    type Item = SortStep<T>;

    fn next(&mut self) -> Option<SortStep<T>> {
        loop {
            match mem::replace(&mut self.phase, MergePhase::Done) {
                MergePhase::Next => match self.frames.pop() {
                    Some(MergeFrame::Split { l, r }) => {
                        if l < r {
                            let m = l + (r - l) / 2;
                            self.frames.push(MergeFrame::Merge { l, m, r });
                            self.frames.push(MergeFrame::Split { l: m + 1, r });
                            self.frames.push(MergeFrame::Split { l, r: m });
                        }
                        self.phase = MergePhase::Next;
                    }
                    Some(MergeFrame::Merge { l, m, r }) => {
                        self.phase = MergePhase::Compare(MergeRun {
                            left: self.arr[l..=m].to_vec(),
                            right: self.arr[m + 1..=r].to_vec(),
                            l,
                            m,
                            i: 0,
                            j: 0,
                            k: l,
                        });
                    }
                    None => self.phase = MergePhase::Sweep(SortedSweep::default()),
                },
                MergePhase::Compare(run) => {
                    if run.i < run.left.len() && run.j < run.right.len() {
                        let step = event(
                            &self.arr,
                            SortAction::Compare,
                            smallvec![run.l + run.i, run.m + 1 + run.j],
                            format!("Comparing {} and {}", run.left[run.i], run.right[run.j]),
                        );
                        self.phase = MergePhase::Take(run);
                        return Some(step);
                    }
                    self.phase = MergePhase::DrainLeft(run);
                }
                MergePhase::Take(mut run) => {
                    let description = if run.left[run.i] <= run.right[run.j] {
                        self.arr[run.k] = run.left[run.i].clone();
                        run.i += 1;
                        format!("Taking {} from left subarray", self.arr[run.k])
                    } else {
                        self.arr[run.k] = run.right[run.j].clone();
                        run.j += 1;
                        format!("Taking {} from right subarray", self.arr[run.k])
                    };
                    let step = event(
                        &self.arr,
                        SortAction::Overwrite,
                        smallvec![run.k],
                        description,
                    );
                    run.k += 1;
                    self.phase = MergePhase::Compare(run);
                    return Some(step);
                }
                MergePhase::DrainLeft(mut run) => {
                    if run.i < run.left.len() {
                        self.arr[run.k] = run.left[run.i].clone();
                        let step = event(
                            &self.arr,
                            SortAction::Overwrite,
                            smallvec![run.k],
                            format!("Taking remaining {} from left", self.arr[run.k]),
                        );
                        run.i += 1;
                        run.k += 1;
                        self.phase = MergePhase::DrainLeft(run);
                        return Some(step);
                    }
                    self.phase = MergePhase::DrainRight(run);
                }
                MergePhase::DrainRight(mut run) => {
                    if run.j < run.right.len() {
                        self.arr[run.k] = run.right[run.j].clone();
                        let step = event(
                            &self.arr,
                            SortAction::Overwrite,
                            smallvec![run.k],
                            format!("Taking remaining {} from right", self.arr[run.k]),
                        );
                        run.j += 1;
                        run.k += 1;
                        self.phase = MergePhase::DrainRight(run);
                        return Some(step);
                    }
                    self.phase = MergePhase::Next;
                }
                MergePhase::Sweep(mut sweep) => {
                    let step = sweep.advance(&self.arr);
                    if step.is_some() {
                        self.phase = MergePhase::Sweep(sweep);
                    }
                    return step;
                }
                MergePhase::Done => return None,
            }
        }
    }
}
