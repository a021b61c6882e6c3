//! # Introduction
//!
//! algotrace runs classic sorting, searching and graph-traversal algorithms and
//! exposes every intermediate step (comparisons, swaps, overwrites, visits) as an
//! ordered, replayable stream of events, so a front end can animate them and a user
//! can scrub through execution at a controlled speed.
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → Algorithm + Input → Trace (lazy events) → Driver → Presentation
//! ```
//!
//! 1. [`catalog`] — algorithm descriptors keyed by slug; a descriptor's category
//!    selects the trace family.
//! 2. [`input`] — the array, target or graph a trace runs against.
//! 3. [`trace`] — the instrumented algorithms. Each is a state machine that yields one
//!    [`trace::Step`] per `next()` and owns a private copy of its input.
//! 4. [`driver`] — pulls events on demand or on a cadence, supports pause, reset and
//!    scrubbing, and folds events into a [`driver::presentation::Presentation`].
//! 5. [`samples`] — seeded sample inputs; [`config`] — runtime settings.
//!
//! The library draws nothing. What a front end does with a presentation is its own
//! business.
//!
//! ## Example
//!
//! ```
//! use algotrace::input::Input;
//! use algotrace::trace::Algorithm;
//!
//! let input = Input::Sequence { values: vec![5, 3, 8, 1] };
//! let trace = Algorithm::BubbleSort.trace(&input).unwrap();
//! assert_eq!(trace.count(), 14);
//! ```

pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod samples;
pub mod trace;
