//! Playback controller
//!
//! A [`Driver`] owns one algorithm, the input it runs against, and at most one live
//! [`Trace`]. It pulls events one at a time and folds them into a [`Presentation`].
//!
//! - [`cadence`]: polled fixed-interval schedule for automatic playback
//! - [`presentation`]: the renderable state built from events
//!
//! # States
//!
//! ```text
//! Idle ──prepare/step/play──▶ Ready ──step──▶ Stepping ──(exhausted)──▶ Done
//!   ▲                                                                    │
//!   └──────────────────────── reset / set_input ─────────────────────────┘
//! ```
//!
//! `reset()` and any input change discard the trace and the cadence together, so a
//! trace is only ever advanced against the exact input it was built from.
//!
//! # Scrubbing
//!
//! Traces are deterministic, so moving backwards needs no stored history: the driver
//! builds a fresh trace and replays it up to the requested position.

pub mod cadence;
pub mod presentation;

use crate::catalog::Catalog;
use crate::config::PlaybackConfig;
use crate::error::TraceError;
use crate::input::Input;
use crate::trace::{Algorithm, Step, Trace};
use cadence::Cadence;
use presentation::Presentation;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, instrument};

/// Lifecycle of the driver's trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No trace instantiated
    Idle,
    /// Trace instantiated, nothing consumed
    Ready,
    /// At least one event consumed
    Stepping,
    /// Trace exhausted
    Done,
}

#[derive(Debug)]
pub struct Driver {
    algorithm: Algorithm,
    input: Input,
    config: PlaybackConfig,
    trace: Option<Trace>,
    state: PlaybackState,
    /// Number of events applied to the presentation
    position: usize,
    presentation: Presentation,
    cadence: Option<Cadence>,
    speed: u32,
}

fn check_family(algorithm: Algorithm, input: &Input) -> Result<(), TraceError> {
    if algorithm.category() != input.category() {
        return Err(TraceError::CategoryMismatch {
            slug: algorithm.slug().to_string(),
            expected: algorithm.category(),
            got: input.category(),
        });
    }
    Ok(())
}

impl Driver {
    pub fn new(
        algorithm: Algorithm,
        input: Input,
        config: PlaybackConfig,
    ) -> Result<Self, TraceError> {
        config.validate()?;
        check_family(algorithm, &input)?;
        let presentation = Presentation::initial(&input);
        let speed = config.default_speed;
        Ok(Driver {
            algorithm,
            input,
            config,
            trace: None,
            state: PlaybackState::Idle,
            position: 0,
            presentation,
            cadence: None,
            speed,
        })
    }

    /// Build a driver for the catalog entry `slug`
    pub fn from_catalog(
        catalog: &Catalog,
        slug: &str,
        input: Input,
        config: PlaybackConfig,
    ) -> Result<Self, TraceError> {
        let (_, algorithm) = catalog.resolve(slug)?;
        Driver::new(algorithm, input, config)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Number of events applied so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.cadence.is_some()
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// When the next automatic step is due, if playing
    pub fn next_deadline(&self) -> Option<Instant> {
        self.cadence.map(|c| c.next_due())
    }

    /// Replace the input. Any live trace was built from the old input and is dropped.
    pub fn set_input(&mut self, input: Input) -> Result<(), TraceError> {
        check_family(self.algorithm, &input)?;
        self.input = input;
        self.reset();
        Ok(())
    }

    /// Switch algorithm, keeping the input. The input family must still match.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), TraceError> {
        check_family(algorithm, &self.input)?;
        self.algorithm = algorithm;
        self.reset();
        Ok(())
    }

    /// Instantiate the trace if there is none (Idle → Ready)
    pub fn prepare(&mut self) -> Result<(), TraceError> {
        if self.trace.is_none() {
            self.trace = Some(self.algorithm.trace(&self.input)?);
            self.state = PlaybackState::Ready;
        }
        Ok(())
    }

    /// Pull and apply exactly one event. Returns `None` once the trace is exhausted.
    pub fn step(&mut self) -> Result<Option<Step>, TraceError> {
        if self.state == PlaybackState::Done {
            return Ok(None);
        }
        self.prepare()?;

        let next = self.trace.as_mut().and_then(Iterator::next);
        match next {
            Some(step) => {
                self.presentation.apply(&step);
                self.position += 1;
                self.state = PlaybackState::Stepping;
                Ok(Some(step))
            }
            None => {
                self.finish();
                Ok(None)
            }
        }
    }

    fn finish(&mut self) {
        debug!(
            algorithm = self.algorithm.slug(),
            events = self.position,
            "trace exhausted"
        );
        self.state = PlaybackState::Done;
        self.cadence = None;
        self.presentation.finish(self.algorithm.category());
    }

    /// Start automatic playback. Calling this while already playing only changes the speed.
    #[instrument(skip(self, now), fields(algorithm = self.algorithm.slug()))]
    pub fn play(&mut self, speed: u32, now: Instant) -> Result<(), TraceError> {
        if speed < self.config.min_speed || speed > self.config.max_speed {
            return Err(TraceError::InvalidSpeed {
                speed,
                min: self.config.min_speed,
                max: self.config.max_speed,
            });
        }
        self.speed = speed;
        if self.state == PlaybackState::Done {
            return Ok(());
        }
        self.prepare()?;

        let interval = self.config.interval(speed);
        match self.cadence.as_mut() {
            Some(cadence) => cadence.retune(interval, now),
            None => {
                debug!(?interval, "playback started");
                self.cadence = Some(Cadence::start(interval, now));
            }
        }
        Ok(())
    }

    /// Start (or keep) automatic playback at the current speed, initially the
    /// configured default
    pub fn resume(&mut self, now: Instant) -> Result<(), TraceError> {
        self.play(self.speed, now)
    }

    /// Stop automatic playback, keeping the trace where it is
    pub fn pause(&mut self) {
        if self.cadence.take().is_some() {
            debug!(position = self.position, "playback paused");
        }
    }

    /// Advance one event if playback is on and the cadence is due
    pub fn tick(&mut self, now: Instant) -> Result<Option<Step>, TraceError> {
        let due = self.cadence.as_mut().is_some_and(|c| c.fire(now));
        if due {
            self.step()
        } else {
            Ok(None)
        }
    }

    /// Discard the trace, the cadence and all derived state (→ Idle).
    /// The input itself is left as it is.
    pub fn reset(&mut self) {
        self.trace = None;
        self.cadence = None;
        self.position = 0;
        self.state = PlaybackState::Idle;
        self.presentation = Presentation::initial(&self.input);
    }

    /// Move to `target` events into the trace (or to its end, if shorter).
    /// Cancels automatic playback. Returns the position reached.
    #[instrument(skip(self), fields(algorithm = self.algorithm.slug()))]
    pub fn seek(&mut self, target: usize) -> Result<usize, TraceError> {
        self.pause();
        let mut trace = self.algorithm.trace(&self.input)?;
        let mut presentation = Presentation::initial(&self.input);
        let mut position = 0;
        let mut exhausted = false;

        while position < target {
            match trace.next() {
                Some(step) => {
                    presentation.apply(&step);
                    position += 1;
                }
                None => {
                    exhausted = true;
                    break;
                }
            }
        }

        self.trace = Some(trace);
        self.presentation = presentation;
        self.position = position;
        if exhausted {
            self.finish();
        } else if position == 0 {
            self.state = PlaybackState::Ready;
        } else {
            self.state = PlaybackState::Stepping;
        }
        Ok(position)
    }

    /// Undo the last applied event. Returns false at position 0.
    pub fn step_back(&mut self) -> Result<bool, TraceError> {
        if self.position == 0 {
            return Ok(false);
        }
        self.seek(self.position - 1)?;
        Ok(true)
    }

    /// Back to the first event, keeping a fresh trace ready
    pub fn rewind(&mut self) -> Result<(), TraceError> {
        self.seek(0).map(|_| ())
    }
}
