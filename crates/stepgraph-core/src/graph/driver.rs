//! Lifecycle wrapper around a single stepper

use std::time::Instant;

use crate::error::{Result, StepgraphError};
use crate::graph::algos::Stepper;
use crate::graph::snapshot::Snapshot;
use crate::graph::types::Algorithm;

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No snapshot produced yet
    Created,
    /// At least one non-terminal snapshot produced
    Running,
    /// Completion snapshot returned; no further snapshots exist
    Exhausted,
}

/// Drives one stepper forward, one snapshot per [`StepDriver::advance`].
pub struct StepDriver {
    stepper: Box<dyn Stepper>,
    state: DriverState,
    steps: usize,
}

impl std::fmt::Debug for StepDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDriver")
            .field("algorithm", &self.stepper.algorithm())
            .field("start", &self.stepper.start())
            .field("state", &self.state)
            .field("steps", &self.steps)
            .finish()
    }
}

impl StepDriver {
    pub fn new(stepper: Box<dyn Stepper>) -> Self {
        Self {
            stepper,
            state: DriverState::Created,
            steps: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Number of snapshots returned so far
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn algorithm(&self) -> Algorithm {
        self.stepper.algorithm()
    }

    pub fn start(&self) -> &str {
        self.stepper.start()
    }

    fn exhausted(&self) -> StepgraphError {
        StepgraphError::DriverExhausted {
            algorithm: self.algorithm().to_string(),
            steps: self.steps,
        }
    }

    /// Produce the next snapshot.
    ///
    /// Fails with `DriverExhausted` once the completion snapshot has been
    /// returned.
    pub fn advance(&mut self) -> Result<Snapshot> {
        if self.state == DriverState::Exhausted {
            return Err(self.exhausted());
        }

        let Some(snapshot) = self.stepper.step() else {
            self.state = DriverState::Exhausted;
            return Err(self.exhausted());
        };

        self.steps += 1;
        self.state = if snapshot.is_complete() {
            DriverState::Exhausted
        } else {
            DriverState::Running
        };

        tracing::debug!(
            algorithm = %self.algorithm(),
            step = self.steps,
            current = snapshot.current().unwrap_or("-"),
            visited = snapshot.visited().len(),
            frontier = snapshot.frontier().len(),
            "advance"
        );

        Ok(snapshot)
    }

    /// Advance to completion and return only the completion snapshot.
    #[tracing::instrument(skip(self), fields(algorithm = %self.algorithm(), start = %self.start()))]
    pub fn drain_final(&mut self) -> Result<Snapshot> {
        let start = Instant::now();
        loop {
            let snapshot = self.advance()?;
            if snapshot.is_complete() {
                crate::trace_time!(start, "drain_final", steps = self.steps);
                return Ok(snapshot);
            }
        }
    }

    /// Advance to completion and return every snapshot in order.
    #[tracing::instrument(skip(self), fields(algorithm = %self.algorithm(), start = %self.start()))]
    pub fn drain_all(&mut self) -> Result<Vec<Snapshot>> {
        let start = Instant::now();
        let mut snapshots = Vec::new();
        loop {
            let snapshot = self.advance()?;
            let done = snapshot.is_complete();
            snapshots.push(snapshot);
            if done {
                crate::trace_time!(start, "drain_all", steps = self.steps);
                return Ok(snapshots);
            }
        }
    }
}

/// Yields the remaining snapshots; ends after the completion snapshot.
impl Iterator for StepDriver {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        if self.state == DriverState::Exhausted {
            return None;
        }
        self.advance().ok()
    }
}
