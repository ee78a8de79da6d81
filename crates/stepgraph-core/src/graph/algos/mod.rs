//! Stepwise traversal automata
//!
//! Each stepper owns its frontier and visited state and performs exactly one
//! node's worth of work per [`Stepper::step`] call. The graph itself is
//! shared read-only.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod shared;


use std::sync::Arc;

use crate::error::{Result, StepgraphError};
use crate::graph::model::GraphModel;
use crate::graph::snapshot::Snapshot;
use crate::graph::types::Algorithm;

pub use bfs::BfsStepper;
pub use dfs::DfsStepper;
pub use dijkstra::DijkstraStepper;

/// A resumable traversal over one graph from one start node
pub trait Stepper: Send {
    fn algorithm(&self) -> Algorithm;

    fn start(&self) -> &str;

    /// Advance by one finalized node and return the resulting snapshot.
    ///
    /// After the completion snapshot (`current == None`) has been returned,
    /// every further call returns `None`.
    fn step(&mut self) -> Option<Snapshot>;
}

impl Algorithm {
    /// Construct the stepper for this algorithm.
    pub fn stepper(self, graph: Arc<GraphModel>, start: &str) -> Result<Box<dyn Stepper>> {
        Ok(match self {
            Algorithm::Bfs => Box::new(BfsStepper::new(graph, start)?),
            Algorithm::Dfs => Box::new(DfsStepper::new(graph, start)?),
            Algorithm::Dijkstra => Box::new(DijkstraStepper::new(graph, start)?),
        })
    }
}

pub(crate) fn ensure_start(graph: &GraphModel, start: &str) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(StepgraphError::UnknownStart {
            start: start.to_string(),
        })
    }
}
