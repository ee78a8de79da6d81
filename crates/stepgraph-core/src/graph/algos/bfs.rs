use std::sync::Arc;

use crate::error::Result;
use crate::graph::algos::shared::{LazyTraversal, Queue};
use crate::graph::algos::{ensure_start, Stepper};
use crate::graph::model::GraphModel;
use crate::graph::snapshot::Snapshot;
use crate::graph::types::Algorithm;

/// Breadth-first stepper over a FIFO queue
#[derive(Debug)]
pub struct BfsStepper {
    inner: LazyTraversal<Queue>,
}

impl BfsStepper {
    #[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
    pub fn new(graph: Arc<GraphModel>, start: &str) -> Result<Self> {
        ensure_start(&graph, start)?;
        Ok(Self {
            inner: LazyTraversal::new(graph, start),
        })
    }
}

impl Stepper for BfsStepper {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn start(&self) -> &str {
        self.inner.start()
    }

    fn step(&mut self) -> Option<Snapshot> {
        self.inner.step().map(Snapshot::Bfs)
    }
}
