use std::sync::Arc;

use crate::error::Result;
use crate::graph::algos::shared::{LazyTraversal, Stack};
use crate::graph::algos::{ensure_start, Stepper};
use crate::graph::model::GraphModel;
use crate::graph::snapshot::Snapshot;
use crate::graph::types::Algorithm;

/// Depth-first stepper over a LIFO stack.
///
/// Neighbors are pushed in declared order, so the last declared neighbor is
/// explored first.
#[derive(Debug)]
pub struct DfsStepper {
    inner: LazyTraversal<Stack>,
}

impl DfsStepper {
    #[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
    pub fn new(graph: Arc<GraphModel>, start: &str) -> Result<Self> {
        ensure_start(&graph, start)?;
        Ok(Self {
            inner: LazyTraversal::new(graph, start),
        })
    }
}

impl Stepper for DfsStepper {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn start(&self) -> &str {
        self.inner.start()
    }

    fn step(&mut self) -> Option<Snapshot> {
        self.inner.step().map(Snapshot::Dfs)
    }
}
