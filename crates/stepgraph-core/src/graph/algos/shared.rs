use std::collections::{BTreeSet, HashSet, VecDeque};
use std::sync::Arc;

use crate::graph::model::GraphModel;
use crate::graph::snapshot::TraversalSnapshot;
use crate::graph::types::NodeId;

/// Pending-work structure of an unweighted traversal
pub(super) trait Frontier: Default + Send {
    fn push(&mut self, node: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
    /// Contents in storage order (queue front first, stack bottom first)
    fn contents(&self) -> Vec<NodeId>;
}

#[derive(Debug, Default)]
pub(super) struct Queue(VecDeque<NodeId>);

impl Frontier for Queue {
    fn push(&mut self, node: NodeId) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }

    fn contents(&self) -> Vec<NodeId> {
        self.0.iter().cloned().collect()
    }
}

#[derive(Debug, Default)]
pub(super) struct Stack(Vec<NodeId>);

impl Frontier for Stack {
    fn push(&mut self, node: NodeId) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    fn contents(&self) -> Vec<NodeId> {
        self.0.clone()
    }
}

/// Lazy-visited traversal shared by BFS and DFS.
///
/// Nodes are marked visited when popped, not when pushed, so a node can sit
/// in the frontier several times. Stale entries are skipped on pop.
#[derive(Debug)]
pub(super) struct LazyTraversal<F> {
    graph: Arc<GraphModel>,
    start: NodeId,
    frontier: F,
    visited: HashSet<NodeId>,
    finished: bool,
}

impl<F: Frontier> LazyTraversal<F> {
    /// Caller must have checked that `start` is in `graph`.
    pub(super) fn new(graph: Arc<GraphModel>, start: &str) -> Self {
        let mut frontier = F::default();
        frontier.push(start.to_string());
        Self {
            graph,
            start: start.to_string(),
            frontier,
            visited: HashSet::new(),
            finished: false,
        }
    }

    pub(super) fn start(&self) -> &str {
        &self.start
    }

    pub(super) fn step(&mut self) -> Option<TraversalSnapshot> {
        if self.finished {
            return None;
        }

        let Some(current) = self.pop_fresh() else {
            self.finished = true;
            return Some(TraversalSnapshot::completion(self.visited_set()));
        };

        self.visited.insert(current.clone());

        // A repeated edge discovers its neighbor once per step
        let mut neighbors: Vec<NodeId> = Vec::new();
        for edge in self.graph.neighbors_of(&current) {
            if !self.visited.contains(&edge.neighbor) && !neighbors.contains(&edge.neighbor) {
                neighbors.push(edge.neighbor.clone());
                self.frontier.push(edge.neighbor.clone());
            }
        }

        tracing::trace!(
            current = %current,
            visited = self.visited.len(),
            discovered = neighbors.len(),
            "lazy_step"
        );

        Some(TraversalSnapshot {
            current: Some(current),
            visited: self.visited_set(),
            frontier: self.frontier.contents(),
            neighbors,
        })
    }

    fn pop_fresh(&mut self) -> Option<NodeId> {
        while let Some(node) = self.frontier.pop() {
            if !self.visited.contains(&node) {
                return Some(node);
            }
        }
        None
    }

    fn visited_set(&self) -> BTreeSet<NodeId> {
        self.visited.iter().cloned().collect()
    }
}
