//! Observable traversal state emitted after every step

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::graph::path::reconstruct_path;
use crate::graph::types::{Algorithm, Distance, NodeId};

/// State shared by every snapshot shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalSnapshot {
    /// Node finalized this step; `None` marks the completion snapshot
    pub current: Option<NodeId>,
    /// Nodes finalized so far
    pub visited: BTreeSet<NodeId>,
    /// Pending-work contents at emission time
    pub frontier: Vec<NodeId>,
    /// Nodes newly discovered by finalizing `current`
    pub neighbors: Vec<NodeId>,
}

impl TraversalSnapshot {
    pub(crate) fn completion(visited: BTreeSet<NodeId>) -> Self {
        Self {
            current: None,
            visited,
            frontier: Vec::new(),
            neighbors: Vec::new(),
        }
    }
}

/// Dijkstra snapshot: the common state plus distances and predecessors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraSnapshot {
    #[serde(flatten)]
    pub base: TraversalSnapshot,
    /// Best-known distance for every node in the graph
    pub distances: BTreeMap<NodeId, Distance>,
    /// Node each reached node was last relaxed from
    pub predecessor: BTreeMap<NodeId, NodeId>,
    #[serde(skip)]
    pub(crate) start: NodeId,
}

impl DijkstraSnapshot {
    /// Shortest known path from the start node to `target`
    pub fn path_to(&self, target: &str) -> Option<Vec<NodeId>> {
        let reached = self
            .distances
            .get(target)
            .is_some_and(Distance::is_reached);
        if !reached {
            return None;
        }
        reconstruct_path(&self.predecessor, &self.start, target)
    }
}

/// Full observable state after one step of a traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum Snapshot {
    Bfs(TraversalSnapshot),
    Dfs(TraversalSnapshot),
    Dijkstra(DijkstraSnapshot),
}

impl Snapshot {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Snapshot::Bfs(_) => Algorithm::Bfs,
            Snapshot::Dfs(_) => Algorithm::Dfs,
            Snapshot::Dijkstra(_) => Algorithm::Dijkstra,
        }
    }

    pub fn base(&self) -> &TraversalSnapshot {
        match self {
            Snapshot::Bfs(base) | Snapshot::Dfs(base) => base,
            Snapshot::Dijkstra(snap) => &snap.base,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.base().current.as_deref()
    }

    pub fn visited(&self) -> &BTreeSet<NodeId> {
        &self.base().visited
    }

    pub fn frontier(&self) -> &[NodeId] {
        &self.base().frontier
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.base().neighbors
    }

    /// True for the single terminal snapshot
    pub fn is_complete(&self) -> bool {
        self.base().current.is_none()
    }

    pub fn as_dijkstra(&self) -> Option<&DijkstraSnapshot> {
        match self {
            Snapshot::Dijkstra(snap) => Some(snap),
            _ => None,
        }
    }
}
