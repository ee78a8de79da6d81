use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashSet};
use std::sync::Arc;

use crate::error::Result;
use crate::graph::algos::{ensure_start, Stepper};
use crate::graph::model::GraphModel;
use crate::graph::snapshot::{DijkstraSnapshot, Snapshot, TraversalSnapshot};
use crate::graph::types::{Algorithm, Distance, NodeId};

/// Entry in the min-priority frontier, ordered by tentative distance and
/// then by push order
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub distance: Distance,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .value()
            .total_cmp(&other.distance.value())
            .then(self.seq.cmp(&other.seq))
    }
}

/// Dijkstra shortest-path stepper.
///
/// Entries for already-finalized nodes are discarded on pop (visited-set
/// check, not a stale-distance check), so they stay visible in the frontier
/// until popped. Weights must be non-negative; negative weights give
/// unspecified distances.
#[derive(Debug)]
pub struct DijkstraStepper {
    graph: Arc<GraphModel>,
    start: NodeId,
    distances: BTreeMap<NodeId, Distance>,
    predecessor: BTreeMap<NodeId, NodeId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    visited: HashSet<NodeId>,
    next_seq: u64,
    finished: bool,
}

impl DijkstraStepper {
    #[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
    pub fn new(graph: Arc<GraphModel>, start: &str) -> Result<Self> {
        ensure_start(&graph, start)?;

        let mut distances: BTreeMap<NodeId, Distance> = graph
            .nodes()
            .map(|n| (n.clone(), Distance::UNREACHED))
            .collect();
        distances.insert(start.to_string(), Distance::ZERO);

        let mut stepper = Self {
            graph,
            start: start.to_string(),
            distances,
            predecessor: BTreeMap::new(),
            heap: BinaryHeap::new(),
            visited: HashSet::new(),
            next_seq: 0,
            finished: false,
        };
        stepper.push(start.to_string(), Distance::ZERO);
        Ok(stepper)
    }

    fn push(&mut self, node_id: NodeId, distance: Distance) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn pop_fresh(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.visited.contains(&entry.node_id) {
                return Some(entry);
            }
        }
        None
    }

    /// Node identifiers in the heap, in pop order, duplicates collapsed
    fn frontier_ids(&self) -> Vec<NodeId> {
        let mut entries: Vec<&HeapEntry> = self.heap.iter().map(|Reverse(e)| e).collect();
        entries.sort();

        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|e| seen.insert(e.node_id.as_str()))
            .map(|e| e.node_id.clone())
            .collect()
    }

    fn snapshot(&self, base: TraversalSnapshot) -> Snapshot {
        Snapshot::Dijkstra(DijkstraSnapshot {
            base,
            distances: self.distances.clone(),
            predecessor: self.predecessor.clone(),
            start: self.start.clone(),
        })
    }

    fn visited_set(&self) -> BTreeSet<NodeId> {
        self.visited.iter().cloned().collect()
    }
}

impl Stepper for DijkstraStepper {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn step(&mut self) -> Option<Snapshot> {
        if self.finished {
            return None;
        }

        let Some(HeapEntry {
            node_id: current,
            distance,
            ..
        }) = self.pop_fresh()
        else {
            self.finished = true;
            let base = TraversalSnapshot::completion(self.visited_set());
            return Some(self.snapshot(base));
        };

        self.visited.insert(current.clone());

        let graph = Arc::clone(&self.graph);
        let mut neighbors: Vec<NodeId> = Vec::new();
        for edge in graph.neighbors_of(&current) {
            if self.visited.contains(&edge.neighbor) {
                continue;
            }
            let candidate = distance + edge.weight;
            let best = self
                .distances
                .get(&edge.neighbor)
                .copied()
                .unwrap_or(Distance::UNREACHED);
            if candidate < best {
                self.distances.insert(edge.neighbor.clone(), candidate);
                self.predecessor
                    .insert(edge.neighbor.clone(), current.clone());
                self.push(edge.neighbor.clone(), candidate);
                if !neighbors.contains(&edge.neighbor) {
                    neighbors.push(edge.neighbor.clone());
                }
            }
        }

        tracing::trace!(
            current = %current,
            distance = %distance,
            visited = self.visited.len(),
            relaxed = neighbors.len(),
            "dijkstra_step"
        );

        let base = TraversalSnapshot {
            current: Some(current),
            visited: self.visited_set(),
            frontier: self.frontier_ids(),
            neighbors,
        };
        Some(self.snapshot(base))
    }
}
