//! Path reconstruction from predecessor maps

use std::collections::BTreeMap;

use crate::graph::types::NodeId;

/// Follow predecessors from `target` back to `start`.
///
/// Returns the path in start-to-target order, `Some([start])` when
/// `target == start`, and `None` when the chain does not lead back to
/// `start`.
pub fn reconstruct_path(
    predecessors: &BTreeMap<NodeId, NodeId>,
    start: &str,
    target: &str,
) -> Option<Vec<NodeId>> {
    let mut path = vec![target.to_string()];
    let mut current = target;

    while current != start {
        let pred = predecessors.get(current)?;
        // A well-formed predecessor map is acyclic; bail out on a cycle.
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(pred.clone());
        current = pred.as_str();
    }

    path.reverse();
    Some(path)
}
