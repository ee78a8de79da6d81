//! One-line narration of a snapshot for interactive display

use crate::graph::snapshot::Snapshot;
use crate::graph::types::{Algorithm, NodeId};

fn list(nodes: &[NodeId]) -> String {
    format!("[{}]", nodes.join(", "))
}

/// Describe what happened in the step that produced `snapshot`.
pub fn explain(snapshot: &Snapshot) -> String {
    let algorithm = snapshot.algorithm();
    let frontier = algorithm.frontier_name();

    let Some(current) = snapshot.current() else {
        return match snapshot.as_dijkstra() {
            Some(d) => {
                let reached = d.distances.values().filter(|x| x.is_reached()).count();
                format!(
                    "Traversal complete: finalized {} of {} nodes",
                    reached,
                    d.distances.len()
                )
            }
            None => format!(
                "Traversal complete: visited {} nodes",
                snapshot.visited().len()
            ),
        };
    };

    let mut text = match snapshot.as_dijkstra() {
        Some(d) => {
            let distance = d.distances.get(current).copied().unwrap_or_default();
            format!("Finalized {} at distance {}", current, distance)
        }
        None => format!("Visited {}", current),
    };

    let neighbors = snapshot.neighbors();
    if neighbors.is_empty() {
        text.push_str(match algorithm {
            Algorithm::Dijkstra => "; no distances improved",
            Algorithm::Bfs | Algorithm::Dfs => "; no new neighbors",
        });
    } else if let Some(d) = snapshot.as_dijkstra() {
        let relaxed: Vec<String> = neighbors
            .iter()
            .map(|n| {
                let distance = d.distances.get(n).copied().unwrap_or_default();
                format!("{} ({})", n, distance)
            })
            .collect();
        text.push_str(&format!("; relaxed {}", relaxed.join(", ")));
    } else {
        text.push_str(&format!("; discovered {}", neighbors.join(", ")));
    }

    text.push_str(&format!(
        "; {} is now {}",
        frontier,
        list(snapshot.frontier())
    ));
    text
}
