//! Stepwise graph traversal engine
//!
//! - Graph model: validated, immutable weighted directed graph
//! - Steppers: BFS, DFS and Dijkstra automata, one finalized node per step
//! - Driver: Created/Running/Exhausted lifecycle, single-step and drain
//! - Snapshot helpers: path reconstruction and step narration

pub mod algos;
pub mod driver;
pub mod explain;
pub mod model;
pub mod path;
pub mod snapshot;
pub mod types;

pub use algos::{BfsStepper, DfsStepper, DijkstraStepper, Stepper};
pub use driver::{DriverState, StepDriver};
pub use explain::explain;
pub use model::{Edge, GraphModel, ValidateOptions};
pub use path::reconstruct_path;
pub use snapshot::{DijkstraSnapshot, Snapshot, TraversalSnapshot};
pub use types::{Algorithm, Distance, NodeId};
