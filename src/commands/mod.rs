//! CLI commands for stepgraph

pub mod check;
pub mod dispatch;
pub mod render;
pub mod run;
pub mod step;
pub mod trace;
