pub mod support;

mod check;
mod config;
mod logging;
mod step;
mod trace;
