//! Force-directed graph layout with interactive node dragging.
//!
//! - `graph`: node positions and a fixed random adjacency
//! - `layout`: per-step force pass and the drag state machine
//! - `config`: layout parameters, loaded from embedded JSON

pub mod config;
pub mod graph;
pub mod layout;
