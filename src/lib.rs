//! City Weather Library
//!
//! Current conditions by city in a terminal UI, with a session-scoped search
//! history. The binary in `main.rs` wires these modules to the terminal.

pub mod accent;
pub mod app;
pub mod cli;
pub mod confirm;
pub mod data;
pub mod fetch;
pub mod history;
pub mod input;
pub mod logging;
pub mod ui;
