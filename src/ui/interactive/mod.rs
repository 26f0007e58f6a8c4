//! Interactive scoreboard UI.
//!
//! This module is organized into focused submodules:
//! - `state_manager`: Match state, saved games, clock task, and input modes
//! - `input_handler`: Keyboard decoding and dispatch
//! - `core`: Main interactive loop and orchestration

mod core;
mod input_handler;
mod state_manager;

pub use core::run_interactive_ui;
