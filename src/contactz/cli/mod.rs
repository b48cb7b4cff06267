//! # CLI Layer
//!
//! This module is **one possible presentation layer** for contactz, not the application itself.
//!
//! The CLI layer is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, the confirmation prompt)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! It also holds what a windowed client would keep as widget state: the category filter,
//! the search text and the selected contact all arrive as arguments and are handed to the
//! API as plain parameters.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()`, context setup and per-command handlers
//! - `render.rs`: tables, stats and message printing

mod commands;
mod render;
mod setup;

pub use commands::run;
