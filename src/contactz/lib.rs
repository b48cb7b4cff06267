//! # Contactz Architecture
//!
//! Contactz is a **UI-agnostic contact book library** with a small CLI client on top.
//! Any front end (terminal, desktop window, web page) drives the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders tables and messages   │
//! │  - Holds the "UI state": filter, search text, selection     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's RecordStore                           │
//! │  - Dispatches to commands, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Query Engine (query.rs)    │
//! │  - add / edit / delete / list / export / stats / random     │
//! │  - Persist after every mutation, roll back if that fails    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore (in memory), DataStore trait                 │
//! │  - FileStore (JSON file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust types,
//! and never writes to stdout/stderr. Diagnostics go through `tracing`; installing a
//! subscriber is left to the binary (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`query`]: Category filter and search over a snapshot
//! - [`store`]: Record store, persistence trait and implementations
//! - [`model`]: `Contact`, `ContactInput`, id generation
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
