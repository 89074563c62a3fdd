//! # Placez Architecture
//!
//! Placez is a **UI-agnostic travel places catalog**. It keeps a small collection
//! of destinations a traveller has visited, plans to visit, or wishes to visit,
//! together with derived statistics, and offers a pure query pipeline over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/placez)                                  │
//! │  - Parses arguments, validates input, formats output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, gated on a login session      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Query Pipeline (query.rs)  │
//! │  - Pure logic over Rust types, no I/O assumptions           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PlaceStore over a string key/value StorageBackend        │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>` and never writes to stdout/stderr. Diagnostics go
//! through `tracing`; installing a subscriber is the client's business.
//!
//! ## Testing Strategy
//!
//! - **Store and query**: unit tests over `MemBackend`, plus property tests
//!   for the statistics and pipeline invariants.
//! - **Commands and API**: unit tests of results and messages.
//! - **FsBackend**: integration tests in `tests/` against a temp directory.

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
