//! # CLI Behavior
//!
//! This is **one possible UI client** for placez, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ### Naked Execution (`placez`)
//!
//! Running `placez` with no arguments lists the first page of the catalog,
//! sorted by the configured default sort.
//!
//! ### Login Gate
//!
//! Every catalog command needs a session. `placez login admin` prompts for the
//! password on stdin unless `--password` is given; the session persists in the
//! data directory until `placez logout`.
//!
//! ### Output
//!
//! `--output json` prints the command result as JSON on stdout. Errors always
//! go to stderr as `Error: <message>` with exit code 1, and so does logging.
//!
//! ## Module Structure
//!
//! - `commands`: per-command handlers that call the API and print results
//! - `print`: text rendering (lists, full places, statistics, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
