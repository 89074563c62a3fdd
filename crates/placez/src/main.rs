//! # Placez CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/placezapp/`: core library with UI-agnostic catalog logic
//! - `crates/placez/`: this CLI tool, depends on `placezapp`
//!
//! Everything from `placezapp::api` inward takes normal Rust values and returns
//! normal Rust types. The CLI layer owns argument parsing, input validation,
//! context wiring, logging setup and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
