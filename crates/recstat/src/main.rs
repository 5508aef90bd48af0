//! # recstat
//!
//! A small terminal client for the `record-status` library. The binary is thin:
//! the CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/recstat/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config loading + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/record-status/)                            │
//! │  - Code tables, bindings, filters, config                   │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scopes and default filters are registered against an in-memory model
//! (`record_status::host::MemModel`), so every command shows exactly what a
//! host would receive.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
