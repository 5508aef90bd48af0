//! # CLI Behavior
//!
//! Running `recstat` with no subcommand lists the active code table.
//!
//! The code table comes from configuration: `--config FILE` when given,
//! otherwise `recstat.toml` in the working directory, then in the per-user
//! config directory (`$RECSTAT_HOME` overrides its location). Environment
//! variables (`RECSTAT_UNKNOWN_CODE_POLICY`, `RECSTAT_TABLE_NAME`) win over
//! files. `--table` wins over everything for SQL qualification.
//!
//! Diagnostics go to stderr through `tracing`; set `RECSTAT_LOG` or pass `-v`.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
