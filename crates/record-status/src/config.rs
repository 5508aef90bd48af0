//! # Configuration
//!
//! Configuration is loaded with [`confique`] from layered sources, highest
//! priority first:
//!
//! 1. **Environment variables**: `RECSTAT_UNKNOWN_CODE_POLICY`, `RECSTAT_TABLE_NAME`.
//! 2. **Config files**: `recstat.toml`, in the order the caller lists them.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `unknown_code_policy` | `lenient` | How reads treat codes missing from the table |
//! | `table_name` | none | Qualifier used when rendering SQL (`record.status`) |
//! | `codes` | built-in table | Ordered `[[codes]]` rows replacing the built-in table |
//!
//! ## Example
//!
//! ```toml
//! unknown_code_policy = "strict"
//! table_name = "practices"
//!
//! [[codes]]
//! code = "P"
//! name = "private_practice"
//!
//! [[codes]]
//! code = "G"
//! name = "group_practice"
//! ```

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::binding::UnknownCodePolicy;
use crate::codes::{CodeEntry, CodeTable};
use crate::error::{Result, StatusError};

pub const CONFIG_FILE_NAME: &str = "recstat.toml";

fn parse_policy(value: &str) -> Result<UnknownCodePolicy> {
    value.parse()
}

/// Configuration for record-status, stored in `recstat.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStatusConfig {
    /// How to read a stored code that is not in the code table:
    /// "lenient" (read as no status) or "strict" (fail).
    #[config(env = "RECSTAT_UNKNOWN_CODE_POLICY", parse_env = parse_policy)]
    pub unknown_code_policy: Option<UnknownCodePolicy>,

    /// Table name used to qualify fields in rendered SQL.
    #[config(env = "RECSTAT_TABLE_NAME")]
    pub table_name: Option<String>,

    /// Custom code table. When absent, the built-in A/D/H/X/R/E table is used.
    pub codes: Option<Vec<CodeEntry>>,
}

impl RecordStatusConfig {
    /// Load from the environment and `files`, earlier files taking priority.
    ///
    /// Missing files are skipped.
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| StatusError::Config(e.to_string()))
    }

    pub fn unknown_code_policy(&self) -> UnknownCodePolicy {
        self.unknown_code_policy.unwrap_or_default()
    }

    /// The configured table name, ignoring blank values.
    pub fn table_name(&self) -> Option<&str> {
        self.table_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// The code table to use, validated.
    pub fn code_table(&self) -> Result<CodeTable> {
        match &self.codes {
            Some(entries) => CodeTable::new(entries.iter().cloned()),
            None => Ok(CodeTable::builtin().clone()),
        }
    }

    /// A commented sample `recstat.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
