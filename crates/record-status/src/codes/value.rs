//! Code and status name value types.
//!
//! Both are thin string newtypes. A [`Code`] is what gets persisted; a
//! [`StatusName`] is what application code reads and writes. Keeping them as
//! distinct types stops a name from being stored by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A short stored token representing a status (e.g. `"A"`).
///
/// Codes are opaque and compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Code {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A descriptive status identifier (e.g. `active`, `deleted`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusName(String);

impl StatusName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StatusName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StatusName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for StatusName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StatusName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StatusName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
