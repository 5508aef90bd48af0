//! Status bindings.
//!
//! A [`StatusBinding`] ties a [`CodeTable`] to one field of a model. It is
//! built once while the model is being set up and then used for three things:
//!
//! - **Scopes**: [`StatusBinding::generate_scopes`] yields one `field = code`
//!   filter per table row, named after the status (`active`, `hidden`, ...).
//! - **Reading**: [`StatusBinding::read`] turns a stored code into its name,
//!   falling back to the configured default when the field is blank.
//! - **Writing**: [`StatusBinding::write`] turns a name (or an existing code)
//!   into the code to store, rejecting anything the table does not know.
//!
//! The binding is pure. Reading and writing record state happens in the host,
//! or through the [`StatusBinding::read_from`] / [`StatusBinding::write_to`]
//! conveniences over an [`AttributeStore`].
//!
//! ## Unknown Stored Codes
//!
//! A non-blank stored code that is missing from the table (legacy or corrupt
//! data) is handled by [`UnknownCodePolicy`]: `Lenient` reads it as no status
//! and logs a warning, `Strict` returns [`StatusError::UnknownStoredCode`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codes::{Code, CodeTable, StatusName};
use crate::error::{Result, StatusError};
use crate::filter::FilterExpression;
use crate::host::AttributeStore;

/// How [`StatusBinding::read`] treats a non-blank code missing from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCodePolicy {
    /// Read as no status.
    #[default]
    Lenient,
    /// Fail with [`StatusError::UnknownStoredCode`].
    Strict,
}

impl fmt::Display for UnknownCodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownCodePolicy::Lenient => f.write_str("lenient"),
            UnknownCodePolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for UnknownCodePolicy {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "lenient" => Ok(UnknownCodePolicy::Lenient),
            "strict" => Ok(UnknownCodePolicy::Strict),
            other => Err(StatusError::Config(format!(
                "Unknown code policy '{}' (expected lenient or strict)",
                other
            ))),
        }
    }
}

/// Accessor and scope generator for one status field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBinding {
    attr: String,
    field: String,
    codes: CodeTable,
    default: Option<StatusName>,
    policy: UnknownCodePolicy,
}

impl StatusBinding {
    /// Start configuring a binding whose accessor is called `attr`.
    pub fn builder(attr: impl Into<String>) -> StatusBindingBuilder {
        StatusBindingBuilder::new(attr)
    }

    /// The accessor name (e.g. `status`).
    pub fn attr(&self) -> &str {
        &self.attr
    }

    /// The stored field the accessor reads and writes.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn default_status(&self) -> Option<&StatusName> {
        self.default.as_ref()
    }

    pub fn unknown_code_policy(&self) -> UnknownCodePolicy {
        self.policy
    }

    /// One named `field = code` filter per table row, in table order.
    pub fn generate_scopes(&self) -> Vec<(StatusName, FilterExpression)> {
        self.codes
            .iter()
            .map(|entry| {
                (
                    entry.name.clone(),
                    FilterExpression::equals(&self.field, entry.code.clone()),
                )
            })
            .collect()
    }

    /// Resolve a stored value to its status name.
    ///
    /// Absent or blank values yield the configured default (or `None`). This
    /// is never an error; only an unknown code under the strict policy is.
    pub fn read(&self, stored: Option<&str>) -> Result<Option<StatusName>> {
        let Some(raw) = stored.filter(|value| !value.trim().is_empty()) else {
            return Ok(self.default.clone());
        };

        if let Some(name) = self.codes.resolve_to_name(raw) {
            return Ok(Some(name));
        }

        match self.policy {
            UnknownCodePolicy::Lenient => {
                tracing::warn!(
                    field = %self.field,
                    code = raw,
                    "stored status code is not in the code table"
                );
                Ok(None)
            }
            UnknownCodePolicy::Strict => Err(StatusError::UnknownStoredCode(raw.to_string())),
        }
    }

    /// Resolve a requested status name or code to the code to store.
    pub fn write(&self, requested: impl AsRef<str>) -> Result<Code> {
        self.codes.resolve_to_code(requested.as_ref().trim())
    }

    /// [`read`](Self::read) the bound field of `record`.
    pub fn read_from<R>(&self, record: &R) -> Result<Option<StatusName>>
    where
        R: AttributeStore + ?Sized,
    {
        self.read(record.get_attr(&self.field).as_deref())
    }

    /// [`write`](Self::write) `requested` and store the code into `record`.
    ///
    /// On error the record is left untouched.
    pub fn write_to<R: AttributeStore + ?Sized>(
        &self,
        record: &mut R,
        requested: impl AsRef<str>,
    ) -> Result<Code> {
        let code = self.write(requested)?;
        record.set_attr(&self.field, code.to_string());
        Ok(code)
    }
}

/// Builder for [`StatusBinding`].
#[derive(Debug, Clone)]
pub struct StatusBindingBuilder {
    attr: String,
    field: Option<String>,
    codes: Option<CodeTable>,
    default: Option<StatusName>,
    policy: UnknownCodePolicy,
}

impl StatusBindingBuilder {
    fn new(attr: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            field: None,
            codes: None,
            default: None,
            policy: UnknownCodePolicy::default(),
        }
    }

    /// Store into `field` instead of a field named after the accessor.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Use a custom code table instead of the built-in one.
    pub fn codes(mut self, codes: CodeTable) -> Self {
        self.codes = Some(codes);
        self
    }

    /// Status returned when the stored value is blank or absent.
    pub fn default_status(mut self, name: impl Into<StatusName>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn unknown_code_policy(mut self, policy: UnknownCodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> StatusBinding {
        let field = self.field.unwrap_or_else(|| self.attr.clone());
        let codes = self.codes.unwrap_or_default();

        tracing::debug!(
            attr = %self.attr,
            field = %field,
            codes = codes.len(),
            "status binding configured"
        );

        StatusBinding {
            attr: self.attr,
            field,
            codes,
            default: self.default,
            policy: self.policy,
        }
    }
}
