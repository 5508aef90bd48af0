//! # Model Configuration API
//!
//! The two calls a host makes while setting up a model:
//!
//! - [`status`]: bind an accessor to a status field. Registers one named
//!   scope per status on the host and returns the [`StatusBinding`] the host
//!   keeps for reading and writing records.
//! - [`default_scope_by_status`]: restrict every query on the model to the
//!   given statuses unless explicitly overridden.
//!
//! ```
//! use record_status::api::{self, StatusOptions, VisibilityOptions};
//! use record_status::host::{MemModel, MemRecord};
//!
//! let mut model = MemModel::new();
//! let binding = api::status(
//!     &mut model,
//!     "status",
//!     StatusOptions::default().field("record_status").default_status("active"),
//! )
//! .unwrap();
//! api::default_scope_by_status(&mut model, "record_status", ["active"], VisibilityOptions::default())
//!     .unwrap();
//!
//! let mut record = MemRecord::new();
//! assert_eq!(binding.read_from(&record).unwrap().unwrap(), "active");
//! binding.write_to(&mut record, "hidden").unwrap();
//! assert_eq!(model.scopes.len(), 6);
//! assert_eq!(model.default_scopes.len(), 1);
//! ```
//!
//! Both calls are pure apart from the registration itself and do no I/O.

use crate::binding::{StatusBinding, UnknownCodePolicy};
use crate::codes::{CodeTable, StatusName};
use crate::config::RecordStatusConfig;
use crate::error::Result;
use crate::filter::FilterExpression;
use crate::host::ScopeRegistry;
use crate::visibility::DefaultVisibilityFilter;

/// Options for [`status`].
#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    pub field: Option<String>,
    pub codes: Option<CodeTable>,
    pub default: Option<StatusName>,
    pub unknown_code_policy: UnknownCodePolicy,
}

impl StatusOptions {
    /// Options seeded from configuration: code table and unknown-code policy.
    pub fn from_config(config: &RecordStatusConfig) -> Result<Self> {
        Ok(Self {
            codes: config.codes.is_some().then(|| config.code_table()).transpose()?,
            unknown_code_policy: config.unknown_code_policy(),
            ..Default::default()
        })
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn codes(mut self, codes: CodeTable) -> Self {
        self.codes = Some(codes);
        self
    }

    pub fn default_status(mut self, name: impl Into<StatusName>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn unknown_code_policy(mut self, policy: UnknownCodePolicy) -> Self {
        self.unknown_code_policy = policy;
        self
    }
}

/// Options for [`default_scope_by_status`].
#[derive(Debug, Clone, Default)]
pub struct VisibilityOptions {
    pub codes: Option<CodeTable>,
    pub allow_null: bool,
    pub allow_blank: bool,
}

impl VisibilityOptions {
    /// Options seeded from configuration: code table only.
    pub fn from_config(config: &RecordStatusConfig) -> Result<Self> {
        Ok(Self {
            codes: config.codes.is_some().then(|| config.code_table()).transpose()?,
            ..Default::default()
        })
    }

    pub fn codes(mut self, codes: CodeTable) -> Self {
        self.codes = Some(codes);
        self
    }

    pub fn allow_null(mut self, allow: bool) -> Self {
        self.allow_null = allow;
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }
}

/// Bind accessor `attr` to a status field and register its scopes.
pub fn status<R>(registry: &mut R, attr: &str, options: StatusOptions) -> Result<StatusBinding>
where
    R: ScopeRegistry + ?Sized,
{
    let mut builder = StatusBinding::builder(attr).unknown_code_policy(options.unknown_code_policy);
    if let Some(field) = options.field {
        builder = builder.field(field);
    }
    if let Some(codes) = options.codes {
        builder = builder.codes(codes);
    }
    if let Some(default) = options.default {
        builder = builder.default_status(default);
    }
    let binding = builder.build();

    for (name, filter) in binding.generate_scopes() {
        registry.register_scope(name, filter);
    }

    Ok(binding)
}

/// Register an always-applied filter admitting only the `wanted` statuses.
pub fn default_scope_by_status<R, I, N>(
    registry: &mut R,
    field: &str,
    wanted: I,
    options: VisibilityOptions,
) -> Result<FilterExpression>
where
    R: ScopeRegistry + ?Sized,
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let mut filter = DefaultVisibilityFilter::new(field)
        .allow_null(options.allow_null)
        .allow_blank(options.allow_blank);
    if let Some(codes) = options.codes {
        filter = filter.codes(codes);
    }

    let expression = filter.build(wanted)?;
    registry.register_default_scope(expression.clone());
    Ok(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{Code, CodeEntry};
    use crate::error::StatusError;
    use crate::filter::FilterValue;
    use crate::host::MemModel;

    #[test]
    fn test_status_registers_one_scope_per_code() {
        let mut model = MemModel::new();
        let binding = status(&mut model, "status", StatusOptions::default()).unwrap();

        assert_eq!(binding.field(), "status");
        assert_eq!(model.scopes.len(), 6);
        assert_eq!(
            model.scope("active"),
            Some(&FilterExpression::equals("status", Code::new("A")))
        );
        assert!(model.default_scopes.is_empty());
    }

    #[test]
    fn test_status_passes_options_through() {
        let mut model = MemModel::new();
        let binding = status(
            &mut model,
            "status",
            StatusOptions::default()
                .field("record_status")
                .default_status("active")
                .unknown_code_policy(UnknownCodePolicy::Strict),
        )
        .unwrap();

        assert_eq!(binding.field(), "record_status");
        assert_eq!(binding.default_status().unwrap(), "active");
        assert_eq!(binding.unknown_code_policy(), UnknownCodePolicy::Strict);
        assert_eq!(
            model.scope("administratively_deleted"),
            Some(&FilterExpression::equals("record_status", Code::new("X")))
        );
    }

    #[test]
    fn test_default_scope_registers_filter() {
        let mut model = MemModel::new();
        let filter = default_scope_by_status(
            &mut model,
            "record_status",
            ["active", "hidden"],
            VisibilityOptions::default().allow_null(true),
        )
        .unwrap();

        assert_eq!(model.default_scopes, vec![filter.clone()]);
        assert_eq!(
            filter.values(),
            vec![
                FilterValue::Code(Code::new("A")),
                FilterValue::Code(Code::new("H")),
                FilterValue::Null,
            ]
        );
    }

    #[test]
    fn test_empty_default_scope_registers_nothing() {
        let mut model = MemModel::new();
        let err = default_scope_by_status(
            &mut model,
            "record_status",
            Vec::<StatusName>::new(),
            VisibilityOptions::default(),
        )
        .unwrap_err();

        assert_eq!(err, StatusError::EmptyStatusSet);
        assert!(model.default_scopes.is_empty());
    }

    #[test]
    fn test_options_from_config_carry_codes_and_policy() {
        let config = RecordStatusConfig {
            unknown_code_policy: Some(UnknownCodePolicy::Strict),
            codes: Some(vec![CodeEntry::new("P", "private_practice")]),
            ..Default::default()
        };

        let options = StatusOptions::from_config(&config).unwrap();
        assert_eq!(options.unknown_code_policy, UnknownCodePolicy::Strict);
        assert_eq!(options.codes.as_ref().unwrap().len(), 1);

        let visibility = VisibilityOptions::from_config(&config).unwrap();
        assert!(visibility.codes.is_some());
    }

    #[test]
    fn test_options_from_default_config_use_builtin_table() {
        let options = StatusOptions::from_config(&RecordStatusConfig::default()).unwrap();
        assert!(options.codes.is_none());
        assert_eq!(options.unknown_code_policy, UnknownCodePolicy::Lenient);
    }
}
