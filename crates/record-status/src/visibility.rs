//! Default visibility filters.
//!
//! Most models only want to show `active` records unless a query says
//! otherwise. [`DefaultVisibilityFilter`] builds that always-applied
//! restriction as a `field IN (...)` expression from a list of status names.
//!
//! Names the table does not know are dropped rather than rejected: the wanted
//! set is fixed model configuration, so the filter is built best effort. A
//! filter left with no codes at all is a configuration error
//! ([`StatusError::EmptyStatusSet`]), since it would match nothing.
//!
//! Null and empty-string rows can be admitted too. They are appended after
//! the codes, null first:
//!
//! ```
//! use record_status::visibility::DefaultVisibilityFilter;
//!
//! let filter = DefaultVisibilityFilter::new("record_status")
//!     .allow_null(true)
//!     .allow_blank(true)
//!     .build(["active"])
//!     .unwrap();
//! assert_eq!(filter.to_string(), "record_status IN ('A', NULL, '')");
//! ```

use crate::codes::CodeTable;
use crate::error::{Result, StatusError};
use crate::filter::{FilterExpression, FilterValue};

/// Builder for a default visibility filter on one field.
#[derive(Debug, Clone)]
pub struct DefaultVisibilityFilter {
    field: String,
    codes: Option<CodeTable>,
    allow_null: bool,
    allow_blank: bool,
}

impl DefaultVisibilityFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            codes: None,
            allow_null: false,
            allow_blank: false,
        }
    }

    /// Use a custom code table instead of the built-in one.
    pub fn codes(mut self, codes: CodeTable) -> Self {
        self.codes = Some(codes);
        self
    }

    /// Also admit rows where the field is null.
    pub fn allow_null(mut self, allow: bool) -> Self {
        self.allow_null = allow;
        self
    }

    /// Also admit rows where the field is the empty string.
    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    /// Build the filter admitting the `wanted` statuses.
    pub fn build<I, N>(&self, wanted: I) -> Result<FilterExpression>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let table = match &self.codes {
            Some(codes) => codes,
            None => CodeTable::builtin(),
        };
        build_visibility_filter(
            table,
            &self.field,
            wanted,
            self.allow_null,
            self.allow_blank,
        )
    }
}

/// Build a `field IN (...)` filter from status names.
///
/// Each name is resolved through `table`'s reverse mapping; unknown names are
/// skipped. Fails with [`StatusError::EmptyStatusSet`] when no code remains.
pub fn build_visibility_filter<I, N>(
    table: &CodeTable,
    field: &str,
    wanted: I,
    allow_null: bool,
    allow_blank: bool,
) -> Result<FilterExpression>
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let mut values: Vec<FilterValue> = Vec::new();
    for name in wanted {
        let name = name.as_ref();
        match table.code_for(name) {
            Some(code) => values.push(FilterValue::Code(code.clone())),
            None => tracing::debug!(field, status = name, "skipping unknown status name"),
        }
    }

    if values.is_empty() {
        return Err(StatusError::EmptyStatusSet);
    }

    if allow_null {
        values.push(FilterValue::Null);
    }
    if allow_blank {
        values.push(FilterValue::Blank);
    }

    Ok(FilterExpression::one_of(field, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Code;

    fn code(c: &str) -> FilterValue {
        FilterValue::Code(Code::new(c))
    }

    #[test]
    fn test_single_status() {
        let filter = DefaultVisibilityFilter::new("record_status")
            .build(["active"])
            .unwrap();
        assert_eq!(
            filter,
            FilterExpression::one_of("record_status", vec![code("A")])
        );
    }

    #[test]
    fn test_multiple_statuses_keep_requested_order() {
        let filter = DefaultVisibilityFilter::new("record_status")
            .build(["active", "hidden"])
            .unwrap();
        assert_eq!(filter.values(), vec![code("A"), code("H")]);

        let reversed = DefaultVisibilityFilter::new("record_status")
            .build(["hidden", "active"])
            .unwrap();
        assert_eq!(reversed.values(), vec![code("H"), code("A")]);
    }

    #[test]
    fn test_allow_null_appends_null() {
        let filter = DefaultVisibilityFilter::new("record_status")
            .allow_null(true)
            .build(["active"])
            .unwrap();
        assert_eq!(filter.values(), vec![code("A"), FilterValue::Null]);
    }

    #[test]
    fn test_allow_blank_appends_empty_string() {
        let filter = DefaultVisibilityFilter::new("record_status")
            .allow_blank(true)
            .build(["active"])
            .unwrap();
        assert_eq!(filter.values(), vec![code("A"), FilterValue::Blank]);
    }

    #[test]
    fn test_null_comes_before_blank() {
        let filter = DefaultVisibilityFilter::new("record_status")
            .allow_blank(true)
            .allow_null(true)
            .build(["active", "hidden"])
            .unwrap();
        assert_eq!(
            filter.values(),
            vec![code("A"), code("H"), FilterValue::Null, FilterValue::Blank]
        );
    }

    #[test]
    fn test_unknown_names_are_dropped() {
        let filter = DefaultVisibilityFilter::new("record_status")
            .build(["active", "nonsense"])
            .unwrap();
        assert_eq!(filter.values(), vec![code("A")]);
    }

    #[test]
    fn test_empty_wanted_set_fails() {
        let err = DefaultVisibilityFilter::new("record_status")
            .build(Vec::<&str>::new())
            .unwrap_err();
        assert_eq!(err, StatusError::EmptyStatusSet);
    }

    #[test]
    fn test_only_unknown_names_fails_even_with_null_allowed() {
        let err = DefaultVisibilityFilter::new("record_status")
            .allow_null(true)
            .allow_blank(true)
            .build(["nonsense"])
            .unwrap_err();
        assert_eq!(err, StatusError::EmptyStatusSet);
    }

    #[test]
    fn test_custom_codes() {
        let table = CodeTable::new([
            ("P", "private_practice"),
            ("G", "group_practice"),
            ("H", "hospital"),
        ])
        .unwrap();
        let filter = DefaultVisibilityFilter::new("type_code")
            .codes(table.clone())
            .build(["private_practice"])
            .unwrap();
        assert_eq!(filter.values(), vec![code("P")]);

        // Built-in names mean nothing to a custom table.
        let err = DefaultVisibilityFilter::new("type_code")
            .codes(table)
            .build(["active"])
            .unwrap_err();
        assert_eq!(err, StatusError::EmptyStatusSet);
    }

    #[test]
    fn test_free_function_matches_builder() {
        let built = build_visibility_filter(
            CodeTable::builtin(),
            "record_status",
            ["active"],
            true,
            false,
        )
        .unwrap();
        let from_builder = DefaultVisibilityFilter::new("record_status")
            .allow_null(true)
            .build(["active"])
            .unwrap();
        assert_eq!(built, from_builder);
    }

    #[test]
    fn test_accepts_owned_names() {
        let wanted = vec![String::from("deleted"), String::from("expired")];
        let filter = DefaultVisibilityFilter::new("s").build(&wanted).unwrap();
        assert_eq!(filter.to_string(), "s IN ('D', 'E')");
    }
}
