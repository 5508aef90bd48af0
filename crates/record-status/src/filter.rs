//! Filter expressions.
//!
//! A [`FilterExpression`] describes which stored codes a query should admit.
//! It is built once from a status selection and handed to the host, which
//! decides how to run it. Expressions are plain data: they can be inspected,
//! compared, serialized, and rendered as a parameterized SQL fragment, but
//! nothing here evaluates them against storage.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::codes::Code;

/// A single value an `IN (...)` list may admit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterValue {
    /// A stored status code.
    Code(Code),
    /// The field holds no value at all.
    Null,
    /// The field holds the empty string.
    Blank,
}

impl FilterValue {
    /// The literal this value binds to, `None` for SQL `NULL`.
    pub fn as_bind(&self) -> Option<&str> {
        match self {
            FilterValue::Code(code) => Some(code.as_str()),
            FilterValue::Null => None,
            FilterValue::Blank => Some(""),
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_bind().serialize(serializer)
    }
}

impl From<Code> for FilterValue {
    fn from(code: Code) -> Self {
        FilterValue::Code(code)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_bind() {
            Some(literal) => write!(f, "'{}'", literal.replace('\'', "''")),
            None => f.write_str("NULL"),
        }
    }
}

/// An inclusion predicate over a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum FilterExpression {
    /// `field = code`
    Eq { field: String, code: Code },
    /// `field IN (values...)`
    In {
        field: String,
        values: Vec<FilterValue>,
    },
}

impl FilterExpression {
    /// Convenience: create an equality filter.
    pub fn equals(field: impl Into<String>, code: Code) -> Self {
        FilterExpression::Eq {
            field: field.into(),
            code,
        }
    }

    /// Convenience: create an inclusion filter.
    pub fn one_of(field: impl Into<String>, values: Vec<FilterValue>) -> Self {
        FilterExpression::In {
            field: field.into(),
            values,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FilterExpression::Eq { field, .. } | FilterExpression::In { field, .. } => field,
        }
    }

    /// The admitted values, in order. An equality filter admits one code.
    pub fn values(&self) -> Vec<FilterValue> {
        match self {
            FilterExpression::Eq { code, .. } => vec![FilterValue::Code(code.clone())],
            FilterExpression::In { values, .. } => values.clone(),
        }
    }

    /// Render as a parameterized SQL fragment.
    ///
    /// `qualifier` is prefixed to the field (usually the quoted table name).
    /// Equality filters bind a single `?`; inclusion filters bind the whole
    /// value list to one `?`, leaving expansion to the driver.
    pub fn to_sql(&self, qualifier: Option<&str>) -> SqlFragment {
        let column = match qualifier {
            Some(q) if !q.is_empty() => format!("{}.{}", q, self.field()),
            _ => self.field().to_string(),
        };

        let clause = match self {
            FilterExpression::Eq { .. } => format!("{} = ?", column),
            FilterExpression::In { .. } => format!("{} in (?)", column),
        };

        SqlFragment {
            clause,
            binds: self.values(),
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Eq { field, code } => {
                write!(f, "{} = {}", field, FilterValue::Code(code.clone()))
            }
            FilterExpression::In { field, values } => {
                let list: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "{} IN ({})", field, list.join(", "))
            }
        }
    }
}

/// A SQL clause with `?` placeholders and the values to bind to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlFragment {
    pub clause: String,
    pub binds: Vec<FilterValue>,
}
