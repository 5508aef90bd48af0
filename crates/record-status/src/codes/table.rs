//! Code tables and the built-in status registry.
//!
//! A [`CodeTable`] is the single source of truth for which codes a field may
//! hold and what they mean. Tables are validated once at construction and are
//! immutable afterwards, so they can be shared freely between bindings and
//! threads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Code, StatusName};
use crate::error::{Result, StatusError};

/// The built-in status definitions, in table order.
pub const STATUSES: &[(&str, &str)] = &[
    ("A", "active"),
    ("D", "deleted"),
    ("H", "hidden"),
    ("X", "administratively_deleted"),
    ("R", "reassigned"),
    ("E", "expired"),
];

static BUILTIN: Lazy<CodeTable> = Lazy::new(|| CodeTable {
    entries: STATUSES
        .iter()
        .map(|(code, name)| CodeEntry::new(*code, *name))
        .collect(),
});

/// A single row of a code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: Code,
    pub name: StatusName,
}

impl CodeEntry {
    pub fn new(code: impl Into<Code>, name: impl Into<StatusName>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl<C: Into<Code>, N: Into<StatusName>> From<(C, N)> for CodeEntry {
    fn from((code, name): (C, N)) -> Self {
        Self::new(code, name)
    }
}

/// An ordered, immutable mapping from stored codes to status names.
///
/// Codes are unique within a table. Names are expected to be unique too, but
/// this is not enforced: reverse lookups return the first matching row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl CodeTable {
    /// The shared built-in table (A/D/H/X/R/E).
    pub fn builtin() -> &'static CodeTable {
        &BUILTIN
    }

    /// Build a custom table from `(code, name)` rows, preserving their order.
    ///
    /// Fails on blank codes or names, on codes or names with surrounding
    /// whitespace (stored values are trimmed before lookup, so such rows
    /// could never be read back), and on a code that appears twice.
    pub fn new<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CodeEntry>,
    {
        let entries: Vec<CodeEntry> = entries.into_iter().map(Into::into).collect();

        for (idx, entry) in entries.iter().enumerate() {
            if entry.code.as_str().trim().is_empty() {
                return Err(StatusError::BlankCode);
            }
            if entry.name.as_str().trim().is_empty() {
                return Err(StatusError::BlankName(entry.code.to_string()));
            }
            if entry.code.as_str().trim() != entry.code.as_str() {
                return Err(StatusError::PaddedCode(entry.code.to_string()));
            }
            if entry.name.as_str().trim() != entry.name.as_str() {
                return Err(StatusError::PaddedName(entry.name.to_string()));
            }
            if entries[..idx].iter().any(|prev| prev.code == entry.code) {
                return Err(StatusError::DuplicateCode(entry.code.to_string()));
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.name_for(code).is_some()
    }

    /// Forward lookup by exact code.
    pub fn name_for(&self, code: &str) -> Option<&StatusName> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| &entry.name)
    }

    /// Reverse lookup by exact name.
    pub fn code_for(&self, name: &str) -> Option<&Code> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.code)
    }

    /// Resolve a status name or an already-stored code to the code to store.
    ///
    /// Resolution order:
    /// 1. `input` matches a code exactly: returned unchanged.
    /// 2. trimmed `input` matches a name: that row's code.
    /// 3. trimmed `input` matches a code: that code.
    ///
    /// Anything else is [`StatusError::UnknownStatusValue`].
    pub fn resolve_to_code(&self, input: &str) -> Result<Code> {
        if let Some(entry) = self.entries.iter().find(|entry| entry.code == input) {
            return Ok(entry.code.clone());
        }

        let trimmed = input.trim();
        if let Some(code) = self.code_for(trimmed) {
            return Ok(code.clone());
        }
        if let Some(entry) = self.entries.iter().find(|entry| entry.code == trimmed) {
            return Ok(entry.code.clone());
        }

        Err(StatusError::UnknownStatusValue(input.to_string()))
    }

    /// Resolve a stored code to its status name.
    ///
    /// Blank input and codes missing from the table both yield `None`; use
    /// [`CodeTable::contains_code`] to tell them apart.
    pub fn resolve_to_name(&self, code: &str) -> Option<StatusName> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.name_for(trimmed).cloned()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = &'a CodeEntry;
    type IntoIter = std::slice::Iter<'a, CodeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for CodeTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<CodeEntry>::deserialize(deserializer)?;
        CodeTable::new(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practice_table() -> CodeTable {
        CodeTable::new([
            ("P", "private_practice"),
            ("G", "group_practice"),
            ("H", "hospital"),
            ("C", "clinic"),
            ("O", "home"),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_table_has_six_entries_in_order() {
        let codes: Vec<_> = CodeTable::builtin().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "D", "H", "X", "R", "E"]);
    }

    #[test]
    fn test_builtin_table_is_a_bijection() {
        let table = CodeTable::builtin();
        for entry in table {
            assert_eq!(table.code_for(entry.name.as_str()), Some(&entry.code));
        }
    }

    #[test]
    fn test_resolve_to_code_accepts_names() {
        let table = CodeTable::builtin();
        assert_eq!(table.resolve_to_code("active").unwrap(), "A");
        assert_eq!(table.resolve_to_code("expired").unwrap(), "E");
    }

    #[test]
    fn test_resolve_to_code_accepts_codes() {
        let table = CodeTable::builtin();
        assert_eq!(table.resolve_to_code("R").unwrap(), "R");
    }

    #[test]
    fn test_resolve_to_code_trims_whitespace() {
        let table = CodeTable::builtin();
        assert_eq!(table.resolve_to_code(" R ").unwrap(), "R");
        assert_eq!(table.resolve_to_code("  hidden\n").unwrap(), "H");
    }

    #[test]
    fn test_resolve_to_code_rejects_unknown_values() {
        let err = CodeTable::builtin().resolve_to_code("foo").unwrap_err();
        assert_eq!(err, StatusError::UnknownStatusValue("foo".into()));
    }

    #[test]
    fn test_resolve_to_code_is_case_sensitive() {
        assert!(CodeTable::builtin().resolve_to_code("a").is_err());
        assert!(CodeTable::builtin().resolve_to_code("Active").is_err());
    }

    #[test]
    fn test_exact_code_wins_over_a_name_with_the_same_spelling() {
        // "B" is both a code and the name of the "A" row.
        let table = CodeTable::new([("A", "B"), ("B", "other")]).unwrap();
        assert_eq!(table.resolve_to_code("B").unwrap(), "B");
        // With surrounding whitespace the exact match fails, so the name wins.
        assert_eq!(table.resolve_to_code(" B ").unwrap(), "A");
    }

    #[test]
    fn test_resolve_to_name_trims_and_looks_up() {
        let table = CodeTable::builtin();
        assert_eq!(table.resolve_to_name("D").unwrap(), "deleted");
        assert_eq!(table.resolve_to_name(" D ").unwrap(), "deleted");
    }

    #[test]
    fn test_resolve_to_name_blank_is_none() {
        let table = CodeTable::builtin();
        assert_eq!(table.resolve_to_name(""), None);
        assert_eq!(table.resolve_to_name("   "), None);
    }

    #[test]
    fn test_resolve_to_name_unknown_is_none() {
        assert_eq!(CodeTable::builtin().resolve_to_name("Z"), None);
    }

    #[test]
    fn test_round_trips_both_directions() {
        for table in [CodeTable::builtin().clone(), practice_table()] {
            for entry in &table {
                let name = table.resolve_to_name(entry.code.as_str()).unwrap();
                assert_eq!(table.resolve_to_code(name.as_str()).unwrap(), entry.code);

                let code = table.resolve_to_code(entry.name.as_str()).unwrap();
                assert_eq!(table.resolve_to_name(code.as_str()).unwrap(), entry.name);
            }
        }
    }

    #[test]
    fn test_custom_table_replaces_builtin() {
        let table = practice_table();
        assert!(table.resolve_to_code("active").is_err());
        assert_eq!(table.resolve_to_code("private_practice").unwrap(), "P");
        assert_eq!(table.resolve_to_code("clinic").unwrap(), "C");
    }

    #[test]
    fn test_duplicate_codes_are_rejected() {
        let err = CodeTable::new([("A", "active"), ("A", "archived")]).unwrap_err();
        assert_eq!(err, StatusError::DuplicateCode("A".into()));
    }

    #[test]
    fn test_blank_codes_and_names_are_rejected() {
        assert_eq!(
            CodeTable::new([(" ", "space")]).unwrap_err(),
            StatusError::BlankCode
        );
        assert_eq!(
            CodeTable::new([("S", "")]).unwrap_err(),
            StatusError::BlankName("S".into())
        );
    }

    #[test]
    fn test_padded_codes_are_rejected() {
        assert_eq!(
            CodeTable::new([(" P", "private_practice"), ("G", "group_practice")]).unwrap_err(),
            StatusError::PaddedCode(" P".into())
        );
    }

    #[test]
    fn test_padded_names_are_rejected() {
        assert_eq!(
            CodeTable::new([("P", " private ")]).unwrap_err(),
            StatusError::PaddedName(" private ".into())
        );
    }

    #[test]
    fn test_codes_equal_after_trimming_are_rejected() {
        assert_eq!(
            CodeTable::new([("P", "a"), ("P ", "b")]).unwrap_err(),
            StatusError::PaddedCode("P ".into())
        );
    }

    #[test]
    fn test_empty_table_is_allowed() {
        let table = CodeTable::new(Vec::<CodeEntry>::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.resolve_to_code("active").is_err());
    }

    #[test]
    fn test_deserializes_and_validates_rows() {
        let table: CodeTable =
            serde_json::from_str(r#"[{"code":"F","name":"foo"},{"code":"B","name":"bar"}]"#)
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.code_for("bar").unwrap(), "B");

        let dup = serde_json::from_str::<CodeTable>(
            r#"[{"code":"F","name":"foo"},{"code":"F","name":"bar"}]"#,
        );
        assert!(dup.is_err());
    }
}
