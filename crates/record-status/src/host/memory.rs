use super::{AttributeStore, ScopeRegistry};
use crate::codes::StatusName;
use crate::filter::FilterExpression;
use std::collections::HashMap;

/// A record backed by a plain map of field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemRecord {
    fields: HashMap<String, Option<String>>,
}

impl MemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test helper: store a raw value (or null) without going through a binding.
    pub fn with_raw(mut self, field: &str, value: Option<&str>) -> Self {
        self.set_raw(field, value);
        self
    }

    pub fn set_raw(&mut self, field: &str, value: Option<&str>) {
        self.fields
            .insert(field.to_string(), value.map(str::to_string));
    }
}

impl AttributeStore for MemRecord {
    fn get_attr(&self, field: &str) -> Option<String> {
        self.fields.get(field).cloned().flatten()
    }

    fn set_attr(&mut self, field: &str, value: String) {
        self.fields.insert(field.to_string(), Some(value));
    }
}

/// A model-level scope registry that just keeps what it is given.
#[derive(Debug, Clone, Default)]
pub struct MemModel {
    pub scopes: Vec<(StatusName, FilterExpression)>,
    pub default_scopes: Vec<FilterExpression>,
}

impl MemModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a registered scope by name.
    pub fn scope(&self, name: &str) -> Option<&FilterExpression> {
        self.scopes
            .iter()
            .find(|(scope_name, _)| scope_name == name)
            .map(|(_, filter)| filter)
    }
}

impl ScopeRegistry for MemModel {
    fn register_scope(&mut self, name: StatusName, filter: FilterExpression) {
        self.scopes.push((name, filter));
    }

    fn register_default_scope(&mut self, filter: FilterExpression) {
        self.default_scopes.push(filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Code;

    #[test]
    fn test_unset_and_null_fields_read_as_none() {
        let record = MemRecord::new().with_raw("status", None);
        assert_eq!(record.get_attr("status"), None);
        assert_eq!(record.get_attr("missing"), None);
    }

    #[test]
    fn test_set_attr_overwrites() {
        let mut record = MemRecord::new().with_raw("status", Some("D"));
        record.set_attr("status", "A".to_string());
        assert_eq!(record.get_attr("status").as_deref(), Some("A"));
    }

    #[test]
    fn test_model_keeps_registration_order() {
        let mut model = MemModel::new();
        model.register_scope("active".into(), FilterExpression::equals("s", Code::new("A")));
        model.register_scope("hidden".into(), FilterExpression::equals("s", Code::new("H")));

        let names: Vec<_> = model.scopes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["active", "hidden"]);
        assert_eq!(
            model.scope("hidden"),
            Some(&FilterExpression::equals("s", Code::new("H")))
        );
        assert!(model.scope("deleted").is_none());
    }
}
