//! # Host Collaborators
//!
//! record-status never touches storage itself. The host persistence layer
//! supplies two capabilities:
//!
//! - [`AttributeStore`]: per-record get/set of raw field values.
//! - [`ScopeRegistry`]: somewhere to register named filters and an
//!   always-applied default filter.
//!
//! [`MemRecord`] and [`MemModel`] are in-memory implementations, used by the
//! tests and handy for hosts that build their queries elsewhere.

use crate::codes::StatusName;
use crate::filter::FilterExpression;

mod memory;

pub use memory::{MemModel, MemRecord};

/// Raw field access on a single record.
pub trait AttributeStore {
    /// Read the stored value of `field`. `None` when the field is unset or null.
    fn get_attr(&self, field: &str) -> Option<String>;

    /// Store `value` into `field`.
    fn set_attr(&mut self, field: &str, value: String);
}

/// Filter registration on a model.
pub trait ScopeRegistry {
    /// Register a named filter (e.g. an `active` scope).
    fn register_scope(&mut self, name: StatusName, filter: FilterExpression);

    /// Register a filter that applies to every query unless overridden.
    fn register_default_scope(&mut self, filter: FilterExpression);
}
