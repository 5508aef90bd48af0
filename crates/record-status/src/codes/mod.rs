//! # Code Tables
//!
//! A status field stores a short code (`"A"`) while application code talks in
//! descriptive names (`active`). This module owns that mapping.
//!
//! | Code | Name |
//! |------|------|
//! | `A` | `active` |
//! | `D` | `deleted` |
//! | `H` | `hidden` |
//! | `X` | `administratively_deleted` |
//! | `R` | `reassigned` |
//! | `E` | `expired` |
//!
//! The table above is [`CodeTable::builtin`]. Custom tables built with
//! [`CodeTable::new`] replace it entirely; they are never merged.
//!
//! ## Normalization
//!
//! Input is compared as plain strings after trimming surrounding whitespace.
//! There is no case folding: `Active` is not `active`.

mod table;
mod value;

pub use table::{CodeEntry, CodeTable, STATUSES};
pub use value::{Code, StatusName};
