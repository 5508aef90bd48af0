//! # record-status Architecture
//!
//! record-status maps compact stored status codes (`"A"`, `"D"`, ...) to
//! descriptive names (`active`, `deleted`, ...) and builds the query filters
//! a model needs from that mapping. It is a library for persistence layers:
//! it never reads storage or runs queries itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Model setup calls: status, default_scope_by_status       │
//! │  - Registers scopes on the host, returns bindings/filters   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (binding.rs, visibility.rs, filter.rs)                │
//! │  - StatusBinding: scopes + read/write accessors             │
//! │  - DefaultVisibilityFilter: field IN (...) restriction      │
//! │  - FilterExpression: inspectable predicate, SQL rendering   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Code Tables (codes/)                                       │
//! │  - Immutable, validated Code ↔ StatusName mapping           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host plugs in through the traits in [`host`]: per-record attribute
//! access and scope registration.
//!
//! ## Key Principle: Pure Core
//!
//! Everything here is a synchronous, deterministic function over immutable
//! values. Tables, bindings and filters are built once during model setup and
//! can be shared across threads afterwards. Only [`config`] touches the
//! filesystem, and only when asked to load.
//!
//! ## Module Overview
//!
//! - [`api`]: Model configuration calls
//! - [`binding`]: Status accessors and per-status scopes
//! - [`visibility`]: Default visibility filters
//! - [`filter`]: Filter expressions and SQL rendering
//! - [`codes`]: Code tables
//! - [`host`]: Host collaborator traits and in-memory implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod binding;
pub mod codes;
pub mod config;
pub mod error;
pub mod filter;
pub mod host;
pub mod visibility;

pub use binding::{StatusBinding, UnknownCodePolicy};
pub use codes::{Code, CodeTable, StatusName};
pub use error::{Result, StatusError};
pub use filter::{FilterExpression, FilterValue};
pub use visibility::DefaultVisibilityFilter;
