//! # rusty-forms
//!
//! A declarative field validation engine. Rules are declared per record type
//! with ordinary function calls (or loaded from TOML), frozen into an immutable
//! registry, and evaluated into a field-keyed [`Report`]. An invalid record is a
//! normal return value, never an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_forms::{constraints::*, impl_record, Engine, Group, GroupSet, Rules};
//!
//! const REGISTER: Group = Group::new("Register");
//!
//! struct User {
//!     username: Option<String>,
//!     password: Option<String>,
//! }
//!
//! impl_record!(User { username, password });
//!
//! let mut engine = Engine::new();
//! engine
//!     .register_type::<User>(
//!         Rules::new()
//!             .field("username", [not_null(), length(3, 20)])
//!             .field("password", [not_null(), min_length(8).in_groups([REGISTER])]),
//!     )
//!     .unwrap();
//!
//! let user = User { username: Some("ab".into()), password: Some("short".into()) };
//!
//! let report = engine.validate(&user, &GroupSet::new()).unwrap();
//! assert_eq!(report.get("username"), Some("length must be between 3 and 20"));
//! assert!(!report.has_error("password"));
//!
//! let report = engine.validate(&user, &[REGISTER].into()).unwrap();
//! assert_eq!(report.get("password"), Some("length must be at least 8"));
//! ```
//!
//! ## Features
//!
//! - **`axum`** - `IntoResponse` for [`Report`], [`Outcome`] and [`EngineError`]
//!
//! ## Architecture
//!
//! - **`rusty-forms-validation`** - Pure check functions (no_std compatible)
//! - **`rusty-forms`** - Rules, registries, the engine, reports and config loading

pub mod config;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod group;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod report;
#[cfg(feature = "axum")]
pub mod response;
pub mod rule;
pub mod value;

pub use config::Config;
pub use engine::{Engine, Outcome};
pub use error::{DeclarationError, EngineError};
pub use group::{Group, GroupSet};
pub use record::{JsonRecord, Record, RecordSchema, RecordType};
pub use registry::{FieldRules, Registry, Rules};
pub use report::{FailurePolicy, Report};
pub use rule::{Predicate, Rule};
pub use value::FieldValue;

// Re-export the check functions for custom rules
pub use rusty_forms_validation as validation;
