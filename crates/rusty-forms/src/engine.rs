// File: src/engine.rs
// Purpose: Registry lookup by record type and validation entry points

use crate::error::{DeclarationError, EngineError};
use crate::group::GroupSet;
use crate::record::{Record, RecordSchema, RecordType};
use crate::registry::{Registry, Rules};
use crate::report::{FailurePolicy, Report};
use std::collections::HashMap;
use std::sync::Arc;

/// Result of [`Engine::check`], for callers that branch on validity.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Valid,
    Invalid(Report),
}

impl Outcome {
    pub fn from_report(report: Report) -> Self {
        if report.is_empty() {
            Outcome::Valid
        } else {
            Outcome::Invalid(report)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The report if validation failed
    pub fn report(&self) -> Option<&Report> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(report) => Some(report),
        }
    }

    /// `Ok(())` when valid, the report otherwise, so handlers can use `?`.
    pub fn into_result(self) -> Result<(), Report> {
        match self {
            Outcome::Valid => Ok(()),
            Outcome::Invalid(report) => Err(report),
        }
    }
}

/// Holds one registry per record type.
///
/// Registration needs `&mut self`; validation only `&self`. Share a fully
/// registered engine behind an `Arc` or a `Lazy` static to validate from many
/// threads without locking.
///
/// ```
/// use rusty_forms::{constraints::*, Engine, GroupSet, JsonRecord, RecordType, Rules};
/// use serde_json::json;
///
/// let mut engine = Engine::new();
/// engine
///     .register(
///         RecordType::new("User", ["username"]),
///         Rules::new().field("username", [not_null(), length(3, 20)]),
///     )
///     .unwrap();
///
/// let record = JsonRecord::from_value("User", json!({"username": "ab"})).unwrap();
/// let report = engine.validate(&record, &GroupSet::new()).unwrap();
/// assert_eq!(report.get("username"), Some("length must be between 3 and 20"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    policy: FailurePolicy,
    registries: HashMap<String, Arc<Registry>>,
}

impl Engine {
    /// Engine using the fail-fast-per-field policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            policy,
            registries: HashMap::new(),
        }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Builds and stores the registry for `record_type`.
    ///
    /// A record type can only be registered once.
    pub fn register(
        &mut self,
        record_type: RecordType,
        rules: Rules,
    ) -> Result<Arc<Registry>, DeclarationError> {
        if self.registries.contains_key(record_type.name()) {
            return Err(DeclarationError::DuplicateType(record_type.name().to_string()));
        }

        let registry = Arc::new(Registry::build(record_type, rules)?);
        let name = registry.record_type().name().to_string();

        tracing::debug!(
            "Registered {} with {} rules across {} fields",
            name,
            registry.rule_count(),
            registry.fields().len()
        );

        self.registries.insert(name, Arc::clone(&registry));
        Ok(registry)
    }

    /// Registers a type whose descriptor comes from [`RecordSchema`].
    pub fn register_type<T: RecordSchema>(
        &mut self,
        rules: Rules,
    ) -> Result<Arc<Registry>, DeclarationError> {
        self.register(T::record_type(), rules)
    }

    pub fn registry(&self, type_name: &str) -> Option<Arc<Registry>> {
        self.registries.get(type_name).cloned()
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.registries.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn record_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Validates `record` under `active` groups.
    ///
    /// An invalid record is `Ok` with a non-empty report. The only error is a
    /// record type that was never registered.
    pub fn validate<R>(&self, record: &R, active: &GroupSet) -> Result<Report, EngineError>
    where
        R: Record + ?Sized,
    {
        let type_name = record.type_name();
        let registry = self
            .registries
            .get(type_name)
            .ok_or_else(|| EngineError::UnregisteredType(type_name.to_string()))?;

        let report = registry.validate(record, active, self.policy);

        tracing::debug!(
            "Validated {} under {}: {} field(s) invalid",
            type_name,
            active,
            report.len()
        );

        Ok(report)
    }

    /// Like [`validate`](Self::validate) but wrapped in an [`Outcome`].
    pub fn check<R>(&self, record: &R, active: &GroupSet) -> Result<Outcome, EngineError>
    where
        R: Record + ?Sized,
    {
        self.validate(record, active).map(Outcome::from_report)
    }
}
