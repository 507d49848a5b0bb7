// File: src/registry.rs
// Purpose: Per-record-type rule declarations and the immutable registry built from them

use crate::error::DeclarationError;
use crate::group::GroupSet;
use crate::record::{Record, RecordType};
use crate::report::{FailurePolicy, Report};
use crate::rule::Rule;
use crate::value::FieldValue;

/// Ordered rule declarations for one record type.
///
/// ```
/// use rusty_forms::{constraints::*, Rules};
///
/// let rules = Rules::new()
///     .field("username", [not_null(), length(3, 20)])
///     .field("password", [not_null(), min_length(8)]);
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rules {
    entries: Vec<(String, Vec<Rule>)>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares rules for a field. Declaring a field again appends to its rules.
    pub fn field<I>(mut self, name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let name = name.into();
        let rules = rules.into_iter();
        match self.entries.iter_mut().find(|(field, _)| *field == name) {
            Some((_, existing)) => existing.extend(rules),
            None => self.entries.push((name, rules.collect())),
        }
        self
    }

    /// Declares a single rule for a field.
    pub fn rule(self, field: impl Into<String>, rule: Rule) -> Self {
        self.field(field, [rule])
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rules attached to one field, in declaration order. Never empty.
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Immutable rule set for one record type.
#[derive(Debug, Clone)]
pub struct Registry {
    record_type: RecordType,
    fields: Vec<FieldRules>,
}

impl Registry {
    /// Checks the declarations against the record type and freezes them.
    pub fn build(record_type: RecordType, rules: Rules) -> Result<Self, DeclarationError> {
        let mut fields = Vec::with_capacity(rules.entries.len());

        for (name, rules) in rules.entries {
            if !record_type.has_field(&name) {
                return Err(DeclarationError::UnknownField {
                    record: record_type.name().to_string(),
                    field: name,
                });
            }

            if rules.is_empty() {
                return Err(DeclarationError::EmptyRules {
                    record: record_type.name().to_string(),
                    field: name,
                });
            }

            if let Some(rule) = rules.iter().find(|r| r.message().trim().is_empty()) {
                return Err(DeclarationError::EmptyMessage {
                    record: record_type.name().to_string(),
                    field: name,
                    rule: rule.name().to_string(),
                });
            }

            fields.push(FieldRules { name, rules });
        }

        Ok(Self {
            record_type,
            fields,
        })
    }

    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn rules_for(&self, field: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.rules.as_slice())
    }

    /// Total number of rules across all fields
    pub fn rule_count(&self) -> usize {
        self.fields.iter().map(|f| f.rules.len()).sum()
    }

    /// Evaluates every applicable rule against `record`.
    ///
    /// Fields and rules run in declaration order. A field stops at its first
    /// violation under [`FailurePolicy::FailFast`]; other fields always run.
    pub fn validate<R>(&self, record: &R, active: &GroupSet, policy: FailurePolicy) -> Report
    where
        R: Record + ?Sized,
    {
        let mut report = Report::new(policy);

        for field in &self.fields {
            let value = record.field(&field.name).unwrap_or(FieldValue::Null);

            for rule in field.rules.iter().filter(|r| r.applies_to(active)) {
                if rule.check(&value) {
                    continue;
                }

                tracing::trace!(
                    "{}.{} failed `{}` on {} value",
                    self.record_type.name(),
                    field.name,
                    rule.name(),
                    value.kind()
                );
                report.push(field.name.as_str(), rule.message());

                if policy == FailurePolicy::FailFast {
                    break;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::*;
    use crate::record::JsonRecord;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user_type() -> RecordType {
        RecordType::new("User", ["username", "password"])
    }

    fn user(value: serde_json::Value) -> JsonRecord {
        JsonRecord::from_value("User", value).unwrap()
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Registry::build(user_type(), Rules::new().rule("nickname", not_null()))
            .unwrap_err();

        assert_eq!(
            err,
            DeclarationError::UnknownField {
                record: "User".to_string(),
                field: "nickname".to_string(),
            }
        );
    }

    #[test]
    fn test_field_without_rules_is_rejected() {
        let err = Registry::build(user_type(), Rules::new().field("username", Vec::<Rule>::new()))
            .unwrap_err();

        assert!(matches!(err, DeclarationError::EmptyRules { .. }));
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let err = Registry::build(
            user_type(),
            Rules::new().rule("username", not_null().with_message("  ")),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            DeclarationError::EmptyMessage { ref rule, .. } if rule == "not_null"
        ));
    }

    #[test]
    fn test_repeated_field_appends_in_order() {
        let registry = Registry::build(
            user_type(),
            Rules::new()
                .rule("username", not_null())
                .rule("password", not_null())
                .rule("username", length(3, 20)),
        )
        .unwrap();

        let names: Vec<&str> = registry
            .rules_for("username")
            .unwrap()
            .iter()
            .map(Rule::name)
            .collect();
        assert_eq!(names, ["not_null", "length"]);
        assert_eq!(registry.fields()[0].name(), "username");
        assert_eq!(registry.rule_count(), 3);
    }

    #[test]
    fn test_fail_fast_stops_per_field() {
        let registry = Registry::build(
            user_type(),
            Rules::new().field("password", [not_blank(), min_length(8)]),
        )
        .unwrap();

        let report = registry.validate(
            &user(json!({"password": ""})),
            &GroupSet::new(),
            FailurePolicy::FailFast,
        );
        assert_eq!(report.messages("password"), ["must not be blank"]);
    }

    #[test]
    fn test_collect_all_keeps_every_violation() {
        let registry = Registry::build(
            user_type(),
            Rules::new().field("password", [not_blank(), min_length(8)]),
        )
        .unwrap();

        let report = registry.validate(
            &user(json!({"password": " "})),
            &GroupSet::new(),
            FailurePolicy::CollectAll,
        );
        assert_eq!(
            report.messages("password"),
            ["must not be blank", "length must be at least 8"]
        );
    }

    #[test]
    fn test_missing_field_reads_as_null() {
        let registry =
            Registry::build(user_type(), Rules::new().rule("username", not_null())).unwrap();

        let report = registry.validate(&user(json!({})), &GroupSet::new(), FailurePolicy::FailFast);
        assert_eq!(report.get("username"), Some("must not be null"));
    }
}
