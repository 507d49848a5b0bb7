// File: src/report.rs
// Purpose: Aggregated, field-keyed result of one validation call

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// How many violations to keep per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first violated rule of each field.
    #[default]
    FailFast,
    /// Keep every violated rule of each field, in declaration order.
    CollectAll,
}

/// Field name to failure messages. Empty means the record is valid.
///
/// Serializes as `{"field": "message"}` under [`FailurePolicy::FailFast`] and
/// as `{"field": ["first", "second"]}` under [`FailurePolicy::CollectAll`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    policy: FailurePolicy,
    errors: BTreeMap<String, Vec<String>>,
}

impl Report {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            errors: BTreeMap::new(),
        }
    }

    /// Report holding a single message, e.g. for payloads that never became a record.
    pub fn single(
        policy: FailurePolicy,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut report = Self::new(policy);
        report.push(field, message);
        report
    }

    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// First message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// All messages for a field
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Field to first message, the shape an HTTP layer usually returns.
    pub fn first_messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|m| (field.clone(), m.clone()))
            })
            .collect()
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, messages) in &self.errors {
            match self.policy {
                FailurePolicy::FailFast => {
                    map.serialize_entry(field, messages.first().map(String::as_str).unwrap_or(""))?
                }
                FailurePolicy::CollectAll => map.serialize_entry(field, messages)?,
            }
        }
        map.end()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_report_is_valid() {
        let report = Report::new(FailurePolicy::FailFast);
        assert!(report.is_empty());
        assert_eq!(report.get("any"), None);
        assert!(report.messages("any").is_empty());
    }

    #[test]
    fn test_fail_fast_serializes_strings() {
        let mut report = Report::new(FailurePolicy::FailFast);
        report.push("username", "length must be between 3 and 20");
        report.push("password", "must not be null");

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "username": "length must be between 3 and 20",
                "password": "must not be null",
            })
        );
    }

    #[test]
    fn test_collect_all_serializes_lists() {
        let mut report = Report::new(FailurePolicy::CollectAll);
        report.push("password", "must not be blank");
        report.push("password", "length must be at least 8");

        assert_eq!(report.len(), 1);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"password": ["must not be blank", "length must be at least 8"]})
        );
    }

    #[test]
    fn test_display_lists_each_message() {
        let mut report = Report::new(FailurePolicy::CollectAll);
        report.push("b", "second");
        report.push("a", "first");

        assert_eq!(report.to_string(), "a: first\nb: second");
    }

    #[test]
    fn test_first_messages() {
        let mut report = Report::new(FailurePolicy::CollectAll);
        report.push("age", "must be greater than or equal to 18");
        report.push("age", "must be less than or equal to 150");

        let first = report.first_messages();
        assert_eq!(first["age"], "must be greater than or equal to 18");
    }
}
