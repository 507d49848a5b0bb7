// File: src/pipeline.rs
// Purpose: Parse a JSON payload into a record and validate it in one step

use crate::engine::{Engine, Outcome};
use crate::error::EngineError;
use crate::group::GroupSet;
use crate::record::JsonRecord;
use crate::report::Report;

/// Report key for problems with the payload as a whole.
pub const FORM_KEY: &str = "_form";

/// Validates a raw JSON body as a record of `type_name`.
///
/// A body that is not valid JSON, or not an object, never reaches the rules: it
/// comes back as an invalid outcome with a single message under [`FORM_KEY`],
/// shaped by the engine's [`FailurePolicy`](crate::FailurePolicy) like any other report.
/// An unregistered `type_name` is an error even for a malformed body.
///
/// ```
/// use rusty_forms::{constraints::*, pipeline, Engine, GroupSet, RecordType, Rules};
///
/// let mut engine = Engine::new();
/// engine
///     .register(
///         RecordType::new("Login", ["username"]),
///         Rules::new().rule("username", not_blank()),
///     )
///     .unwrap();
///
/// let body = br#"{"username": " "}"#;
/// let outcome = pipeline::validate_json(&engine, "Login", body, &GroupSet::new()).unwrap();
/// assert_eq!(outcome.report().unwrap().get("username"), Some("must not be blank"));
/// ```
pub fn validate_json(
    engine: &Engine,
    type_name: &str,
    body: &[u8],
    active: &GroupSet,
) -> Result<Outcome, EngineError> {
    if !engine.is_registered(type_name) {
        return Err(EngineError::UnregisteredType(type_name.to_string()));
    }

    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Rejected {} payload: {}", type_name, e);
            return Ok(Outcome::Invalid(Report::single(
                engine.policy(),
                FORM_KEY,
                format!("Failed to parse request body: {}", e),
            )));
        }
    };

    match JsonRecord::from_value(type_name, value) {
        Some(record) => engine.check(&record, active),
        None => Ok(Outcome::Invalid(Report::single(
            engine.policy(),
            FORM_KEY,
            "Request body must be a JSON object",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::*;
    use crate::record::RecordType;
    use crate::registry::Rules;
    use crate::report::FailurePolicy;
    use serde_json::json;

    fn engine() -> Engine {
        let mut engine = Engine::new();
        engine
            .register(
                RecordType::new("Login", ["username", "password"]),
                Rules::new()
                    .field("username", [not_null(), length(3, 20)])
                    .field("password", [not_null(), min_length(8)]),
            )
            .unwrap();
        engine
    }

    #[test]
    fn test_valid_body() {
        let outcome = validate_json(
            &engine(),
            "Login",
            br#"{"username": "alice", "password": "longenough"}"#,
            &GroupSet::new(),
        )
        .unwrap();

        assert!(outcome.is_valid());
    }

    #[test]
    fn test_malformed_body() {
        let outcome = validate_json(&engine(), "Login", b"{not json", &GroupSet::new()).unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.len(), 1);
        assert!(report.get(FORM_KEY).unwrap().starts_with("Failed to parse request body"));
    }

    #[test]
    fn test_non_object_body() {
        let outcome = validate_json(&engine(), "Login", b"[1, 2]", &GroupSet::new()).unwrap();
        assert_eq!(
            outcome.report().unwrap().get(FORM_KEY),
            Some("Request body must be a JSON object")
        );
    }

    #[test]
    fn test_form_error_follows_collect_all_shape() {
        let mut engine = Engine::with_policy(FailurePolicy::CollectAll);
        engine
            .register(
                RecordType::new("Login", ["username"]),
                Rules::new().rule("username", not_null()),
            )
            .unwrap();

        let outcome = validate_json(&engine, "Login", b"[1]", &GroupSet::new()).unwrap();
        let report = outcome.report().unwrap();
        assert_eq!(report.policy(), FailurePolicy::CollectAll);
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({"_form": ["Request body must be a JSON object"]})
        );

        let outcome = validate_json(&engine, "Login", b"{", &GroupSet::new()).unwrap();
        let value = serde_json::to_value(outcome.report().unwrap()).unwrap();
        assert!(value[FORM_KEY].is_array());
    }

    #[test]
    fn test_nested_object_is_not_null() {
        let outcome = validate_json(
            &engine(),
            "Login",
            br#"{"username": {"x": 1}, "password": "longenough"}"#,
            &GroupSet::new(),
        )
        .unwrap();

        assert_eq!(
            outcome.report().unwrap().get("username"),
            Some("length must be between 3 and 20")
        );
    }

    #[test]
    fn test_unregistered_type() {
        assert_eq!(
            validate_json(&engine(), "Signup", b"{}", &GroupSet::new()),
            Err(EngineError::UnregisteredType("Signup".to_string()))
        );
    }
}
