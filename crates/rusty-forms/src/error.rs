// File: src/error.rs
// Purpose: Declaration and lookup errors
//
// A record failing validation is not an error; see `Report`.

use thiserror::Error;

/// Mistakes in how a record type's rules were declared.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("record type `{record}` has no field named `{field}`")]
    UnknownField { record: String, field: String },

    #[error("field `{field}` on `{record}` was declared without any rules")]
    EmptyRules { record: String, field: String },

    #[error("rule `{rule}` on `{record}.{field}` has an empty message")]
    EmptyMessage {
        record: String,
        field: String,
        rule: String,
    },

    #[error("record type `{0}` is already registered")]
    DuplicateType(String),

    #[error("unknown constraint kind `{kind}` on `{record}.{field}`")]
    UnknownConstraint {
        record: String,
        field: String,
        kind: String,
    },

    #[error("constraint `{kind}` on `{record}.{field}`: {reason}")]
    InvalidParameter {
        record: String,
        field: String,
        kind: String,
        reason: String,
    },

    #[error("invalid pattern on `{record}.{field}`: {reason}")]
    InvalidPattern {
        record: String,
        field: String,
        reason: String,
    },
}

/// Errors raised while validating.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no rules registered for record type `{0}`")]
    UnregisteredType(String),
}
