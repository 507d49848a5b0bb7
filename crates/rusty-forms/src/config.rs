// File: src/config.rs
// Purpose: Rule declarations and engine settings loaded from TOML

use crate::constraints;
use crate::engine::Engine;
use crate::error::DeclarationError;
use crate::record::RecordType;
use crate::registry::Rules;
use crate::report::FailurePolicy;
use crate::rule::Rule;
use anyhow::{Context, Result};
use rusty_forms_validation::Strength;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub records: Vec<RecordConfig>,
}

/// Engine settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// "fail_fast" (default) or "collect_all"
    #[serde(default)]
    pub policy: FailurePolicy,
}

/// One record type and its rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    pub name: String,

    pub fields: Vec<String>,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// One rule entry. Which parameters are required depends on `kind`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    pub field: String,

    pub kind: String,

    #[serde(default)]
    pub min: Option<i64>,

    #[serde(default)]
    pub max: Option<i64>,

    /// Bound for `min` and `max`
    #[serde(default)]
    pub value: Option<i64>,

    #[serde(default)]
    pub regexp: Option<String>,

    /// Allowed values for `one_of`
    #[serde(default)]
    pub values: Vec<String>,

    /// Tier for `password`: basic, medium or strong
    #[serde(default)]
    pub tier: Option<String>,

    /// Overrides the default message. `{param}` placeholders still apply.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub groups: Vec<String>,
}

impl RuleConfig {
    /// Turns the entry into a rule from the built-in catalogue.
    pub fn to_rule(&self, record: &str) -> std::result::Result<Rule, DeclarationError> {
        let rule = match self.kind.as_str() {
            "not_null" => constraints::not_null(),
            "not_empty" => constraints::not_empty(),
            "not_blank" => constraints::not_blank(),
            "length" => {
                let (min, max) = self.size_bounds(record)?;
                constraints::length(min, max)
            }
            "min_length" => constraints::min_length(self.size("min", self.min, record)?),
            "max_length" => constraints::max_length(self.size("max", self.max, record)?),
            "size" => {
                let (min, max) = self.size_bounds(record)?;
                constraints::size(min, max)
            }
            "min" => constraints::min(self.require("value", self.value, record)?),
            "max" => constraints::max(self.require("value", self.value, record)?),
            "range" => {
                let min = self.require("min", self.min, record)?;
                let max = self.require("max", self.max, record)?;
                self.ordered(min, max, record)?;
                constraints::range(min, max)
            }
            "positive" => constraints::positive(),
            "positive_or_zero" => constraints::positive_or_zero(),
            "negative" => constraints::negative(),
            "email" => constraints::email(),
            "url" => constraints::url(),
            "pattern" => {
                let regexp = self.require("regexp", self.regexp.as_deref(), record)?;
                constraints::pattern(regexp).map_err(|e| DeclarationError::InvalidPattern {
                    record: record.to_string(),
                    field: self.field.clone(),
                    reason: e.to_string(),
                })?
            }
            "one_of" => {
                if self.values.is_empty() {
                    return Err(self.invalid(record, "`values` must not be empty"));
                }
                constraints::one_of(self.values.iter().cloned())
            }
            "assert_true" => constraints::assert_true(),
            "assert_false" => constraints::assert_false(),
            "unique_items" => constraints::unique_items(),
            "password" => {
                let tier = self.require("tier", self.tier.as_deref(), record)?;
                let tier = Strength::parse(tier).ok_or_else(|| {
                    self.invalid(record, &format!("unknown password tier `{}`", tier))
                })?;
                constraints::password(tier)
            }
            other => {
                return Err(DeclarationError::UnknownConstraint {
                    record: record.to_string(),
                    field: self.field.clone(),
                    kind: other.to_string(),
                })
            }
        };

        let rule = match &self.message {
            Some(message) => rule.with_message(message.clone()),
            None => rule,
        };

        Ok(rule.in_groups(self.groups.iter().cloned()))
    }

    fn require<T>(
        &self,
        name: &str,
        value: Option<T>,
        record: &str,
    ) -> std::result::Result<T, DeclarationError> {
        value.ok_or_else(|| self.invalid(record, &format!("missing `{}`", name)))
    }

    fn size(
        &self,
        name: &str,
        value: Option<i64>,
        record: &str,
    ) -> std::result::Result<usize, DeclarationError> {
        let value = self.require(name, value, record)?;
        usize::try_from(value)
            .map_err(|_| self.invalid(record, &format!("`{}` must not be negative", name)))
    }

    fn size_bounds(&self, record: &str) -> std::result::Result<(usize, usize), DeclarationError> {
        let min = self.size("min", self.min, record)?;
        let max = self.size("max", self.max, record)?;
        self.ordered(min, max, record)?;
        Ok((min, max))
    }

    fn ordered<T: PartialOrd>(
        &self,
        min: T,
        max: T,
        record: &str,
    ) -> std::result::Result<(), DeclarationError> {
        if min > max {
            return Err(self.invalid(record, "`min` must not exceed `max`"));
        }
        Ok(())
    }

    fn invalid(&self, record: &str, reason: &str) -> DeclarationError {
        DeclarationError::InvalidParameter {
            record: record.to_string(),
            field: self.field.clone(),
            kind: self.kind.clone(),
            reason: reason.to_string(),
        }
    }
}

impl RecordConfig {
    pub fn record_type(&self) -> RecordType {
        RecordType::new(self.name.clone(), self.fields.iter().cloned())
    }

    pub fn rules(&self) -> std::result::Result<Rules, DeclarationError> {
        self.rules.iter().try_fold(Rules::new(), |rules, entry| {
            Ok(rules.rule(entry.field.clone(), entry.to_rule(&self.name)?))
        })
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing or empty file yields the default (empty) configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Validation config {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read validation config: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse validation config: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            tracing::warn!("Validation config is empty, using defaults");
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}

impl Engine {
    /// Builds an engine with every record type declared in `config`.
    pub fn from_config(config: &Config) -> std::result::Result<Self, DeclarationError> {
        let mut engine = Engine::with_policy(config.engine.policy);
        for record in &config.records {
            engine.register(record.record_type(), record.rules()?)?;
        }
        Ok(engine)
    }
}
