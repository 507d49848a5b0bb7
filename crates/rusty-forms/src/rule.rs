// File: src/rule.rs
// Purpose: Constraint rules (predicate + message + group tags)

use crate::group::{Group, GroupSet};
use crate::value::FieldValue;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Pure check over a field value. Must be deterministic and must not block.
pub type Predicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// A single constraint on one field.
///
/// Built-in rules come from [`constraints`](crate::constraints); custom rules
/// use [`Rule::new`] and register exactly the same way.
///
/// ```
/// use rusty_forms::{FieldValue, Rule};
///
/// let even = Rule::new(
///     "even",
///     |v: &FieldValue| matches!(v, FieldValue::Int(n) if n % 2 == 0),
///     "must be even",
/// )
/// .in_groups(["Checkout"]);
///
/// assert!(even.check(&FieldValue::Int(4)));
/// assert_eq!(even.message(), "must be even");
/// ```
#[derive(Clone)]
pub struct Rule {
    name: Cow<'static, str>,
    predicate: Predicate,
    template: String,
    params: Vec<(&'static str, String)>,
    message: String,
    groups: GroupSet,
}

impl Rule {
    pub fn new<F>(
        name: impl Into<Cow<'static, str>>,
        predicate: F,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        let template = message.into();
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            message: template.clone(),
            template,
            params: Vec::new(),
            groups: GroupSet::new(),
        }
    }

    /// Adds a `{key}` placeholder value and re-renders the message.
    pub fn with_param(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self.message = self.render();
        self
    }

    /// Replaces the message template. Existing parameters still apply.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self.message = self.render();
        self
    }

    /// Tags the rule. A tagged rule only runs when one of its groups is active.
    pub fn in_groups<I, G>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<Group>,
    {
        for group in groups {
            self.groups.insert(group);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message with every placeholder filled in.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn groups(&self) -> &GroupSet {
        &self.groups
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Untagged rules always apply; tagged rules need an active group in common.
    pub fn applies_to(&self, active: &GroupSet) -> bool {
        self.groups.is_empty() || self.groups.intersects(active)
    }

    pub fn check(&self, value: &FieldValue) -> bool {
        (self.predicate)(value)
    }

    fn render(&self) -> String {
        self.params
            .iter()
            .fold(self.template.clone(), |message, (key, value)| {
                message.replace(&format!("{{{}}}", key), value)
            })
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(result: bool) -> Rule {
        Rule::new("always", move |_: &FieldValue| result, "failed")
    }

    #[test]
    fn test_params_render_into_message() {
        let rule = always(false)
            .with_message("between {min} and {max}")
            .with_param("min", 3)
            .with_param("max", 20);

        assert_eq!(rule.message(), "between 3 and 20");
        assert_eq!(rule.param("min"), Some("3"));
    }

    #[test]
    fn test_message_override_keeps_params() {
        let rule = always(false)
            .with_param("min", 8)
            .with_message("at least {min} characters, please");

        assert_eq!(rule.message(), "at least 8 characters, please");
    }

    #[test]
    fn test_param_replaced_not_duplicated() {
        let rule = always(false)
            .with_message("{n}")
            .with_param("n", 1)
            .with_param("n", 2);

        assert_eq!(rule.message(), "2");
    }

    #[test]
    fn test_untagged_rule_applies_everywhere() {
        let rule = always(true);
        assert!(rule.applies_to(&GroupSet::new()));
        assert!(rule.applies_to(&["Update"].into()));
    }

    #[test]
    fn test_tagged_rule_needs_intersection() {
        let rule = always(true).in_groups(["Register"]);
        assert!(!rule.applies_to(&GroupSet::new()));
        assert!(!rule.applies_to(&["Update"].into()));
        assert!(rule.applies_to(&["Register", "Update"].into()));
    }
}
