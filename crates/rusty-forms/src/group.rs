// File: src/group.rs
// Purpose: Group tags that select which rules run in a validation call

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// Opaque label partitioning rules by validation context.
///
/// ```
/// use rusty_forms::Group;
///
/// const REGISTER: Group = Group::new("Register");
/// assert_eq!(REGISTER.name(), "Register");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(Cow<'static, str>);

impl Group {
    pub const fn new(name: &'static str) -> Self {
        Group(Cow::Borrowed(name))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Group(Cow::Owned(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Group {
    fn from(name: &'static str) -> Self {
        Group::new(name)
    }
}

impl From<String> for Group {
    fn from(name: String) -> Self {
        Group::named(name)
    }
}

/// Set of group tags. Used both for a rule's tags and for the active groups
/// of a validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSet(BTreeSet<Group>);

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: impl Into<Group>) -> bool {
        self.0.insert(group.into())
    }

    pub fn contains(&self, group: &Group) -> bool {
        self.0.contains(group)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn intersects(&self, other: &GroupSet) -> bool {
        // Iterate the smaller set
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().any(|g| large.0.contains(g))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.0.iter()
    }
}

impl<G: Into<Group>> FromIterator<G> for GroupSet {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        GroupSet(iter.into_iter().map(Into::into).collect())
    }
}

impl<G: Into<Group>, const N: usize> From<[G; N]> for GroupSet {
    fn from(groups: [G; N]) -> Self {
        groups.into_iter().collect()
    }
}

impl From<&[Group]> for GroupSet {
    fn from(groups: &[Group]) -> Self {
        groups.iter().cloned().collect()
    }
}

impl fmt::Display for GroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Group::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let rule: GroupSet = ["Register", "Admin"].into();
        let active: GroupSet = ["Admin"].into();
        let other: GroupSet = ["Update"].into();

        assert!(rule.intersects(&active));
        assert!(active.intersects(&rule));
        assert!(!rule.intersects(&other));
        assert!(!rule.intersects(&GroupSet::new()));
    }

    #[test]
    fn test_owned_and_static_names_compare_equal() {
        assert_eq!(Group::new("Update"), Group::named("Update".to_string()));
    }

    #[test]
    fn test_display() {
        let set: GroupSet = ["Update", "Register"].into();
        assert_eq!(set.to_string(), "{Register, Update}");
    }
}
