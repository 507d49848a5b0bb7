//! Password strength tiers

use core::fmt;

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// 6+ characters
    Basic,
    /// 8+ characters with uppercase, lowercase and a digit
    Medium,
    /// 8+ characters with uppercase, lowercase, a digit and a special character
    Strong,
}

impl Strength {
    /// Parse a tier name. Unknown names return `None`.
    ///
    /// ```
    /// use rusty_forms_validation::password::Strength;
    /// assert_eq!(Strength::parse("strong"), Some(Strength::Strong));
    /// assert_eq!(Strength::parse("extreme"), None);
    /// ```
    pub fn parse(tier: &str) -> Option<Self> {
        match tier {
            "basic" => Some(Strength::Basic),
            "medium" => Some(Strength::Medium),
            "strong" => Some(Strength::Strong),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Basic => "basic",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// Checks `password` against a strength tier.
pub fn meets_strength(password: &str, tier: Strength) -> bool {
    let len = password.chars().count();
    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL.contains(c));

    match tier {
        Strength::Basic => len >= 6,
        Strength::Medium => len >= 8 && has_upper && has_lower && has_digit,
        Strength::Strong => len >= 8 && has_upper && has_lower && has_digit && has_special,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert!(meets_strength("abc123", Strength::Basic));
        assert!(!meets_strength("abc12", Strength::Basic));
    }

    #[test]
    fn test_medium() {
        assert!(meets_strength("Abcd1234", Strength::Medium));
        assert!(!meets_strength("Abcd123", Strength::Medium));
        assert!(!meets_strength("abcd1234", Strength::Medium));
        assert!(!meets_strength("ABCD1234", Strength::Medium));
        assert!(!meets_strength("Abcdabcd", Strength::Medium));
    }

    #[test]
    fn test_strong() {
        assert!(meets_strength("Abcd123!", Strength::Strong));
        assert!(meets_strength("P@ssw0rd", Strength::Strong));
        assert!(!meets_strength("Abcd1234", Strength::Strong));
        assert!(!meets_strength("Abc12!@", Strength::Strong));
    }

    #[test]
    fn test_parse_round_trips_names() {
        for tier in [Strength::Basic, Strength::Medium, Strength::Strong] {
            assert_eq!(Strength::parse(tier.as_str()), Some(tier));
        }
    }
}
