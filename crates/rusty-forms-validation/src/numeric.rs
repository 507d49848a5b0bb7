//! Numeric bound checks

/// `value >= min`
pub fn at_least<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// `value <= max`
pub fn at_most<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// Inclusive range check. An inverted range (`min > max`) never matches.
pub fn within<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

pub fn is_positive_or_zero(value: f64) -> bool {
    value >= 0.0
}

pub fn is_negative(value: f64) -> bool {
    value < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound() {
        assert!(at_least(10, 5));
        assert!(at_least(5, 5));
        assert!(!at_least(3, 5));

        assert!(at_least(18.5, 18.0));
        assert!(!at_least(17.9, 18.0));
    }

    #[test]
    fn test_upper_bound() {
        assert!(at_most(10, 10));
        assert!(!at_most(15, 10));
        assert!(!at_most(100.1, 100.0));
    }

    #[test]
    fn test_within() {
        assert!(within(1, 1, 10));
        assert!(within(10, 1, 10));
        assert!(!within(0, 1, 10));
        assert!(!within(11, 1, 10));
        assert!(!within(5, 10, 1));
    }

    #[test]
    fn test_sign() {
        assert!(is_positive(0.5));
        assert!(!is_positive(0.0));
        assert!(is_positive_or_zero(0.0));
        assert!(is_negative(-1.0));
        assert!(!is_negative(0.0));
    }
}
