// File: src/constraints.rs
// Purpose: Built-in constraint rules
//
// Every constraint except `not_null`, `not_empty` and `not_blank` accepts null,
// so optional fields are only checked when a value is present. A value of the
// wrong kind (e.g. a number under a length rule) is a violation.

use crate::rule::Rule;
use crate::value::FieldValue;
use regex::Regex;
use rusty_forms_validation::{self as checks, Strength};

fn null_or(value: &FieldValue, check: impl FnOnce(&FieldValue) -> bool) -> bool {
    value.is_null() || check(value)
}

fn text_or_null(value: &FieldValue, check: impl FnOnce(&str) -> bool) -> bool {
    null_or(value, |v| v.as_str().map(check).unwrap_or(false))
}

fn number_or_null(value: &FieldValue, check: impl FnOnce(&FieldValue) -> bool) -> bool {
    null_or(value, |v| {
        matches!(v, FieldValue::Int(_) | FieldValue::Float(_)) && check(v)
    })
}

/// `value >= bound`, exact for integers.
fn ge(value: &FieldValue, bound: i64) -> bool {
    match value {
        FieldValue::Int(n) => *n >= bound,
        FieldValue::Float(n) => checks::at_least(*n, bound as f64),
        _ => false,
    }
}

/// `value <= bound`, exact for integers.
fn le(value: &FieldValue, bound: i64) -> bool {
    match value {
        FieldValue::Int(n) => *n <= bound,
        FieldValue::Float(n) => checks::at_most(*n, bound as f64),
        _ => false,
    }
}

pub fn not_null() -> Rule {
    Rule::new("not_null", |v: &FieldValue| !v.is_null(), "must not be null")
}

/// Text, list or object with at least one element.
pub fn not_empty() -> Rule {
    Rule::new(
        "not_empty",
        |v: &FieldValue| v.len().map(|n| n > 0).unwrap_or(false),
        "must not be empty",
    )
}

/// Text with at least one non-whitespace character.
pub fn not_blank() -> Rule {
    Rule::new(
        "not_blank",
        |v: &FieldValue| v.as_str().map(|s| !checks::is_blank(s)).unwrap_or(false),
        "must not be blank",
    )
}

/// Text length in characters, inclusive.
///
/// `min > max` yields a rule no value passes. Config declarations reject it.
pub fn length(min: usize, max: usize) -> Rule {
    Rule::new(
        "length",
        move |v: &FieldValue| text_or_null(v, |s| checks::length_within(s, min, max)),
        "length must be between {min} and {max}",
    )
    .with_param("min", min)
    .with_param("max", max)
}

pub fn min_length(min: usize) -> Rule {
    Rule::new(
        "min_length",
        move |v: &FieldValue| text_or_null(v, |s| checks::char_len(s) >= min),
        "length must be at least {min}",
    )
    .with_param("min", min)
}

pub fn max_length(max: usize) -> Rule {
    Rule::new(
        "max_length",
        move |v: &FieldValue| text_or_null(v, |s| checks::char_len(s) <= max),
        "length must be at most {max}",
    )
    .with_param("max", max)
}

/// Size of a text (characters) or a list (items), inclusive.
///
/// `min > max` yields a rule no value passes. Config declarations reject it.
pub fn size(min: usize, max: usize) -> Rule {
    Rule::new(
        "size",
        move |v: &FieldValue| {
            null_or(v, |v| match v {
                FieldValue::List(items) => checks::count_within(items.as_slice(), min, max),
                FieldValue::Text(s) => checks::length_within(s, min, max),
                _ => false,
            })
        },
        "size must be between {min} and {max}",
    )
    .with_param("min", min)
    .with_param("max", max)
}

pub fn min(bound: i64) -> Rule {
    Rule::new(
        "min",
        move |v: &FieldValue| number_or_null(v, |v| ge(v, bound)),
        "must be greater than or equal to {value}",
    )
    .with_param("value", bound)
}

pub fn max(bound: i64) -> Rule {
    Rule::new(
        "max",
        move |v: &FieldValue| number_or_null(v, |v| le(v, bound)),
        "must be less than or equal to {value}",
    )
    .with_param("value", bound)
}

/// Inclusive numeric range. `min > max` rejects every number.
pub fn range(min: i64, max: i64) -> Rule {
    Rule::new(
        "range",
        move |v: &FieldValue| number_or_null(v, |v| ge(v, min) && le(v, max)),
        "must be between {min} and {max}",
    )
    .with_param("min", min)
    .with_param("max", max)
}

pub fn positive() -> Rule {
    Rule::new(
        "positive",
        |v: &FieldValue| {
            number_or_null(v, |v| v.as_f64().map(checks::is_positive).unwrap_or(false))
        },
        "must be greater than 0",
    )
}

pub fn positive_or_zero() -> Rule {
    Rule::new(
        "positive_or_zero",
        |v: &FieldValue| {
            number_or_null(v, |v| v.as_f64().map(checks::is_positive_or_zero).unwrap_or(false))
        },
        "must be greater than or equal to 0",
    )
}

pub fn negative() -> Rule {
    Rule::new(
        "negative",
        |v: &FieldValue| {
            number_or_null(v, |v| v.as_f64().map(checks::is_negative).unwrap_or(false))
        },
        "must be less than 0",
    )
}

pub fn email() -> Rule {
    Rule::new(
        "email",
        |v: &FieldValue| text_or_null(v, checks::is_email),
        "must be a well-formed email address",
    )
}

pub fn url() -> Rule {
    Rule::new(
        "url",
        |v: &FieldValue| text_or_null(v, checks::is_url),
        "must be a valid URL",
    )
}

/// Whole-value regex match. The pattern is compiled here, once.
///
/// `regexp` must compile on its own before it is anchored, so an unbalanced
/// group like `a)|(b` cannot close the anchor group early.
///
/// ```
/// use rusty_forms::{constraints, FieldValue};
///
/// let phone = constraints::pattern(r"1[3-9]\d{9}").unwrap();
/// assert!(phone.check(&FieldValue::from("13812345678")));
/// assert!(!phone.check(&FieldValue::from("x13812345678")));
/// ```
pub fn pattern(regexp: &str) -> Result<Rule, regex::Error> {
    Regex::new(regexp)?;
    let anchored = Regex::new(&format!("^(?:{})$", regexp))?;

    Ok(Rule::new(
        "pattern",
        move |v: &FieldValue| text_or_null(v, |s| anchored.is_match(s)),
        "must match \"{regexp}\"",
    )
    .with_param("regexp", regexp))
}

pub fn one_of<I, S>(allowed: I) -> Rule
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    let listed = allowed.join(", ");

    Rule::new(
        "one_of",
        move |v: &FieldValue| text_or_null(v, |s| checks::is_one_of(s, allowed.as_slice())),
        "must be one of [{values}]",
    )
    .with_param("values", listed)
}

pub fn assert_true() -> Rule {
    Rule::new(
        "assert_true",
        |v: &FieldValue| null_or(v, |v| v.as_bool() == Some(true)),
        "must be true",
    )
}

pub fn assert_false() -> Rule {
    Rule::new(
        "assert_false",
        |v: &FieldValue| null_or(v, |v| v.as_bool() == Some(false)),
        "must be false",
    )
}

pub fn unique_items() -> Rule {
    Rule::new(
        "unique_items",
        |v: &FieldValue| {
            null_or(v, |v| {
                v.as_list()
                    .map(checks::all_unique::<FieldValue>)
                    .unwrap_or(false)
            })
        },
        "must not contain duplicates",
    )
}

pub fn password(tier: Strength) -> Rule {
    Rule::new(
        "password",
        move |v: &FieldValue| text_or_null(v, |s| checks::meets_strength(s, tier)),
        "password does not meet the {tier} strength requirements",
    )
    .with_param("tier", tier)
}
