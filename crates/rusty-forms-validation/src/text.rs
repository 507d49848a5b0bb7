//! Text checks
//!
//! Lengths are counted in Unicode scalar values, so `"héllo"` has length 5.

/// Number of Unicode scalar values in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// True when `s` is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Inclusive length check in characters.
pub fn length_within(s: &str, min: usize, max: usize) -> bool {
    let len = char_len(s);
    len >= min && len <= max
}

/// Checks the shape of an email address.
///
/// This is a structural check, not RFC 5322:
/// - exactly one `@` with a non-empty local part of at most 64 characters
/// - a domain of at most 255 characters containing a dot, no empty labels,
///   no leading or trailing hyphen or dot
/// - a top-level label of at least two characters
pub fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.len() > 255 {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '%'));
    if !local_ok || local.starts_with('.') || local.ends_with('.') {
        return false;
    }

    if !domain.contains('.')
        || domain.starts_with(['.', '-'])
        || domain.ends_with(['.', '-'])
        || domain.contains("..")
    {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    domain
        .rsplit('.')
        .next()
        .map(|tld| char_len(tld) >= 2)
        .unwrap_or(false)
}

/// Accepts `http://` and `https://` URLs with a dotted host or `localhost`.
pub fn is_url(s: &str) -> bool {
    let rest = match s.strip_prefix("https://").or_else(|| s.strip_prefix("http://")) {
        Some(rest) => rest,
        None => return false,
    };

    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");
    let host = host.rsplit('@').next().unwrap_or(host);
    let host = host.split(':').next().unwrap_or(host);

    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return false;
    }

    host == "localhost" || (host.contains('.') && !host.starts_with('.') && !host.ends_with('.'))
}

/// Exact membership in a fixed list of allowed values.
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|a| a.as_ref() == value)
}
