//! `key=value` parameter coercion for `create`.
//!
//! Precedence, first match wins:
//!
//! 1. `"..."` -> string, quotes stripped, `_` replaced by a space
//! 2. contains `.` -> float
//! 3. otherwise -> integer
//!
//! Numbers may group digits with single underscores (`1_000`). A parameter
//! that fails its parse is skipped; it never fails the command.

use std::borrow::Cow;

use hbnb_types::AttrValue;
use tracing::debug;

/// Coerce one `key=value` token.
///
/// Returns `None` when the token is skipped: it does not contain exactly
/// one `=`, the key is empty, or the value does not parse as its shape
/// implies.
pub fn coerce(token: &str) -> Option<(String, AttrValue)> {
    if token.matches('=').count() != 1 {
        return None;
    }
    let (key, raw) = token.split_once('=')?;
    if key.is_empty() {
        return None;
    }

    let value = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        AttrValue::Str(raw[1..raw.len() - 1].replace('_', " "))
    } else if raw.contains('.') {
        AttrValue::Float(parse_float(&strip_digit_separators(raw)?)?)
    } else {
        AttrValue::Int(strip_digit_separators(raw)?.parse::<i64>().ok()?)
    };
    Some((key.to_string(), value))
}

/// Coerce every token, dropping skipped ones. A later duplicate key
/// replaces the earlier value but keeps its position.
pub fn coerce_all<S: AsRef<str>>(tokens: &[S]) -> Vec<(String, AttrValue)> {
    let mut params: Vec<(String, AttrValue)> = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        match coerce(token) {
            Some((key, value)) => match params.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => params.push((key, value)),
            },
            None => debug!(token, "skipping parameter"),
        }
    }
    params
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Remove underscores that sit between two digits. Any other underscore
/// makes the number invalid.
pub(crate) fn strip_digit_separators(raw: &str) -> Option<Cow<'_, str>> {
    if !raw.contains('_') {
        return Some(Cow::Borrowed(raw));
    }
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if !between_digits {
                return None;
            }
        } else {
            out.push(c);
        }
    }
    Some(Cow::Owned(out))
}
