//! Scalar literal parsing for `update` values.
//!
//! Attempts, in order: integer, float, boolean, quoted string. A token that
//! matches none of them is kept verbatim as a string. Nothing is evaluated:
//! lists, mappings and expressions all stay raw text.
//!
//! Integers are decimal literals: a nonzero integer may not start with `0`
//! (`0123` stays a string), digit groups may be separated by single
//! underscores, and values outside `i64` stay strings. A float needs a `.`
//! or an exponent.

use hbnb_types::AttrValue;

use crate::coerce::strip_digit_separators;
use crate::tokenizer::strip_quotes;

/// Interpret `token` as a scalar literal, falling back to the raw text.
pub fn parse_literal(token: &str) -> AttrValue {
    if let Some(number) = parse_number(token) {
        return number;
    }
    match token {
        "True" => return AttrValue::Bool(true),
        "False" => return AttrValue::Bool(false),
        _ => {}
    }
    if let Some(inner) = strip_quotes(token) {
        return AttrValue::Str(inner.to_string());
    }
    AttrValue::Str(token.to_string())
}

fn parse_number(token: &str) -> Option<AttrValue> {
    let text = strip_digit_separators(token)?;
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(&*text);

    if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
        let leading_zero = unsigned.len() > 1
            && unsigned.starts_with('0')
            && unsigned.bytes().any(|b| b != b'0');
        if leading_zero {
            return None;
        }
        return text.parse::<i64>().ok().map(AttrValue::Int);
    }

    if text.contains(['.', 'e', 'E']) && text.bytes().any(|b| b.is_ascii_digit()) {
        return text
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .map(AttrValue::Float);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_literal("100"), AttrValue::Int(100));
        assert_eq!(parse_literal("-7"), AttrValue::Int(-7));
        assert_eq!(parse_literal("+7"), AttrValue::Int(7));
    }

    #[test]
    fn floats() {
        assert_eq!(parse_literal("2.5"), AttrValue::Float(2.5));
        assert_eq!(parse_literal("1e3"), AttrValue::Float(1000.0));
        assert_eq!(parse_literal(".5"), AttrValue::Float(0.5));
    }

    #[test]
    fn leading_zeros_keep_the_raw_text() {
        assert_eq!(parse_literal("0123"), AttrValue::from("0123"));
        assert_eq!(parse_literal("-007"), AttrValue::from("-007"));
        assert_eq!(parse_literal("0612345678"), AttrValue::from("0612345678"));
        assert_eq!(parse_literal("0_1"), AttrValue::from("0_1"));
    }

    #[test]
    fn zero_spellings_are_integers() {
        assert_eq!(parse_literal("0"), AttrValue::Int(0));
        assert_eq!(parse_literal("00"), AttrValue::Int(0));
        assert_eq!(parse_literal("-0"), AttrValue::Int(0));
    }

    #[test]
    fn leading_zero_floats_are_floats() {
        assert_eq!(parse_literal("01.5"), AttrValue::Float(1.5));
        assert_eq!(parse_literal("0.25"), AttrValue::Float(0.25));
    }

    #[test]
    fn digit_groups() {
        assert_eq!(parse_literal("1_000"), AttrValue::Int(1000));
        assert_eq!(parse_literal("2_5.5"), AttrValue::Float(25.5));
        assert_eq!(parse_literal("1__0"), AttrValue::from("1__0"));
    }

    #[test]
    fn integers_beyond_i64_stay_strings() {
        assert_eq!(
            parse_literal("99999999999999999999"),
            AttrValue::from("99999999999999999999")
        );
    }

    #[test]
    fn non_finite_spellings_stay_strings() {
        assert_eq!(parse_literal("inf"), AttrValue::from("inf"));
        assert_eq!(parse_literal("NaN"), AttrValue::from("NaN"));
        assert_eq!(parse_literal("1e999"), AttrValue::from("1e999"));
    }

    #[test]
    fn booleans_are_capitalized_words() {
        assert_eq!(parse_literal("True"), AttrValue::Bool(true));
        assert_eq!(parse_literal("False"), AttrValue::Bool(false));
        assert_eq!(parse_literal("true"), AttrValue::from("true"));
    }

    #[test]
    fn quoted_strings_lose_their_quotes() {
        assert_eq!(parse_literal(r#""John""#), AttrValue::from("John"));
        assert_eq!(parse_literal("'John Smith'"), AttrValue::from("John Smith"));
        assert_eq!(parse_literal(r#""100""#), AttrValue::from("100"));
        assert_eq!(parse_literal(r#""""#), AttrValue::from(""));
    }

    #[test]
    fn quoted_strings_keep_underscores() {
        assert_eq!(parse_literal(r#""a_b""#), AttrValue::from("a_b"));
    }

    #[test]
    fn everything_else_is_raw_text() {
        assert_eq!(parse_literal("John"), AttrValue::from("John"));
        assert_eq!(parse_literal("[1, 2]"), AttrValue::from("[1, 2]"));
        assert_eq!(parse_literal("None"), AttrValue::from("None"));
        assert_eq!(parse_literal(r#""unbalanced'"#), AttrValue::from(r#""unbalanced'"#));
    }
}
