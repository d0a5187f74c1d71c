use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar kind of an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Int,
    Float,
    Str,
    Bool,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Str => write!(f, "str"),
            Self::Bool => write!(f, "bool"),
        }
    }
}

/// A dynamically set attribute value.
///
/// Serialized untagged so the persisted record holds plain JSON scalars.
/// Variant order matters for deserialization: `3` is an `Int`, `3.0` a
/// `Float`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    /// The scalar kind of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int,
            Self::Float(_) => ScalarKind::Float,
            Self::Str(_) => ScalarKind::Str,
            Self::Bool(_) => ScalarKind::Bool,
        }
    }

    /// Convert a JSON value. Numbers keep their integer/float shape;
    /// arrays, objects and null are kept as their JSON text.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Str(s.clone()),
            other => Self::Str(other.to_string()),
        }
    }

    /// Display form used inside an instance's string representation.
    ///
    /// Strings are quoted with [`quoted_repr`], floats always carry a
    /// fractional part, bools print as `True`/`False`.
    pub fn repr(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Float(x) => float_repr(*x),
            Self::Str(s) => quoted_repr(s),
            Self::Bool(true) => "True".into(),
            Self::Bool(false) => "False".into(),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Shortest round-trip digits. Magnitudes from `1e16` up or below `1e-4`
/// use an exponent with an explicit sign and at least two digits
/// (`1e+20`, `1.5e-05`); other values always show a fractional part.
fn float_repr(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{x:e}");
        return match sci.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(exp) => {
                    let sign = if exp < 0 { '-' } else { '+' };
                    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
                }
                Err(_) => sci,
            },
            None => sci,
        };
    }
    if x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        x.to_string()
    }
}

/// Quote a string for display.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, control whitespace and the chosen quote
/// character are escaped.
pub fn quoted_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_of_each_variant() {
        assert_eq!(AttrValue::from(1_i64).kind(), ScalarKind::Int);
        assert_eq!(AttrValue::from(1.5).kind(), ScalarKind::Float);
        assert_eq!(AttrValue::from("x").kind(), ScalarKind::Str);
        assert_eq!(AttrValue::from(true).kind(), ScalarKind::Bool);
    }

    #[test]
    fn repr_of_scalars() {
        assert_eq!(AttrValue::Int(-7).repr(), "-7");
        assert_eq!(AttrValue::Float(2.5).repr(), "2.5");
        assert_eq!(AttrValue::Float(3.0).repr(), "3.0");
        assert_eq!(AttrValue::Float(1e20).repr(), "1e+20");
        assert_eq!(AttrValue::Bool(false).repr(), "False");
        assert_eq!(AttrValue::from("a b").repr(), "'a b'");
    }

    #[test]
    fn float_exponent_thresholds() {
        assert_eq!(AttrValue::Float(1e16).repr(), "1e+16");
        assert_eq!(AttrValue::Float(9999999999999998.0).repr(), "9999999999999998.0");
        assert_eq!(AttrValue::Float(1.234e100).repr(), "1.234e+100");
        assert_eq!(AttrValue::Float(0.0001).repr(), "0.0001");
        assert_eq!(AttrValue::Float(0.00001).repr(), "1e-05");
        assert_eq!(AttrValue::Float(-2.5e-7).repr(), "-2.5e-07");
        assert_eq!(AttrValue::Float(0.0).repr(), "0.0");
    }

    #[test]
    fn quoted_repr_picks_quote() {
        assert_eq!(quoted_repr("plain"), "'plain'");
        assert_eq!(quoted_repr("it's"), "\"it's\"");
        assert_eq!(quoted_repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(quoted_repr("back\\slash"), "'back\\\\slash'");
    }

    #[test]
    fn untagged_json_keeps_kinds() {
        let values = vec![
            AttrValue::Int(3),
            AttrValue::Float(3.0),
            AttrValue::Float(2.5),
            AttrValue::Str("3".into()),
            AttrValue::Bool(true),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[3,3.0,2.5,"3",true]"#);
        let parsed: Vec<AttrValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);
    }

    #[test]
    fn from_json_shapes() {
        use serde_json::json;
        assert_eq!(AttrValue::from_json(&json!(4)), AttrValue::Int(4));
        assert_eq!(AttrValue::from_json(&json!(4.0)), AttrValue::Float(4.0));
        assert_eq!(AttrValue::from_json(&json!("x")), AttrValue::from("x"));
        assert_eq!(AttrValue::from_json(&json!(false)), AttrValue::Bool(false));
        assert_eq!(AttrValue::from_json(&json!([1, 2])), AttrValue::from("[1,2]"));
        assert_eq!(AttrValue::from_json(&json!(null)), AttrValue::from("null"));
    }

    #[test]
    fn scalar_kind_display() {
        assert_eq!(ScalarKind::Int.to_string(), "int");
        assert_eq!(ScalarKind::Float.to_string(), "float");
    }
}
