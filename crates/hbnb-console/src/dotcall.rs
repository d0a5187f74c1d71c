//! `Class.verb(args)` call syntax.
//!
//! `User.show("1234")` is the same command as `show User "1234"`. The
//! supported verbs are `all`, `count`, `show`, `destroy` and `update`.
//! `Class.update(id, {"k": v, ...})` sets several attributes in one
//! command.

use hbnb_types::AttrValue;
use serde_json::{Map, Value};

use crate::tokenizer::unquote;

/// Verbs reachable through the call syntax.
pub const DOT_VERBS: &[&str] = &["all", "count", "show", "destroy", "update"];

/// A recognized call.
#[derive(Clone, Debug, PartialEq)]
pub enum DotCall {
    /// Equivalent plain command line.
    Line(String),
    /// `Class.update(id, {...})`: every pair applied to one instance.
    UpdateMany {
        class: String,
        id: String,
        pairs: Vec<(String, AttrValue)>,
    },
}

/// Recognize `line` as a call. Returns `None` for anything else, which is
/// then dispatched unchanged.
pub fn rewrite(line: &str) -> Option<DotCall> {
    let line = line.trim();
    let (class, rest) = split_ident(line);
    if class.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix('.')?;
    let (verb, rest) = split_ident(rest);
    if !DOT_VERBS.contains(&verb) {
        return None;
    }
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    let args = split_args(inner);

    if verb == "update" && args.len() >= 2 && args[1].starts_with('{') {
        if let Ok(dict) = serde_json::from_str::<Map<String, Value>>(&args[1]) {
            let pairs = dict
                .iter()
                .map(|(k, v)| (k.clone(), AttrValue::from_json(v)))
                .collect();
            return Some(DotCall::UpdateMany {
                class: class.to_string(),
                id: unquote(&args[0]).to_string(),
                pairs,
            });
        }
    }

    let mut rewritten = format!("{verb} {class}");
    for arg in &args {
        rewritten.push(' ');
        rewritten.push_str(arg);
    }
    Some(DotCall::Line(rewritten))
}

/// Leading identifier (`[A-Za-z0-9_]*`) and the remainder.
pub(crate) fn split_ident(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Split on commas that are outside quotes and braces; trim each piece.
fn split_args(inner: &str) -> Vec<String> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut escaped = false;

    for ch in inner.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (Some(_), '\\') => {
                current.push(ch);
                escaped = true;
            }
            (Some(q), c) if c == q => {
                current.push(c);
                quote = None;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                current.push(ch);
                quote = Some(ch);
            }
            (None, '{' | '[') => {
                current.push(ch);
                depth += 1;
            }
            (None, '}' | ']') => {
                current.push(ch);
                depth = depth.saturating_sub(1);
            }
            (None, ',') if depth == 0 => {
                args.push(current.trim().to_string());
                current.clear();
            }
            (None, c) => current.push(c),
        }
    }
    args.push(current.trim().to_string());
    args
}
