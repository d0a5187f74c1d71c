//! Shell-style argument splitting.
//!
//! Whitespace outside quotes separates tokens. Quoted segments keep their
//! quote characters so later stages can tell `"100"` from `100`:
//!
//! ```
//! use hbnb_console::tokenizer::tokenize;
//!
//! let tokens = tokenize(r#"Place name="My_house" rooms=4"#).unwrap();
//! assert_eq!(tokens, vec!["Place", r#"name="My_house""#, "rooms=4"]);
//! ```

use crate::error::TokenizeError;

/// Split `line` into tokens.
///
/// - Outside quotes, `\c` yields `c`; a trailing lone `\` is an error.
/// - Inside `"..."`, `\"` and `\\` yield `"` and `\`; other backslashes are
///   kept.
/// - Inside `'...'` every character is literal.
/// - An unterminated quote is an error.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            '\\' => {
                let escaped = chars.next().ok_or(TokenizeError::NoEscapedCharacter)?;
                current.push(escaped);
                in_token = true;
            }
            '"' => {
                in_token = true;
                current.push('"');
                loop {
                    match chars.next() {
                        None => return Err(TokenizeError::NoClosingQuotation),
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            None => return Err(TokenizeError::NoClosingQuotation),
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                        },
                        Some(c) => current.push(c),
                    }
                }
                current.push('"');
            }
            '\'' => {
                in_token = true;
                current.push('\'');
                loop {
                    match chars.next() {
                        None => return Err(TokenizeError::NoClosingQuotation),
                        Some('\'') => break,
                        Some(c) => current.push(c),
                    }
                }
                current.push('\'');
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// The text between matching surrounding quotes (`"..."` or `'...'`), if
/// the token is quoted as a whole.
pub fn strip_quotes(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
    if first == last && (first == b'"' || first == b'\'') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

/// `token` without surrounding quotes, or unchanged if it is not quoted.
pub fn unquote(token: &str) -> &str {
    strip_quotes(token).unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn toks(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(toks("  show   User\t1234 "), vec!["show", "User", "1234"]);
        assert!(toks("").is_empty());
        assert!(toks("   ").is_empty());
    }

    #[test]
    fn double_quotes_group_and_are_kept() {
        assert_eq!(toks(r#"name="My house" x"#), vec![r#"name="My house""#, "x"]);
        assert_eq!(toks(r#""John Smith""#), vec![r#""John Smith""#]);
    }

    #[test]
    fn single_quotes_group_and_are_kept() {
        assert_eq!(toks("a 'b c' d"), vec!["a", "'b c'", "d"]);
        assert_eq!(toks(r"'no \escapes'"), vec![r"'no \escapes'"]);
    }

    #[test]
    fn empty_quotes_are_a_token() {
        assert_eq!(toks(r#"a "" b"#), vec!["a", r#""""#, "b"]);
    }

    #[test]
    fn backslash_outside_quotes_escapes_next_char() {
        assert_eq!(toks(r"a\ b c"), vec!["a b", "c"]);
        assert_eq!(toks(r#"\"x"#), vec![r#""x"#]);
    }

    #[test]
    fn backslash_inside_double_quotes() {
        assert_eq!(toks(r#""say \"hi\"""#), vec![r#""say "hi"""#]);
        assert_eq!(toks(r#""a\\b""#), vec![r#""a\b""#]);
        assert_eq!(toks(r#""a\nb""#), vec![r#""a\nb""#]);
    }

    #[test]
    fn unterminated_quote_is_error() {
        assert_eq!(tokenize(r#"name="open"#), Err(TokenizeError::NoClosingQuotation));
        assert_eq!(tokenize("it's"), Err(TokenizeError::NoClosingQuotation));
        assert_eq!(tokenize(r#""ends in \"#), Err(TokenizeError::NoClosingQuotation));
    }

    #[test]
    fn trailing_backslash_is_error() {
        assert_eq!(tokenize(r"abc \"), Err(TokenizeError::NoEscapedCharacter));
    }

    #[test]
    fn strip_quotes_requires_matching_pair() {
        assert_eq!(strip_quotes(r#""abc""#), Some("abc"));
        assert_eq!(strip_quotes("'abc'"), Some("abc"));
        assert_eq!(strip_quotes(r#""""#), Some(""));
        assert_eq!(strip_quotes(r#""abc'"#), None);
        assert_eq!(strip_quotes(r#"""#), None);
        assert_eq!(strip_quotes("abc"), None);
        assert_eq!(unquote("abc"), "abc");
        assert_eq!(unquote(r#""abc""#), "abc");
    }

    proptest! {
        #[test]
        fn plain_words_roundtrip(words in proptest::collection::vec("[A-Za-z0-9_.=-]{1,12}", 0..8)) {
            let line = words.join(" ");
            prop_assert_eq!(tokenize(&line).unwrap(), words);
        }

        #[test]
        fn quoted_text_without_specials_is_one_token(body in "[A-Za-z0-9 _.]{0,20}") {
            let line = format!("\"{body}\"");
            prop_assert_eq!(tokenize(&line).unwrap(), vec![line.clone()]);
        }
    }
}
