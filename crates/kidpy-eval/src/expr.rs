//! Expression evaluation against the symbol table.
//!
//! Resolution order, first match wins:
//! 1. quoted string literal
//! 2. string repetition `"<lit>" * <count>`
//! 3. top-level `+` concatenation, when a string operand is present
//! 4. bare variable lookup
//! 5. identifier substitution followed by arithmetic evaluation, falling
//!    back to the substituted text verbatim when the parse fails
//!
//! Every path produces a value; a malformed expression degrades to its own
//! text instead of raising, so one bad print argument never aborts a run.

use crate::arith::eval_arith;
use crate::symbols::SymbolTable;
use kidpy_types::Value;

/// Bounds pathological repeat counts so a single repetition cannot
/// allocate unbounded memory.
const MAX_REPEAT: f64 = (1 << 20) as f64;

/// Evaluate a right-hand-side expression. Purely functional; never fails.
pub fn eval_expr(expr: &str, symbols: &SymbolTable) -> Value {
    let expr = expr.trim();

    if let Some(inner) = string_literal(expr) {
        return Value::Str(inner.to_string());
    }
    if let Some(value) = eval_repetition(expr, symbols) {
        return value;
    }
    if let Some(value) = eval_concat(expr, symbols) {
        return value;
    }
    if is_ident(expr) {
        if let Some(value) = symbols.get(expr) {
            return value.clone();
        }
    }

    let substituted = substitute_idents(expr, symbols);
    match eval_arith(&substituted) {
        Some(n) => Value::Num(n),
        None => Value::Str(substituted),
    }
}

// ─────────────────────────────────────────────────────────────
// Resolution steps
// ─────────────────────────────────────────────────────────────

/// A proper quoted literal: same quote at both ends, none inside.
pub(crate) fn string_literal(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let quote = bytes[0];
    if (quote != b'"' && quote != b'\'') || bytes[bytes.len() - 1] != quote {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    if inner.as_bytes().contains(&quote) {
        return None;
    }
    Some(inner)
}

/// `"<lit>" * <count-expr>` — the literal repeated count times.
fn eval_repetition(expr: &str, symbols: &SymbolTable) -> Option<Value> {
    let (lit, rest) = leading_literal(expr)?;
    let count_text = rest.trim_start().strip_prefix('*')?.trim();
    if count_text.is_empty() {
        return None;
    }
    let count = eval_arith(&substitute_idents(count_text, symbols))?;
    let count = count.max(0.0).min(MAX_REPEAT).floor() as usize;
    Some(Value::Str(lit.repeat(count)))
}

/// Top-level `+` concatenation. Only fires in string context — at least
/// one operand is a quoted literal, a repetition, or a variable currently
/// bound to a string. Purely numeric sums fall through to the arithmetic
/// fallback so `2 + 3` stays `5`, not `"23"`.
fn eval_concat(expr: &str, symbols: &SymbolTable) -> Option<Value> {
    let parts = split_top_level(expr, '+');
    if parts.len() < 2 {
        return None;
    }
    let string_context = parts.iter().any(|part| {
        let part = part.trim();
        part.starts_with('"')
            || part.starts_with('\'')
            || (is_ident(part) && symbols.get(part).is_some_and(Value::is_str))
    });
    if !string_context {
        return None;
    }
    let joined = parts
        .iter()
        .map(|part| eval_expr(part, symbols).to_string())
        .collect::<Vec<_>>()
        .join("");
    Some(Value::Str(joined))
}

// ─────────────────────────────────────────────────────────────
// Text helpers (shared with the condition evaluator and driver)
// ─────────────────────────────────────────────────────────────

/// Take a leading quoted literal; returns its inner text and the remainder.
fn leading_literal(text: &str) -> Option<(&str, &str)> {
    let quote = match text.as_bytes().first()? {
        b'"' => '"',
        b'\'' => '\'',
        _ => return None,
    };
    let close = text[1..].find(quote)? + 1;
    Some((&text[1..close], &text[close + 1..]))
}

/// Whether the trimmed text is exactly one identifier.
pub(crate) fn is_ident(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split on `delim` at the top level only: delimiters inside quotes or
/// parens do not split.
pub(crate) fn split_top_level(text: &str, delim: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;

    for (i, ch) in text.char_indices() {
        match in_quote {
            Some(q) => {
                if ch == q {
                    in_quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => in_quote = Some(ch),
                '(' => depth += 1,
                ')' => depth -= 1,
                _ if ch == delim && depth == 0 => {
                    parts.push(&text[start..i]);
                    start = i + ch.len_utf8();
                }
                _ => {}
            },
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Replace every identifier token bound in the symbol table with its
/// display text. Tokens inside quoted segments are left alone; unbound
/// identifiers stay as literal text.
pub(crate) fn substitute_idents(text: &str, symbols: &SymbolTable) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut in_quote: Option<char> = None;

    while let Some(ch) = rest.chars().next() {
        match in_quote {
            Some(q) => {
                out.push(ch);
                if ch == q {
                    in_quote = None;
                }
                rest = &rest[ch.len_utf8()..];
            }
            None if ch == '"' || ch == '\'' => {
                out.push(ch);
                in_quote = Some(ch);
                rest = &rest[ch.len_utf8()..];
            }
            None if ch.is_ascii_alphabetic() || ch == '_' => {
                let end = rest
                    .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                    .unwrap_or(rest.len());
                let token = &rest[..end];
                match symbols.get(token) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => out.push_str(token),
                }
                rest = &rest[end..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syms(pairs: &[(&str, Value)]) -> SymbolTable {
        let mut table = SymbolTable::new();
        for (name, value) in pairs {
            table.define(name, value.clone());
        }
        table
    }

    #[test]
    fn test_string_literal() {
        let table = SymbolTable::new();
        assert_eq!(eval_expr(r#""hello""#, &table), Value::Str("hello".into()));
        assert_eq!(eval_expr("'hi'", &table), Value::Str("hi".into()));
    }

    #[test]
    fn test_two_literals_joined_is_not_one_literal() {
        let table = SymbolTable::new();
        assert_eq!(eval_expr(r#""a" + "b""#, &table), Value::Str("ab".into()));
    }

    #[test]
    fn test_repetition() {
        let table = SymbolTable::new();
        assert_eq!(eval_expr(r#""*" * 5"#, &table), Value::Str("*****".into()));
        assert_eq!(eval_expr(r#""=" * 0"#, &table), Value::Str("".into()));
    }

    #[test]
    fn test_repetition_with_variable_count() {
        let table = syms(&[("n", Value::Num(3.0))]);
        assert_eq!(eval_expr(r#""ab" * n"#, &table), Value::Str("ababab".into()));
    }

    #[test]
    fn test_repetition_negative_count_is_empty() {
        let table = SymbolTable::new();
        assert_eq!(eval_expr(r#""x" * -2"#, &table), Value::Str("".into()));
    }

    #[test]
    fn test_concat_variable_and_literal() {
        let table = syms(&[("name", Value::Str("Ada".into()))]);
        assert_eq!(
            eval_expr(r#""Hi " + name + "!""#, &table),
            Value::Str("Hi Ada!".into())
        );
    }

    #[test]
    fn test_numeric_plus_stays_numeric() {
        let table = syms(&[("x", Value::Num(2.0))]);
        assert_eq!(eval_expr("2 + 3", &table), Value::Num(5.0));
        assert_eq!(eval_expr("x + 1", &table), Value::Num(3.0));
    }

    #[test]
    fn test_bare_variable_keeps_type() {
        let table = syms(&[("x", Value::Num(7.0))]);
        assert_eq!(eval_expr("x", &table), Value::Num(7.0));
    }

    #[test]
    fn test_arithmetic_with_substitution() {
        let table = syms(&[("price", Value::Num(500.0))]);
        assert_eq!(eval_expr("price * 3", &table), Value::Num(1500.0));
    }

    #[test]
    fn test_soft_fallback_returns_substituted_text() {
        let table = syms(&[("who", Value::Str("me".into()))]);
        assert_eq!(eval_expr("who ??", &table), Value::Str("me ??".into()));
    }

    #[test]
    fn test_split_top_level_respects_quotes_and_parens() {
        assert_eq!(
            split_top_level(r#""a,b", (1, 2), c"#, ','),
            vec![r#""a,b""#, " (1, 2)", " c"]
        );
    }

    #[test]
    fn test_substitute_skips_quoted_segments() {
        let table = syms(&[("x", Value::Num(4.0))]);
        assert_eq!(substitute_idents(r#""x" + x"#, &table), r#""x" + 4"#);
    }
}
