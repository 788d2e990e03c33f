//! Boolean condition evaluation for `if`/`elif` headers.
//!
//! Bound identifiers are substituted textually, a lone `=` is normalized
//! to `==` (a common beginner expectation — deliberate compatibility
//! behavior), and the result is evaluated as one comparison. Any failure
//! yields `false`: an unparseable condition is treated as not-taken,
//! never as an error.

use crate::arith::eval_arith;
use crate::expr::{split_top_level, string_literal, substitute_idents};
use crate::symbols::SymbolTable;

/// Evaluate a condition string against the symbol table.
pub fn eval_condition(cond: &str, symbols: &SymbolTable) -> bool {
    let substituted = substitute_idents(cond.trim(), symbols);
    let normalized = normalize_equals(&substituted);

    match find_comparison(&normalized) {
        Some((lhs, op, rhs)) => compare(lhs.trim(), op, rhs.trim()),
        None => truthy(normalized.trim()),
    }
}

/// The comparison operators, two-character ones first so `<=` is never
/// read as `<` followed by garbage.
const OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "<", ">"];

/// Normalize a single `=` that is not part of `==`, `!=`, `<=`, `>=`
/// into `==`. Quoted segments are left untouched.
fn normalize_equals(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    let mut prev = '\0';
    let mut in_quote: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match in_quote {
            Some(q) => {
                out.push(ch);
                if ch == q {
                    in_quote = None;
                }
            }
            None if ch == '"' || ch == '\'' => {
                out.push(ch);
                in_quote = Some(ch);
            }
            None if ch == '='
                && !matches!(prev, '=' | '!' | '<' | '>')
                && chars.peek() != Some(&'=') =>
            {
                out.push_str("==");
            }
            None => out.push(ch),
        }
        prev = ch;
    }
    out
}

/// Find the first top-level comparison operator and split around it.
fn find_comparison(text: &str) -> Option<(&str, &str, &str)> {
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
                _ if depth == 0 => {
                    for op in OPERATORS {
                        if text[i..].starts_with(op) {
                            return Some((&text[..i], op, &text[i + op.len()..]));
                        }
                    }
                }
                _ => {}
            },
        }
    }
    None
}

/// Numeric comparison when both sides parse as numbers, string
/// comparison (quotes stripped) otherwise.
fn compare(lhs: &str, op: &str, rhs: &str) -> bool {
    if let (Some(a), Some(b)) = (eval_arith(lhs), eval_arith(rhs)) {
        return match op {
            "==" => a == b,
            "!=" => a != b,
            "<=" => a <= b,
            ">=" => a >= b,
            "<" => a < b,
            ">" => a > b,
            _ => false,
        };
    }

    let a = unquote(lhs);
    let b = unquote(rhs);
    match op {
        "==" => a == b,
        "!=" => a != b,
        "<=" => a <= b,
        ">=" => a >= b,
        "<" => a < b,
        ">" => a > b,
        _ => false,
    }
}

/// A condition with no comparison: nonzero number or the literal `True`.
fn truthy(text: &str) -> bool {
    if let Some(n) = eval_arith(text) {
        return n != 0.0;
    }
    text == "True"
}

fn unquote(text: &str) -> &str {
    string_literal(text).unwrap_or(text)
}

/// Split a range-argument list on top-level commas and resolve each to a
/// number. `None` when any argument fails to resolve.
pub(crate) fn resolve_numbers(args: &str, symbols: &SymbolTable) -> Option<Vec<f64>> {
    split_top_level(args, ',')
        .iter()
        .map(|arg| eval_arith(&substitute_idents(arg.trim(), symbols)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kidpy_types::Value;

    fn syms(pairs: &[(&str, Value)]) -> SymbolTable {
        let mut table = SymbolTable::new();
        for (name, value) in pairs {
            table.define(name, value.clone());
        }
        table
    }

    #[test]
    fn test_numeric_comparisons() {
        let table = syms(&[("age", Value::Num(10.0))]);
        assert!(eval_condition("age >= 8", &table));
        assert!(!eval_condition("age < 8", &table));
        assert!(eval_condition("age == 10", &table));
        assert!(eval_condition("age != 7", &table));
    }

    #[test]
    fn test_single_equals_means_equality() {
        let table = syms(&[("x", Value::Num(3.0))]);
        assert!(eval_condition("x = 3", &table));
        assert!(!eval_condition("x = 4", &table));
    }

    #[test]
    fn test_string_equality() {
        let table = syms(&[("answer", Value::Str("yes".into()))]);
        assert!(eval_condition(r#"answer == "yes""#, &table));
        assert!(!eval_condition(r#"answer == "no""#, &table));
    }

    #[test]
    fn test_arithmetic_sides() {
        let table = syms(&[("x", Value::Num(4.0))]);
        assert!(eval_condition("x * 2 == 8", &table));
    }

    #[test]
    fn test_unparseable_condition_is_false() {
        let table = SymbolTable::new();
        assert!(!eval_condition("??? ==", &table));
        assert!(!eval_condition("", &table));
    }

    #[test]
    fn test_truthy_without_operator() {
        let table = syms(&[("n", Value::Num(1.0)), ("z", Value::Num(0.0))]);
        assert!(eval_condition("n", &table));
        assert!(!eval_condition("z", &table));
        assert!(eval_condition("True", &table));
        assert!(!eval_condition("False", &table));
    }

    #[test]
    fn test_normalize_leaves_quoted_text_alone() {
        assert_eq!(normalize_equals(r#"x = "a=b""#), r#"x == "a=b""#);
        assert_eq!(normalize_equals("a >= b"), "a >= b");
        assert_eq!(normalize_equals("a != b"), "a != b");
    }
}
