//! Per-line statement classification.
//!
//! Hand-written scanning over the trimmed line, one matcher per statement
//! shape. Matching order matters: `input()`-based assignment is checked
//! before generic assignment because both share the `name = ...` shape.
//! A line matching no shape classifies as `Ignored` and is skipped
//! silently, so one unsupported line never halts the rest of the program.

use kidpy_types::Stmt;

/// Classify one raw source line.
pub fn classify(line: &str) -> Stmt {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Stmt::Ignored;
    }

    if let Some(stmt) = match_input_assign(trimmed) {
        return stmt;
    }
    if let Some(args) = match_print(trimmed) {
        return Stmt::Print(args);
    }
    if let Some(stmt) = match_for_header(trimmed) {
        return stmt;
    }
    if let Some(stmt) = match_branch_header(trimmed) {
        return stmt;
    }
    if let Some((name, expr)) = match_assign(trimmed) {
        return Stmt::Assign { name, expr };
    }

    Stmt::Ignored
}

// ─────────────────────────────────────────────────────────────
// Matchers
// ─────────────────────────────────────────────────────────────

/// `print( ... )` — the argument text runs to the last closing paren.
fn match_print(line: &str) -> Option<String> {
    let rest = line.strip_prefix("print")?.trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.trim().to_string())
}

/// `name = input("prompt")` or `name = int(input("prompt"))`.
fn match_input_assign(line: &str) -> Option<Stmt> {
    let (name, rest) = take_ident(line)?;
    let rest = take_eq(rest)?;

    if let Some(after_int) = rest.strip_prefix("int") {
        let after_int = after_int.trim_start().strip_prefix('(')?.trim_start();
        let inner = match_input_call(after_int.strip_suffix(')')?.trim_end())?;
        return Some(Stmt::InputAssign {
            name: name.to_string(),
            prompt: extract_prompt(inner),
            is_int: true,
        });
    }

    let inner = match_input_call(rest)?;
    Some(Stmt::InputAssign {
        name: name.to_string(),
        prompt: extract_prompt(inner),
        is_int: false,
    })
}

/// The `input( ... )` part; returns the raw prompt text between the parens.
fn match_input_call(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("input")?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

/// The prompt as the UI should label it: surrounding quotes stripped.
fn extract_prompt(inner: &str) -> String {
    let inner = inner.trim();
    if inner.len() >= 2 {
        let bytes = inner.as_bytes();
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[inner.len() - 1] == first {
            return inner[1..inner.len() - 1].to_string();
        }
    }
    // Malformed quoting: drop stray quote characters rather than reject.
    inner.replace(['"', '\''], "")
}

/// `for <var> in range(<args>):`
fn match_for_header(line: &str) -> Option<Stmt> {
    let rest = line.strip_prefix("for")?;
    // Require a word boundary after the keyword.
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let (var, rest) = take_ident(rest.trim_start())?;
    let rest = rest.trim_start().strip_prefix("in")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix("range")?.trim_start();
    let rest = rest.strip_prefix('(')?;
    let close = rest.find(')')?;
    let args = &rest[..close];
    let tail = rest[close + 1..].trim();
    if tail != ":" {
        return None;
    }
    Some(Stmt::ForHeader {
        var: var.to_string(),
        range_args: args.trim().to_string(),
    })
}

/// `if <cond>:` / `elif <cond>:` / `else:`
fn match_branch_header(line: &str) -> Option<Stmt> {
    let head = line.strip_suffix(':')?.trim_end();
    if head == "else" {
        return Some(Stmt::ElseHeader);
    }
    if let Some(cond) = head.strip_prefix("if ") {
        return Some(Stmt::IfHeader(cond.trim().to_string()));
    }
    if let Some(cond) = head.strip_prefix("elif ") {
        return Some(Stmt::ElifHeader(cond.trim().to_string()));
    }
    None
}

/// `name = expr` — generic assignment, checked last.
fn match_assign(line: &str) -> Option<(String, String)> {
    let (name, rest) = take_ident(line)?;
    let expr = take_eq(rest)?;
    if expr.is_empty() {
        return None;
    }
    Some((name.to_string(), expr.to_string()))
}

// ─────────────────────────────────────────────────────────────
// Scanning helpers
// ─────────────────────────────────────────────────────────────

/// Take a leading identifier (`[A-Za-z_][A-Za-z0-9_]*`); returns it and
/// the remainder of the line.
fn take_ident(text: &str) -> Option<(&str, &str)> {
    let mut end = 0;
    for (i, ch) in text.char_indices() {
        let ok = if i == 0 {
            ch.is_ascii_alphabetic() || ch == '_'
        } else {
            ch.is_ascii_alphanumeric() || ch == '_'
        };
        if !ok {
            break;
        }
        end = i + ch.len_utf8();
    }
    if end == 0 {
        return None;
    }
    Some((&text[..end], &text[end..]))
}

/// Take a single `=` (not `==`) with surrounding whitespace; returns the
/// trimmed right-hand side.
fn take_eq(text: &str) -> Option<&str> {
    let rest = text.trim_start().strip_prefix('=')?;
    if rest.starts_with('=') {
        return None;
    }
    Some(rest.trim())
}
