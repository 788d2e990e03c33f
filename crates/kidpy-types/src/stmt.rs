//! Statement classification for one source line.
//!
//! The classifier turns each trimmed source line into one of these shapes.
//! Captured sub-strings (print arguments, assignment targets, range
//! arguments) are kept as raw expression text; the evaluator resolves them
//! against the symbol table at execution time.

use serde::{Deserialize, Serialize};

/// The classified shape of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `print(<args>)` — the raw argument text between the parentheses.
    Print(String),
    /// `<name> = <expr>` — a plain assignment.
    Assign { name: String, expr: String },
    /// `<name> = input("prompt")` or `<name> = int(input("prompt"))`.
    InputAssign {
        name: String,
        prompt: String,
        is_int: bool,
    },
    /// `for <var> in range(<args>):` — raw range argument text.
    ForHeader { var: String, range_args: String },
    /// `if <cond>:`
    IfHeader(String),
    /// `elif <cond>:`
    ElifHeader(String),
    /// `else:`
    ElseHeader,
    /// Blank line, comment, or any unrecognized shape. Silently skipped:
    /// a half-finished line elsewhere must not block the rest of the run.
    Ignored,
}

/// One discovered `input()` call site.
///
/// The UI renders one entry field per site, keyed by variable name and
/// labeled with the literal prompt text, before allowing a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSite {
    /// The variable the input is assigned to (the binder map key).
    pub name: String,
    /// The literal prompt string from the source.
    pub prompt: String,
    /// Whether the site is wrapped in `int(...)`.
    pub is_int: bool,
}
