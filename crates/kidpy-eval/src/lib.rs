//! KidPy line-oriented evaluator.
//!
//! Simulates running a child's Python-subset program (print, assignment,
//! simple `for` loops over `range()`, single-level `if/elif/else`, and
//! simulated `input()`) and returns the accumulated output text. One run is
//! one pure call from (source text, bound inputs) to (output | error);
//! nothing carries over between runs.

mod arith;
mod cond;
mod expr;
mod interpreter;
mod symbols;

pub use cond::eval_condition;
pub use expr::eval_expr;
pub use interpreter::{EvalOptions, Interpreter, NO_OUTPUT_MESSAGE};
pub use symbols::SymbolTable;

pub use kidpy_types::{InputSite, RunError, RunOutcome, Value};
