//! The interpreter driver: walks the program line by line, dispatches to
//! the expression/condition evaluators, and accumulates output.
//!
//! A run is all-or-nothing: it returns either the joined output text or a
//! single [`RunError`]. Unrecognized lines are skipped silently, soft
//! evaluation failures degrade to text, and the only hard failures are the
//! pre-run missing-input gate and step-limit exhaustion.

use crate::cond::{eval_condition, resolve_numbers};
use crate::expr::{eval_expr, split_top_level};
use crate::symbols::SymbolTable;
use kidpy_parser::{body_range, classify, scan_inputs};
use kidpy_types::{RunError, RunOutcome, Stmt, Value};
use std::collections::BTreeMap;

/// Shown when a program completes without printing anything.
pub const NO_OUTPUT_MESSAGE: &str = "Program ran successfully! (No output)";

/// Evaluator configuration.
///
/// The observed lesson variants differ in whether loop bodies execute
/// assignments or only prints; that difference lives behind the single
/// `loop_body_assignments` flag instead of parallel implementations.
#[derive(Debug, Clone)]
pub struct EvalOptions {
    /// Execute assignment statements inside loop bodies (default: prints
    /// only accumulate per iteration).
    pub loop_body_assignments: bool,
    /// Total step budget per run; one step per executed statement or loop
    /// iteration. Bounds pathological `range()` programs.
    pub step_limit: u64,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            loop_body_assignments: false,
            step_limit: 100_000,
        }
    }
}

/// The line-oriented interpreter.
///
/// Holds only configuration; every call to [`run`](Interpreter::run)
/// builds a fresh symbol table and output buffer, so repeated runs of the
/// same program are fully independent.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    options: EvalOptions,
}

impl Interpreter {
    /// Create an interpreter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with the given options.
    pub fn with_options(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Run a program against the bound input values.
    ///
    /// Refuses to execute while any discovered `input()` site has no bound
    /// value — that validation gate fires before any evaluation starts.
    pub fn run(
        &self,
        source: &str,
        inputs: &BTreeMap<String, String>,
    ) -> Result<String, RunError> {
        let missing: Vec<String> = scan_inputs(source)
            .into_iter()
            .filter(|site| !inputs.contains_key(&site.name))
            .map(|site| site.name)
            .collect();
        if !missing.is_empty() {
            return Err(RunError::MissingInputs(missing));
        }

        let lines: Vec<&str> = source.lines().collect();
        let mut run = Run {
            lines: &lines,
            symbols: SymbolTable::new(),
            output: Vec::new(),
            inputs,
            steps: 0,
            options: &self.options,
        };
        run.execute()?;

        if run.output.is_empty() {
            Ok(NO_OUTPUT_MESSAGE.to_string())
        } else {
            Ok(run.output.join("\n"))
        }
    }

    /// Run and fold the result into the UI-facing one-of-two outcome.
    pub fn run_outcome(&self, source: &str, inputs: &BTreeMap<String, String>) -> RunOutcome {
        RunOutcome::from_result(self.run(source, inputs))
    }
}

/// Mutable state for one run.
struct Run<'a> {
    lines: &'a [&'a str],
    symbols: SymbolTable,
    output: Vec<String>,
    inputs: &'a BTreeMap<String, String>,
    steps: u64,
    options: &'a EvalOptions,
}

impl Run<'_> {
    /// Consume one step of the budget.
    fn tick(&mut self) -> Result<(), RunError> {
        self.steps += 1;
        if self.steps > self.options.step_limit {
            Err(RunError::StepLimitExceeded)
        } else {
            Ok(())
        }
    }

    /// Top-level walk. Headers consume their body range; an `if` chain
    /// carries its matched flag until a non-continuation statement resets
    /// it.
    fn execute(&mut self) -> Result<(), RunError> {
        let mut idx = 0;
        let mut chain_matched = false;

        while idx < self.lines.len() {
            let stmt = classify(self.lines[idx]);
            match stmt {
                Stmt::Ignored => {
                    idx += 1;
                }
                Stmt::ForHeader { var, range_args } => {
                    self.tick()?;
                    let body = body_range(self.lines, idx);
                    self.run_loop(&var, &range_args, body.clone())?;
                    idx = body.end.max(idx + 1);
                    chain_matched = false;
                }
                Stmt::IfHeader(cond) => {
                    self.tick()?;
                    let body = body_range(self.lines, idx);
                    let taken = eval_condition(&cond, &self.symbols);
                    if taken {
                        self.run_body(body.clone(), true)?;
                    }
                    idx = body.end.max(idx + 1);
                    chain_matched = taken;
                }
                Stmt::ElifHeader(cond) => {
                    self.tick()?;
                    let body = body_range(self.lines, idx);
                    if !chain_matched && eval_condition(&cond, &self.symbols) {
                        self.run_body(body.clone(), true)?;
                        chain_matched = true;
                    }
                    idx = body.end.max(idx + 1);
                }
                Stmt::ElseHeader => {
                    self.tick()?;
                    let body = body_range(self.lines, idx);
                    if !chain_matched {
                        self.run_body(body.clone(), true)?;
                    }
                    idx = body.end.max(idx + 1);
                    chain_matched = false;
                }
                simple => {
                    self.exec_simple(&simple)?;
                    idx += 1;
                    chain_matched = false;
                }
            }
        }
        Ok(())
    }

    /// Execute a `for` body once per iteration value. Range arguments that
    /// fail to resolve, or a step that cannot progress toward the bound,
    /// produce zero iterations.
    fn run_loop(
        &mut self,
        var: &str,
        range_args: &str,
        body: std::ops::Range<usize>,
    ) -> Result<(), RunError> {
        let Some(args) = resolve_numbers(range_args, &self.symbols) else {
            return Ok(());
        };
        let (start, stop, step) = match args.as_slice() {
            [stop] => (0.0, *stop, 1.0),
            [start, stop] => (*start, *stop, 1.0),
            [start, stop, step] => (*start, *stop, *step),
            _ => return Ok(()),
        };
        if step == 0.0 {
            return Ok(());
        }

        let mut current = start;
        while if step > 0.0 { current < stop } else { current > stop } {
            self.tick()?;
            self.symbols.define(var, Value::Num(current));
            self.run_body(body.clone(), self.options.loop_body_assignments)?;
            current += step;
        }
        Ok(())
    }

    /// Execute the flat statement list of a block body. Nested headers are
    /// skipped: one level of nesting is the documented limit.
    fn run_body(
        &mut self,
        body: std::ops::Range<usize>,
        with_assignments: bool,
    ) -> Result<(), RunError> {
        for line_idx in body {
            let stmt = classify(self.lines[line_idx]);
            match stmt {
                Stmt::Print(_) => self.exec_simple(&stmt)?,
                Stmt::Assign { .. } | Stmt::InputAssign { .. } if with_assignments => {
                    self.exec_simple(&stmt)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Execute a non-header statement.
    fn exec_simple(&mut self, stmt: &Stmt) -> Result<(), RunError> {
        self.tick()?;
        match stmt {
            Stmt::Print(args) => {
                let rendered = split_top_level(args, ',')
                    .iter()
                    .map(|arg| eval_expr(arg, &self.symbols).to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.output.push(rendered);
            }
            Stmt::Assign { name, expr } => {
                let value = eval_expr(expr, &self.symbols);
                self.symbols.define(name, value);
            }
            Stmt::InputAssign {
                name,
                prompt,
                is_int,
            } => {
                // The pre-run gate guarantees a bound value exists.
                let raw = self.inputs.get(name).cloned().unwrap_or_default();
                let value = if *is_int {
                    Value::Num(parse_int_input(&raw))
                } else {
                    Value::Str(raw)
                };
                // Echo the prompt and the typed answer, terminal-style.
                self.output.push(format!("{prompt}{value}"));
                self.symbols.define(name, value);
            }
            _ => {}
        }
        Ok(())
    }
}

/// `int(input())` parsing: integer text, or a float truncated toward
/// zero; anything else becomes 0 rather than an error.
fn parse_int_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return n as f64;
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_input() {
        assert_eq!(parse_int_input("7"), 7.0);
        assert_eq!(parse_int_input(" 12 "), 12.0);
        assert_eq!(parse_int_input("3.9"), 3.0);
        assert_eq!(parse_int_input("-4"), -4.0);
        assert_eq!(parse_int_input("abc"), 0.0);
        assert_eq!(parse_int_input(""), 0.0);
    }
}
