//! KidPy evaluator as a WASM module for browser environments.
//!
//! This crate exposes the evaluator via `wasm-bindgen`, suitable for
//! running a lesson page's "Run" button without a real Python runtime.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { run, scan_inputs } from 'kidpy-wasm';
//!
//! await init();
//!
//! const sites = JSON.parse(scan_inputs(source));
//! // render one field per site, then:
//! const result = JSON.parse(run(source, { age: "10" }));
//! // { outputText: "..." } or { errorText: "..." }
//! ```

use kidpy_check::{Rule, StepCheck};
use kidpy_eval::Interpreter;
use kidpy_types::RunOutcome;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Run a program against bound input values.
///
/// `inputs` is a plain JS object mapping variable name to the text typed
/// into the corresponding field. Returns a JSON string holding exactly one
/// of `outputText` or `errorText`.
#[wasm_bindgen]
pub fn run(source: &str, inputs: JsValue) -> String {
    let inputs: BTreeMap<String, String> = match serde_wasm_bindgen::from_value(inputs) {
        Ok(map) => map,
        Err(e) => return error_json(&format!("invalid inputs object: {e}")),
    };
    outcome_json(&Interpreter::new().run_outcome(source, &inputs))
}

/// Discover the program's `input()` call sites.
///
/// Returns a JSON array of `{ name, prompt, isInt }` records, in source
/// order; the UI renders one entry field per record before allowing a run.
#[wasm_bindgen]
pub fn scan_inputs(source: &str) -> String {
    let sites = kidpy_parser::scan_inputs(source);
    serde_json::to_string(&sites)
        .unwrap_or_else(|e| error_json(&format!("serialization error: {e}")))
}

/// Report of one guided-project step check.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    correct: bool,
    failed: Vec<&'a Rule>,
}

/// Check a guided-project step: every rule's pattern must match somewhere
/// in the source. `rules_json` is a JSON array of
/// `{ pattern, message, messageFr }` records from the step data.
#[wasm_bindgen]
pub fn check_step(source: &str, rules_json: &str) -> String {
    let rules: Vec<Rule> = match serde_json::from_str(rules_json) {
        Ok(rules) => rules,
        Err(e) => return error_json(&format!("invalid rules: {e}")),
    };
    let check = match StepCheck::new(rules) {
        Ok(check) => check,
        Err(e) => return error_json(&e.to_string()),
    };
    let failed = check.failing_rules(source);
    let report = CheckReport {
        correct: failed.is_empty(),
        failed,
    };
    serde_json::to_string(&report)
        .unwrap_or_else(|e| error_json(&format!("serialization error: {e}")))
}

/// Return the evaluator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn outcome_json(outcome: &RunOutcome) -> String {
    serde_json::to_string(outcome)
        .unwrap_or_else(|e| error_json(&format!("serialization error: {e}")))
}

/// Hand-built fallback so the boundary always returns well-formed JSON,
/// even when serialization itself fails.
fn error_json(message: &str) -> String {
    format!(
        r#"{{"errorText":{}}}"#,
        serde_json::Value::String(message.to_string())
    )
}
