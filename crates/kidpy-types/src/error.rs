use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a run before or during execution.
///
/// Almost every evaluation failure degrades softly (unrecognized lines are
/// skipped, unparseable expressions fall back to their raw text); only the
/// variants here surface to the caller, and each one aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The pre-run gate found `input()` sites with no bound value.
    /// Nothing executes; the UI should ask the learner to fill in all fields.
    #[error("missing input values: {}", .0.join(", "))]
    MissingInputs(Vec<String>),

    /// The step limit was exhausted (runaway loop or pathological `range()`).
    #[error("program took too many steps to finish")]
    StepLimitExceeded,
}

/// The result handed to the UI: exactly one of output text or error text.
///
/// The UI displays `outputText` verbatim in a console panel, or
/// `errorText` behind an error indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunOutcome {
    OutputText(String),
    ErrorText(String),
}

impl RunOutcome {
    /// Fold a run result into the one-of-two outcome record.
    pub fn from_result(result: Result<String, RunError>) -> Self {
        match result {
            Ok(output) => RunOutcome::OutputText(output),
            Err(err) => RunOutcome::ErrorText(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_inputs_message() {
        let err = RunError::MissingInputs(vec!["age".into(), "name".into()]);
        assert_eq!(err.to_string(), "missing input values: age, name");
    }

    #[test]
    fn test_outcome_serializes_output_text() {
        let outcome = RunOutcome::OutputText("Hello".into());
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"outputText":"Hello"}"#);
    }

    #[test]
    fn test_outcome_serializes_error_text() {
        let outcome = RunOutcome::from_result(Err(RunError::StepLimitExceeded));
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"errorText":"program took too many steps to finish"}"#);
    }
}
