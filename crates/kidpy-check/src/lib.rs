//! Guided-project step validation.
//!
//! A step in a build-a-project walkthrough is "correct" iff every rule's
//! pattern matches somewhere in the learner's raw source text. This is
//! plain regex presence-checking — deliberately separate from the
//! evaluator, and swappable per step.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One validation rule: a pattern that must appear in the source, with a
/// bilingual hint shown when it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// The regex, as authored in the step data.
    pub pattern: String,
    /// English hint for a non-matching source.
    pub message: String,
    /// French hint for a non-matching source.
    pub message_fr: String,
}

impl Rule {
    /// The hint in the requested language.
    pub fn message_for(&self, french: bool) -> &str {
        if french {
            &self.message_fr
        } else {
            &self.message
        }
    }
}

/// Errors building a step check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A rule's pattern is not a valid regex. Reported at construction so
    /// checking itself can never fail.
    #[error("invalid pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// A compiled validation policy for one guided-project step.
pub struct StepCheck {
    rules: Vec<(Rule, Regex)>,
}

impl StepCheck {
    /// Compile the step's rules. Fails on the first bad pattern.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CheckError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let regex = Regex::new(&rule.pattern).map_err(|source| CheckError::BadPattern {
                pattern: rule.pattern.clone(),
                source,
            })?;
            compiled.push((rule, regex));
        }
        Ok(Self { rules: compiled })
    }

    /// The rules whose pattern did not match the source. Empty means the
    /// step is correct.
    pub fn failing_rules(&self, source: &str) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|(_, regex)| !regex.is_match(source))
            .map(|(rule, _)| rule)
            .collect()
    }

    /// Whether every rule's pattern matches somewhere in the source.
    pub fn is_correct(&self, source: &str) -> bool {
        self.rules.iter().all(|(_, regex)| regex.is_match(source))
    }
}
