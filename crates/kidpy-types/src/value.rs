use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically typed run value: either a number or a string.
///
/// Each run owns its values outright; there is no aliasing between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Num(f64),
    Str(String),
}

impl Value {
    /// Whether this value holds a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }
}

impl fmt::Display for Value {
    /// Render the value the way Python's `print` would: whole-number
    /// floats without a fractional part, strings verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}
