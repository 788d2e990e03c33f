//! Run-scoped symbol table.

use kidpy_types::Value;
use std::collections::BTreeMap;

/// The mapping from variable name to current value for one run.
///
/// Created fresh per run and discarded at the end; within a run it only
/// grows or mutates existing keys, it is never cleared.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bindings: BTreeMap<String, Value>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or rebind a variable.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}
