//! Discovery of simulated `input()` call sites.

use crate::classify::classify;
use kidpy_types::{InputSite, Stmt};

/// Scan a program for `input()` / `int(input())` call sites, in source
/// order, regardless of nesting. The surrounding UI renders one entry
/// field per site before allowing a run.
///
/// Duplicate variable names keep the first site: the binder map is keyed
/// by variable name, so a later duplicate could not be bound separately.
pub fn scan_inputs(source: &str) -> Vec<InputSite> {
    let mut sites: Vec<InputSite> = Vec::new();
    for line in source.lines() {
        if let Stmt::InputAssign {
            name,
            prompt,
            is_int,
        } = classify(line)
        {
            if sites.iter().any(|s| s.name == name) {
                continue;
            }
            sites.push(InputSite {
                name,
                prompt,
                is_int,
            });
        }
    }
    sites
}
