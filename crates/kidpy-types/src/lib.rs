//! Shared types for the KidPy evaluator.
//!
//! This crate defines the run value type, the per-line statement
//! classification, input call sites, and the error/result types shared
//! across the evaluator crates.

mod error;
mod value;
pub mod stmt;

pub use error::{RunError, RunOutcome};
pub use stmt::{InputSite, Stmt};
pub use value::Value;
