//! KidPy line classifier: source lines to statement shapes.
//!
//! The language is line-oriented, so there is no token stream. Each line is
//! classified independently into a [`Stmt`](kidpy_types::Stmt); indented
//! blocks are recovered afterwards by comparing indentation against the
//! header line.

mod block;
mod classify;
mod inputs;

pub use block::{body_range, indent_width};
pub use classify::classify;
pub use inputs::scan_inputs;
