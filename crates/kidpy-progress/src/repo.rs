//! Progress persistence boundary.

use crate::record::Progress;
use std::cell::RefCell;
use thiserror::Error;

/// Errors from a progress backend.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The backing store failed to load or save the record.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// A keyed store for the learner's progress record.
///
/// The store is injected into [`ProgressStore`](crate::ProgressStore) at
/// construction; a browser host backs it with local storage, tests use
/// [`MemoryRepo`].
pub trait ProgressRepo {
    /// Load the current record; a missing record loads as the default.
    fn get(&self) -> Result<Progress, ProgressError>;
    /// Persist the record.
    fn put(&self, progress: &Progress) -> Result<(), ProgressError>;
}

/// In-memory repository for tests and guest sessions.
#[derive(Debug, Default)]
pub struct MemoryRepo {
    stored: RefCell<Progress>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressRepo for MemoryRepo {
    fn get(&self) -> Result<Progress, ProgressError> {
        Ok(self.stored.borrow().clone())
    }

    fn put(&self, progress: &Progress) -> Result<(), ProgressError> {
        *self.stored.borrow_mut() = progress.clone();
        Ok(())
    }
}
