//! Learner progress: completed lessons, saved projects, unlocked stories,
//! and the badge tier derived from lesson count.
//!
//! Persistence goes through the [`ProgressRepo`] trait, injected at
//! construction, so the store stays testable without a real storage
//! backend; the host (browser) supplies timestamps as epoch milliseconds.

mod record;
mod repo;
mod store;

pub use record::{BadgeLevel, LessonRecord, Progress, ProjectRecord};
pub use repo::{MemoryRepo, ProgressError, ProgressRepo};
pub use store::ProgressStore;
