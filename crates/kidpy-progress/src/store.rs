//! Progress store operations.

use crate::record::{BadgeLevel, LessonRecord, Progress, ProjectRecord};
use crate::repo::{ProgressError, ProgressRepo};

/// The learner's progress store, backed by an injected repository.
///
/// Every operation loads the current record, applies the change, and
/// persists the result, so the repository always holds a consistent
/// record.
pub struct ProgressStore<R: ProgressRepo> {
    repo: R,
}

impl<R: ProgressRepo> ProgressStore<R> {
    /// Create a store over the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The current progress record.
    pub fn progress(&self) -> Result<Progress, ProgressError> {
        self.repo.get()
    }

    /// Record a completed lesson and recompute the badge tier.
    /// Completing the same lesson twice is a no-op.
    pub fn complete_lesson(&self, lesson_id: &str, now_ms: u64) -> Result<(), ProgressError> {
        let mut progress = self.repo.get()?;
        if progress
            .lessons_completed
            .iter()
            .any(|l| l.lesson_id == lesson_id)
        {
            return Ok(());
        }
        progress.lessons_completed.push(LessonRecord {
            lesson_id: lesson_id.to_string(),
            completed_at: now_ms,
        });
        progress.badge = BadgeLevel::for_lesson_count(progress.lessons_completed.len());
        progress.last_active = now_ms;
        self.repo.put(&progress)
    }

    /// Save a new project. Returns the assigned project id.
    pub fn save_project(
        &self,
        name: &str,
        code: &str,
        now_ms: u64,
    ) -> Result<String, ProgressError> {
        let mut progress = self.repo.get()?;
        let id = format!("project-{}", progress.projects.len() + 1);
        progress.projects.push(ProjectRecord {
            id: id.clone(),
            name: name.to_string(),
            code: code.to_string(),
            created_at: now_ms,
            updated_at: now_ms,
        });
        progress.last_active = now_ms;
        self.repo.put(&progress)?;
        Ok(id)
    }

    /// Unlock a story. Unlocking twice is a no-op.
    pub fn unlock_story(&self, story_id: &str, now_ms: u64) -> Result<(), ProgressError> {
        let mut progress = self.repo.get()?;
        if progress.stories_unlocked.iter().any(|s| s == story_id) {
            return Ok(());
        }
        progress.stories_unlocked.push(story_id.to_string());
        progress.last_active = now_ms;
        self.repo.put(&progress)
    }

    /// Add to the cumulative time spent.
    pub fn add_time_spent(&self, minutes: u64, now_ms: u64) -> Result<(), ProgressError> {
        let mut progress = self.repo.get()?;
        progress.total_minutes += minutes;
        progress.last_active = now_ms;
        self.repo.put(&progress)
    }

    /// Reset the record to its initial state.
    pub fn reset(&self) -> Result<(), ProgressError> {
        self.repo.put(&Progress::default())
    }
}
