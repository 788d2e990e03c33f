//! Persisted progress records.

use serde::{Deserialize, Serialize};

/// Badge tier, derived from the number of completed lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    Beginner,
    Explorer,
    Creator,
    Legend,
}

impl BadgeLevel {
    /// The tier earned by completing `lessons` lessons.
    pub fn for_lesson_count(lessons: usize) -> BadgeLevel {
        match lessons {
            0..=4 => BadgeLevel::Beginner,
            5..=9 => BadgeLevel::Explorer,
            10..=19 => BadgeLevel::Creator,
            _ => BadgeLevel::Legend,
        }
    }
}

/// One completed lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub lesson_id: String,
    /// Epoch milliseconds, supplied by the host.
    pub completed_at: u64,
}

/// One saved project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub code: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// The full persisted progress record for one learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub lessons_completed: Vec<LessonRecord>,
    pub projects: Vec<ProjectRecord>,
    pub stories_unlocked: Vec<String>,
    pub badge: BadgeLevel,
    /// Cumulative time spent, in minutes.
    pub total_minutes: u64,
    /// Epoch milliseconds of the last activity.
    pub last_active: u64,
}

impl Default for BadgeLevel {
    fn default() -> Self {
        BadgeLevel::Beginner
    }
}

impl Progress {
    /// Serialize for the host's storage mechanism.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a previously stored record.
    pub fn from_json(json: &str) -> Result<Progress, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(BadgeLevel::for_lesson_count(0), BadgeLevel::Beginner);
        assert_eq!(BadgeLevel::for_lesson_count(4), BadgeLevel::Beginner);
        assert_eq!(BadgeLevel::for_lesson_count(5), BadgeLevel::Explorer);
        assert_eq!(BadgeLevel::for_lesson_count(9), BadgeLevel::Explorer);
        assert_eq!(BadgeLevel::for_lesson_count(10), BadgeLevel::Creator);
        assert_eq!(BadgeLevel::for_lesson_count(19), BadgeLevel::Creator);
        assert_eq!(BadgeLevel::for_lesson_count(20), BadgeLevel::Legend);
    }

    #[test]
    fn test_progress_json_round_trip() {
        let progress = Progress {
            lessons_completed: vec![LessonRecord {
                lesson_id: "variables-1".into(),
                completed_at: 1_700_000_000_000,
            }],
            projects: Vec::new(),
            stories_unlocked: vec!["robot-story".into()],
            badge: BadgeLevel::Beginner,
            total_minutes: 25,
            last_active: 1_700_000_000_000,
        };
        let json = progress.to_json().unwrap();
        assert_eq!(Progress::from_json(&json).unwrap(), progress);
    }
}
