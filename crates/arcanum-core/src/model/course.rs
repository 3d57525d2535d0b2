use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Course - taught by one Teacher, with enrolled Students
///
/// `student_ids` is the owning side of the Course↔Student join table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identity (`None` while transient)
    pub id: Option<EntityId>,

    pub name: String,

    /// Difficulty label (e.g. "Advanced")
    pub level: String,

    pub duration_hours: i64,

    pub teacher_id: Option<EntityId>,

    pub student_ids: BTreeSet<EntityId>,
}

impl Course {
    /// Create a new transient Course with no teacher and no students
    pub fn new(name: impl Into<String>, level: impl Into<String>, duration_hours: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            level: level.into(),
            duration_hours,
            teacher_id: None,
            student_ids: BTreeSet::new(),
        }
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.level == other.level
            && self.duration_hours == other.duration_hours
    }
}

impl Eq for Course {}
