use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Student - belongs to one House, takes Courses, attends Events
///
/// `house_id` is the owning side of House→Student. `course_ids` and
/// `event_ids` are inverse views of the Course and Event join tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned identity (`None` while transient)
    pub id: Option<EntityId>,

    pub name: String,

    pub age: i64,

    /// Free-form proficiency label (e.g. "Intermediate")
    pub magic_level: String,

    /// Wand description (wood and core)
    pub wand: String,

    pub house_id: Option<EntityId>,

    /// Courses the student is enrolled in (read-only view)
    pub course_ids: BTreeSet<EntityId>,

    /// Events the student attends (read-only view)
    pub event_ids: BTreeSet<EntityId>,
}

impl Student {
    /// Create a new transient Student with no House
    pub fn new(
        name: impl Into<String>,
        age: i64,
        magic_level: impl Into<String>,
        wand: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            magic_level: magic_level.into(),
            wand: wand.into(),
            house_id: None,
            course_ids: BTreeSet::new(),
            event_ids: BTreeSet::new(),
        }
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.age == other.age
            && self.magic_level == other.magic_level
            && self.wand == other.wand
    }
}

impl Eq for Student {}
