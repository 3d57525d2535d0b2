use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Event - a dated happening with attending Students and Creatures
///
/// Owns both the Event↔Student and Event↔Creature join tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identity (`None` while transient)
    pub id: Option<EntityId>,

    pub name: String,

    pub description: String,

    pub date: NaiveDate,

    pub location: String,

    pub student_ids: BTreeSet<EntityId>,

    pub creature_ids: BTreeSet<EntityId>,
}

impl Event {
    /// Create a new transient Event with no participants
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            date,
            location: location.into(),
            student_ids: BTreeSet::new(),
            creature_ids: BTreeSet::new(),
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.date == other.date
            && self.location == other.location
    }
}

impl Eq for Event {}
