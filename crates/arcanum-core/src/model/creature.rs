use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Creature - appears at Events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Creature {
    /// Store-assigned identity (`None` while transient)
    pub id: Option<EntityId>,

    pub name: String,

    /// Classification (e.g. "Dragon", "Owl")
    pub kind: String,

    pub description: String,

    pub habitat: String,

    /// Events this creature appears at (read-only view)
    pub event_ids: BTreeSet<EntityId>,
}

impl Creature {
    /// Create a new transient Creature
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
        habitat: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            habitat: habitat.into(),
            event_ids: BTreeSet::new(),
        }
    }
}

impl PartialEq for Creature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.description == other.description
            && self.habitat == other.habitat
    }
}

impl Eq for Creature {}
