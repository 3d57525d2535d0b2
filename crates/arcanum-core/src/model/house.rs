use serde::{Deserialize, Serialize};

use super::{EntityId, Student};

/// House - groups students and has one head teacher
///
/// `students` is the owned side of House→Student: creating or updating a
/// House writes every student in the collection with `house_id` pointing
/// back at the House. `head_teacher_id` is the inverse side of
/// Teacher→House and is only populated when loaded from the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct House {
    /// Store-assigned identity (`None` while transient)
    pub id: Option<EntityId>,

    pub name: String,

    pub motto: String,

    /// Accumulated house points
    pub total_score: i64,

    /// Students belonging to this House
    pub students: Vec<Student>,

    /// Teacher heading this House (read-only view)
    pub head_teacher_id: Option<EntityId>,
}

impl House {
    /// Create a new transient House
    pub fn new(name: impl Into<String>, motto: impl Into<String>, total_score: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            motto: motto.into(),
            total_score,
            students: Vec::new(),
            head_teacher_id: None,
        }
    }

    /// Add a student to this House, pointing the student back at it
    ///
    /// For a transient House the student's `house_id` stays `None` until the
    /// House is created; the cascade then fills it in.
    pub fn admit(&mut self, mut student: Student) {
        student.house_id = self.id;
        self.students.push(student);
    }

    /// Remove a stored student from this House and clear its back-reference
    pub fn release(&mut self, student_id: EntityId) -> Option<Student> {
        let pos = self
            .students
            .iter()
            .position(|s| s.id == Some(student_id))?;
        let mut student = self.students.remove(pos);
        student.house_id = None;
        Some(student)
    }

    /// Find a member by name
    pub fn student(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name == name)
    }
}

impl PartialEq for House {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.motto == other.motto
            && self.total_score == other.total_score
    }
}

impl Eq for House {}
