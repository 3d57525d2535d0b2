use serde::{Deserialize, Serialize};

use super::{Course, EntityId};

/// Teacher - teaches Courses and may head one House
///
/// `courses` is the owned side of Teacher→Course; it cascades on create,
/// update and delete. `house_id` is the owning side of the one-to-one
/// Teacher→House link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Teacher {
    /// Store-assigned identity (`None` while transient)
    pub id: Option<EntityId>,

    pub name: String,

    pub specialty: String,

    /// Free-form proficiency label (e.g. "Expert")
    pub magic_level: String,

    pub years_of_experience: i64,

    pub courses: Vec<Course>,

    /// House this teacher heads, if any
    pub house_id: Option<EntityId>,
}

impl Teacher {
    /// Create a new transient Teacher with no courses
    pub fn new(
        name: impl Into<String>,
        specialty: impl Into<String>,
        magic_level: impl Into<String>,
        years_of_experience: i64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            specialty: specialty.into(),
            magic_level: magic_level.into(),
            years_of_experience,
            courses: Vec::new(),
            house_id: None,
        }
    }

    /// Give this teacher a course, pointing the course back at the teacher
    pub fn assign_course(&mut self, mut course: Course) {
        course.teacher_id = self.id;
        self.courses.push(course);
    }

    /// Find a taught course by name
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }
}

impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.specialty == other.specialty
            && self.magic_level == other.magic_level
            && self.years_of_experience == other.years_of_experience
    }
}

impl Eq for Teacher {}
