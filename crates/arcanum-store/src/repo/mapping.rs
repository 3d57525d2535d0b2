//! Table mappings for the six Arcanum entities

use crate::errors::{from_rusqlite, Result};
use crate::repo::entity::{optional_id, text, Entity};
use crate::repo::hydration::select_where;
use crate::repo::relations::{
    Relationship, COURSE_STUDENTS, EVENT_CREATURES, EVENT_STUDENTS, HOUSE_HEAD_TEACHER,
    HOUSE_STUDENTS, TEACHER_COURSES,
};
use arcanum_core::model::{Course, Creature, EntityId, Event, House, Student, Teacher};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row};

impl Entity for House {
    const TABLE: &'static str = "houses";
    const COLUMNS: &'static [&'static str] = &["name", "motto", "total_score"];
    const DEPENDENTS: &'static [Relationship] =
        &[HOUSE_STUDENTS, HOUSE_HEAD_TEACHER];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.motto),
            Value::Integer(self.total_score),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(House {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            motto: row.get(2)?,
            total_score: row.get(3)?,
            ..House::default()
        })
    }

    fn save_relations(&mut self, conn: &Connection) -> Result<()> {
        let Some(id) = self.id else {
            return Ok(());
        };
        HOUSE_STUDENTS.save_children(conn, id, self.students.as_mut_slice(), |student, house_id| {
            student.house_id = Some(house_id)
        })
    }

    fn load_relations(&mut self, conn: &Connection) -> Result<()> {
        let Some(id) = self.id else {
            return Ok(());
        };
        self.students = select_where(conn, HOUSE_STUDENTS.foreign_key, &id)?;
        self.head_teacher_id = conn
            .query_row(
                "SELECT id FROM teachers WHERE house_id = ?1",
                [id],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(())
    }
}

impl Entity for Teacher {
    const TABLE: &'static str = "teachers";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "specialty",
        "magic_level",
        "years_of_experience",
        "house_id",
    ];
    const DEPENDENTS: &'static [Relationship] = &[TEACHER_COURSES];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.specialty),
            text(&self.magic_level),
            Value::Integer(self.years_of_experience),
            optional_id(self.house_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Teacher {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            specialty: row.get(2)?,
            magic_level: row.get(3)?,
            years_of_experience: row.get(4)?,
            house_id: row.get(5)?,
            ..Teacher::default()
        })
    }

    fn save_relations(&mut self, conn: &Connection) -> Result<()> {
        let Some(id) = self.id else {
            return Ok(());
        };
        TEACHER_COURSES.save_children(conn, id, self.courses.as_mut_slice(), |course, teacher_id| {
            course.teacher_id = Some(teacher_id)
        })
    }

    fn load_relations(&mut self, conn: &Connection) -> Result<()> {
        if let Some(id) = self.id {
            self.courses = select_where(conn, TEACHER_COURSES.foreign_key, &id)?;
        }
        Ok(())
    }
}

impl Entity for Course {
    const TABLE: &'static str = "courses";
    const COLUMNS: &'static [&'static str] = &["name", "level", "duration_hours", "teacher_id"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.level),
            Value::Integer(self.duration_hours),
            optional_id(self.teacher_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Course {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            level: row.get(2)?,
            duration_hours: row.get(3)?,
            teacher_id: row.get(4)?,
            ..Course::default()
        })
    }

    fn save_relations(&mut self, conn: &Connection) -> Result<()> {
        match self.id {
            Some(id) => COURSE_STUDENTS.replace(conn, id, &self.student_ids),
            None => Ok(()),
        }
    }

    fn load_relations(&mut self, conn: &Connection) -> Result<()> {
        if let Some(id) = self.id {
            self.student_ids = COURSE_STUDENTS.others_of(conn, id)?;
        }
        Ok(())
    }
}

impl Entity for Student {
    const TABLE: &'static str = "students";
    const COLUMNS: &'static [&'static str] = &["name", "age", "magic_level", "wand", "house_id"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            Value::Integer(self.age),
            text(&self.magic_level),
            text(&self.wand),
            optional_id(self.house_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Student {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            age: row.get(2)?,
            magic_level: row.get(3)?,
            wand: row.get(4)?,
            house_id: row.get(5)?,
            ..Student::default()
        })
    }

    // Course and event membership is owned by the other side
    fn load_relations(&mut self, conn: &Connection) -> Result<()> {
        if let Some(id) = self.id {
            self.course_ids = COURSE_STUDENTS.owners_of(conn, id)?;
            self.event_ids = EVENT_STUDENTS.owners_of(conn, id)?;
        }
        Ok(())
    }
}

impl Entity for Event {
    const TABLE: &'static str = "events";
    const COLUMNS: &'static [&'static str] = &["name", "description", "date", "location"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.description),
            Value::Text(self.date.format("%Y-%m-%d").to_string()),
            text(&self.location),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let mut event = Event::new(
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get(3)?,
            row.get::<_, String>(4)?,
        );
        event.id = Some(row.get(0)?);
        Ok(event)
    }

    fn save_relations(&mut self, conn: &Connection) -> Result<()> {
        let Some(id) = self.id else {
            return Ok(());
        };
        EVENT_STUDENTS.replace(conn, id, &self.student_ids)?;
        EVENT_CREATURES.replace(conn, id, &self.creature_ids)
    }

    fn load_relations(&mut self, conn: &Connection) -> Result<()> {
        if let Some(id) = self.id {
            self.student_ids = EVENT_STUDENTS.others_of(conn, id)?;
            self.creature_ids = EVENT_CREATURES.others_of(conn, id)?;
        }
        Ok(())
    }
}

impl Entity for Creature {
    const TABLE: &'static str = "creatures";
    const COLUMNS: &'static [&'static str] = &["name", "kind", "description", "habitat"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.kind),
            text(&self.description),
            text(&self.habitat),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Creature {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            kind: row.get(2)?,
            description: row.get(3)?,
            habitat: row.get(4)?,
            ..Creature::default()
        })
    }

    fn load_relations(&mut self, conn: &Connection) -> Result<()> {
        if let Some(id) = self.id {
            self.event_ids = EVENT_CREATURES.owners_of(conn, id)?;
        }
        Ok(())
    }
}
