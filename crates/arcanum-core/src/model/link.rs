//! Relationship helpers for many-to-many and one-to-one pairs
//!
//! Each helper mutates both sides of a bidirectional relationship so the
//! two in-memory views cannot drift apart. Join-table relationships are
//! keyed by identity, so both entities must already be stored. Only the
//! owning side is written back by the store; the inverse side is updated
//! here so the caller's values stay consistent until the next load.

use crate::errors::{ArcanumError, Result};

use super::{Course, Creature, EntityId, Event, House, Student, Teacher};

fn stored(id: Option<EntityId>, entity: &'static str) -> Result<EntityId> {
    id.ok_or(ArcanumError::Transient { entity })
}

/// Enroll a student in a course (Course↔Student)
pub fn enroll(course: &mut Course, student: &mut Student) -> Result<()> {
    let course_id = stored(course.id, "course")?;
    let student_id = stored(student.id, "student")?;
    course.student_ids.insert(student_id);
    student.course_ids.insert(course_id);
    Ok(())
}

/// Remove a student from a course
pub fn withdraw(course: &mut Course, student: &mut Student) -> Result<()> {
    let course_id = stored(course.id, "course")?;
    let student_id = stored(student.id, "student")?;
    course.student_ids.remove(&student_id);
    student.course_ids.remove(&course_id);
    Ok(())
}

/// Register a student as attending an event (Event↔Student)
pub fn register_attendee(event: &mut Event, student: &mut Student) -> Result<()> {
    let event_id = stored(event.id, "event")?;
    let student_id = stored(student.id, "student")?;
    event.student_ids.insert(student_id);
    student.event_ids.insert(event_id);
    Ok(())
}

/// Drop a student from an event's attendees
pub fn unregister_attendee(event: &mut Event, student: &mut Student) -> Result<()> {
    let event_id = stored(event.id, "event")?;
    let student_id = stored(student.id, "student")?;
    event.student_ids.remove(&student_id);
    student.event_ids.remove(&event_id);
    Ok(())
}

/// Register a creature as appearing at an event (Event↔Creature)
pub fn register_creature(event: &mut Event, creature: &mut Creature) -> Result<()> {
    let event_id = stored(event.id, "event")?;
    let creature_id = stored(creature.id, "creature")?;
    event.creature_ids.insert(creature_id);
    creature.event_ids.insert(event_id);
    Ok(())
}

/// Drop a creature from an event
pub fn unregister_creature(event: &mut Event, creature: &mut Creature) -> Result<()> {
    let event_id = stored(event.id, "event")?;
    let creature_id = stored(creature.id, "creature")?;
    event.creature_ids.remove(&creature_id);
    creature.event_ids.remove(&event_id);
    Ok(())
}

/// Make `teacher` the head of `house` (one-to-one Teacher→House)
///
/// The House must be stored. The Teacher may still be transient; the
/// House's inverse view then picks up the identity on the next load.
pub fn appoint_head(house: &mut House, teacher: &mut Teacher) -> Result<()> {
    let house_id = stored(house.id, "house")?;
    teacher.house_id = Some(house_id);
    house.head_teacher_id = teacher.id;
    Ok(())
}
