use crate::errors::Result;
use crate::repo::hydration::select_where;
use crate::repo::repository::logged;
use crate::repo::{Entity, Repository};
use arcanum_core::model::{Course, EntityId};

impl Repository<Course> {
    /// Courses taught by `teacher_id`, by id
    pub fn by_teacher(&self, teacher_id: EntityId) -> Result<Vec<Course>> {
        logged("courses_by_teacher", Course::TABLE, || {
            self.factory()
                .read(|conn| select_where(conn, "teacher_id", &teacher_id))
        })
    }
}
