use crate::errors::{from_rusqlite, Result};
use crate::queries::statement::BulkDelete;
use crate::repo::hydration::select_where;
use crate::repo::repository::logged;
use crate::repo::{Entity, Repository};
use arcanum_core::errors::ArcanumError;
use arcanum_core::model::{EntityId, Student};

const DELETE_BY_NAME: BulkDelete = BulkDelete {
    table: Student::TABLE,
    where_column: "name",
};

impl Repository<Student> {
    /// Every student's name, by id
    pub fn names(&self) -> Result<Vec<String>> {
        logged("student_names", Student::TABLE, || {
            self.factory().read(|conn| {
                let mut stmt = conn
                    .prepare("SELECT name FROM students ORDER BY id ASC")
                    .map_err(from_rusqlite)?;
                let names = stmt
                    .query_map([], |row| row.get(0))
                    .map_err(from_rusqlite)?
                    .collect::<std::result::Result<Vec<String>, _>>()
                    .map_err(from_rusqlite)?;
                Ok(names)
            })
        })
    }

    /// `(name, age)` for every student, by id
    pub fn names_and_ages(&self) -> Result<Vec<(String, i64)>> {
        logged("student_names_and_ages", Student::TABLE, || {
            self.factory().read(|conn| {
                let mut stmt = conn
                    .prepare("SELECT name, age FROM students ORDER BY id ASC")
                    .map_err(from_rusqlite)?;
                let pairs = stmt
                    .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
                    .map_err(from_rusqlite)?
                    .collect::<std::result::Result<Vec<(String, i64)>, _>>()
                    .map_err(from_rusqlite)?;
                Ok(pairs)
            })
        })
    }

    /// Students whose house is `house_id`
    pub fn in_house(&self, house_id: EntityId) -> Result<Vec<Student>> {
        logged("students_in_house", Student::TABLE, || {
            self.factory()
                .read(|conn| select_where(conn, "house_id", &house_id))
        })
    }

    /// Mean age over all students
    ///
    /// With no students there is nothing to average and the query fails
    /// with an empty-aggregate error.
    pub fn average_age(&self) -> Result<f64> {
        logged("student_average_age", Student::TABLE, || {
            let average: Option<f64> = self.factory().read(|conn| {
                conn.query_row("SELECT AVG(age) FROM students", [], |row| row.get(0))
                    .map_err(from_rusqlite)
            })?;
            average.ok_or_else(|| {
                ArcanumError::EmptyAggregate {
                    query: "student_average_age",
                }
                .into()
            })
        })
    }

    /// Delete every student called `name`; returns rows removed
    ///
    /// Their course and event memberships go with them.
    pub fn delete_by_name(&self, name: &str) -> Result<usize> {
        logged("student_delete_by_name", Student::TABLE, || {
            self.factory()
                .in_transaction("student_delete_by_name", |conn| {
                    DELETE_BY_NAME.execute(conn, &name)
                })
        })
    }
}
