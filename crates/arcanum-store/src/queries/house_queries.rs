use crate::errors::{from_rusqlite, Result};
use crate::queries::statement::BulkUpdate;
use crate::repo::repository::logged;
use crate::repo::{Entity, Repository};
use arcanum_core::model::House;

const UPDATE_SCORE_BY_NAME: BulkUpdate = BulkUpdate {
    table: House::TABLE,
    set_column: "total_score",
    where_column: "name",
};

impl Repository<House> {
    /// Names of houses scoring strictly more than `threshold`, by id
    pub fn names_with_score_above(&self, threshold: i64) -> Result<Vec<String>> {
        logged("house_names_above_score", House::TABLE, || {
            self.factory().read(|conn| {
                let mut stmt = conn
                    .prepare("SELECT name FROM houses WHERE total_score > ?1 ORDER BY id ASC")
                    .map_err(from_rusqlite)?;
                let names = stmt
                    .query_map([threshold], |row| row.get(0))
                    .map_err(from_rusqlite)?
                    .collect::<std::result::Result<Vec<String>, _>>()
                    .map_err(from_rusqlite)?;
                Ok(names)
            })
        })
    }

    /// Set the score of every house called `name`; returns rows changed
    pub fn update_score_by_name(&self, score: i64, name: &str) -> Result<usize> {
        logged("house_update_score", House::TABLE, || {
            self.factory()
                .in_transaction("house_update_score", |conn| {
                    UPDATE_SCORE_BY_NAME.execute(conn, &score, &name)
                })
        })
    }
}
