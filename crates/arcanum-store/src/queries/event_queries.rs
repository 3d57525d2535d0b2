use crate::errors::{from_rusqlite, Result};
use crate::repo::repository::logged;
use crate::repo::{Entity, Repository};
use arcanum_core::model::Event;
use chrono::NaiveDate;

impl Repository<Event> {
    /// `(name, date)` of events held at `location`, earliest first
    ///
    /// Events on the same date keep id order.
    pub fn at_location_by_date(&self, location: &str) -> Result<Vec<(String, NaiveDate)>> {
        logged("events_at_location_by_date", Event::TABLE, || {
            self.factory().read(|conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT name, date FROM events WHERE location = ?1 ORDER BY date ASC, id ASC",
                    )
                    .map_err(from_rusqlite)?;
                let events = stmt
                    .query_map([location], |row| Ok((row.get(0)?, row.get(1)?)))
                    .map_err(from_rusqlite)?
                    .collect::<std::result::Result<Vec<(String, NaiveDate)>, _>>()
                    .map_err(from_rusqlite)?;
                Ok(events)
            })
        })
    }
}
