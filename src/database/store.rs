//! Storage seam between the attendance logic and whatever keeps the records.

use crate::database::models::AttendanceRecord;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The record of `user_id` for the given local day, if one exists.
    async fn find_record_for_user_and_day(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> Result<Option<AttendanceRecord>>;

    /// Insert or update the record keyed by (user, day) and return it as stored.
    async fn save(&self, record: &AttendanceRecord) -> Result<AttendanceRecord>;

    /// Records of `user_id` with `start <= date <= end`, oldest first.
    async fn find_records_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>>;
}
