use crate::database::models::AttendanceRecord;
use crate::database::store::RecordStore;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

/// `RecordStore` backed by the `attendance_records` table.
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn record_from_row(row: &SqliteRow) -> Result<AttendanceRecord> {
    Ok(AttendanceRecord {
        id: Some(row.try_get("id")?),
        user_id: row.try_get("user_id")?,
        date: row.try_get("work_date")?,
        clock_in_time: row.try_get("clock_in_time")?,
        clock_out_time: row.try_get("clock_out_time")?,
        working_hours: row.try_get("working_hours")?,
        overtime_hours: row.try_get("overtime_hours")?,
        overtime_amount: row.try_get("overtime_amount")?,
    })
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn find_record_for_user_and_day(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> Result<Option<AttendanceRecord>> {
        let row_opt = sqlx::query(
            "SELECT id, user_id, work_date, clock_in_time, clock_out_time, working_hours, overtime_hours, overtime_amount
             FROM attendance_records
             WHERE user_id = ? AND work_date = ?",
        )
        .bind(user_id)
        .bind(day)
        .fetch_optional(&self.pool)
        .await?;

        match row_opt {
            Some(row) => Ok(Some(record_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, record: &AttendanceRecord) -> Result<AttendanceRecord> {
        sqlx::query(
            "INSERT INTO attendance_records
                 (user_id, work_date, clock_in_time, clock_out_time, working_hours, overtime_hours, overtime_amount)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (user_id, work_date) DO UPDATE SET
                 clock_in_time = excluded.clock_in_time,
                 clock_out_time = excluded.clock_out_time,
                 working_hours = excluded.working_hours,
                 overtime_hours = excluded.overtime_hours,
                 overtime_amount = excluded.overtime_amount,
                 updated_at = CURRENT_TIMESTAMP",
        )
        .bind(record.user_id.as_str())
        .bind(record.date)
        .bind(record.clock_in_time)
        .bind(record.clock_out_time)
        .bind(record.working_hours)
        .bind(record.overtime_hours)
        .bind(record.overtime_amount)
        .execute(&self.pool)
        .await?;

        self.find_record_for_user_and_day(&record.user_id, record.date)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Attendance record for {} on {} vanished after save",
                    record.user_id,
                    record.date
                )
            })
    }

    async fn find_records_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        let rows = sqlx::query(
            "SELECT id, user_id, work_date, clock_in_time, clock_out_time, working_hours, overtime_hours, overtime_amount
             FROM attendance_records
             WHERE user_id = ? AND work_date >= ? AND work_date <= ?
             ORDER BY work_date ASC",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }
}
