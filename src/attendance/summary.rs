use crate::database::models::AttendanceRecord;
use crate::database::store::RecordStore;
use crate::utils::format::{format_amount, format_hours};
use crate::utils::time::{format_date, format_time_local, month_bounds, week_start};
use anyhow::Result;
use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// How many entries the weekly presentation shows at most.
pub const DISPLAY_LIMIT: usize = 30;

const MISSING_PUNCH: &str = "--:--:--";

/// One record rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub date: NaiveDate,
    pub date_label: String,
    pub clock_in: String,
    pub clock_out: String,
    pub working_hours: String,
    pub overtime_hours: String,
    pub overtime_amount: String,
}

impl SummaryEntry {
    fn from_record(record: &AttendanceRecord, offset: FixedOffset) -> Self {
        let punch = |time: Option<chrono::DateTime<chrono::Utc>>| {
            time.map(|t| format_time_local(t, offset))
                .unwrap_or_else(|| MISSING_PUNCH.to_string())
        };

        Self {
            date: record.date,
            date_label: format_date(record.date),
            clock_in: punch(record.clock_in_time),
            clock_out: punch(record.clock_out_time),
            working_hours: display_hours(record.working_hours.unwrap_or(0.0)),
            overtime_hours: display_hours(record.overtime_hours),
            overtime_amount: display_amount(record.overtime_amount),
        }
    }
}

/// Entries of one Monday-started week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekGroup {
    pub week_start: NaiveDate,
    pub entries: Vec<SummaryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub user_id: String,
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub entries: Vec<SummaryEntry>,
    pub total_overtime_hours: f64,
    pub total_overtime_amount: f64,
}

impl MonthlySummary {
    pub fn build(
        user_id: &str,
        month_start: NaiveDate,
        month_end: NaiveDate,
        records: &[AttendanceRecord],
        offset: FixedOffset,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            month_start,
            month_end,
            entries: records
                .iter()
                .map(|record| SummaryEntry::from_record(record, offset))
                .collect(),
            total_overtime_hours: records.iter().map(|r| r.overtime_hours).sum(),
            total_overtime_amount: records.iter().map(|r| r.overtime_amount).sum(),
        }
    }

    pub fn total_overtime_hours_display(&self) -> String {
        format_hours(self.total_overtime_hours)
    }

    pub fn total_overtime_amount_display(&self) -> String {
        format_amount(self.total_overtime_amount)
    }

    /// The first `limit` entries, grouped by week in date order.
    pub fn weeks(&self, limit: usize) -> Vec<WeekGroup> {
        let mut groups: Vec<WeekGroup> = Vec::new();
        for entry in self.entries.iter().take(limit) {
            let start = week_start(entry.date);
            match groups.last_mut() {
                Some(group) if group.week_start == start => group.entries.push(entry.clone()),
                _ => groups.push(WeekGroup {
                    week_start: start,
                    entries: vec![entry.clone()],
                }),
            }
        }
        groups
    }

    pub fn is_truncated(&self, limit: usize) -> bool {
        self.entries.len() > limit
    }
}

pub struct MonthlyAggregator {
    store: Arc<dyn RecordStore>,
    utc_offset: FixedOffset,
}

impl MonthlyAggregator {
    pub fn new(store: Arc<dyn RecordStore>, utc_offset: FixedOffset) -> Self {
        Self { store, utc_offset }
    }

    pub async fn monthly_summary(
        &self,
        user_id: &str,
        reference_date: NaiveDate,
    ) -> Result<MonthlySummary> {
        let (month_start, month_end) = month_bounds(reference_date);
        let records = self
            .store
            .find_records_in_range(user_id, month_start, month_end)
            .await?;
        debug!(
            "Found {} records for {} between {} and {}",
            records.len(),
            user_id,
            month_start,
            month_end
        );

        Ok(MonthlySummary::build(
            user_id,
            month_start,
            month_end,
            &records,
            self.utc_offset,
        ))
    }
}

fn display_hours(hours: f64) -> String {
    if hours == 0.0 {
        "0".to_string()
    } else {
        format_hours(hours)
    }
}

fn display_amount(amount: f64) -> String {
    if amount == 0.0 {
        "0".to_string()
    } else {
        format_amount(amount)
    }
}
