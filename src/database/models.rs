use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One user's attendance for one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Row id, `None` until the record has been saved once.
    pub id: Option<i64>,
    pub user_id: String,
    pub date: NaiveDate,
    pub clock_in_time: Option<DateTime<Utc>>,
    pub clock_out_time: Option<DateTime<Utc>>,
    pub working_hours: Option<f64>,
    pub overtime_hours: f64,
    pub overtime_amount: f64,
}

impl AttendanceRecord {
    pub fn new(user_id: &str, date: NaiveDate) -> Self {
        Self {
            id: None,
            user_id: user_id.to_string(),
            date,
            clock_in_time: None,
            clock_out_time: None,
            working_hours: None,
            overtime_hours: 0.0,
            overtime_amount: 0.0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.clock_out_time.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchKind {
    ClockIn,
    ClockOut,
}

impl PunchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "clock_in",
            PunchKind::ClockOut => "clock_out",
        }
    }

    /// Fallback direction for a punch without an explicit kind.
    pub fn from_local_hour(hour: u32, clock_out_from_hour: u32) -> Self {
        if hour < clock_out_from_hour {
            PunchKind::ClockIn
        } else {
            PunchKind::ClockOut
        }
    }
}
