use chrono::{FixedOffset, Offset, Utc};
use std::str::FromStr;

/// What to do when a user clocks in twice on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateClockInPolicy {
    /// Keep the first clock-in and answer with `AlreadyClockedIn`.
    Reject,
    /// Replace the earlier clock-in time, as long as the day is still open.
    Overwrite,
}

impl DuplicateClockInPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateClockInPolicy::Reject => "reject",
            DuplicateClockInPolicy::Overwrite => "overwrite",
        }
    }
}

impl FromStr for DuplicateClockInPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicateClockInPolicy::Reject),
            "overwrite" => Ok(DuplicateClockInPolicy::Overwrite),
            other => Err(anyhow::anyhow!(
                "Invalid duplicate clock-in policy: {} (expected `reject` or `overwrite`)",
                other
            )),
        }
    }
}

/// Payroll and calendar rules injected into the recorder and aggregator.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Daily threshold in hours; only time beyond it counts as overtime.
    pub standard_hours: f64,
    /// Pay per overtime hour.
    pub hourly_rate: f64,
    /// Label printed in front of pay amounts.
    pub currency: String,
    /// Local offset used for "today", the fallback cutoff and displayed times.
    pub utc_offset: FixedOffset,
    /// Local hour from which an unqualified punch counts as a clock-out.
    pub clock_out_from_hour: u32,
    pub duplicate_clock_in: DuplicateClockInPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            standard_hours: 8.0,
            hourly_rate: 150.0,
            currency: "NT$".to_string(),
            utc_offset: FixedOffset::east_opt(8 * 3600).unwrap_or_else(|| Utc.fix()),
            clock_out_from_hour: 12,
            duplicate_clock_in: DuplicateClockInPolicy::Reject,
        }
    }
}
