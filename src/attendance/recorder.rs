use crate::attendance::error::PunchError;
use crate::attendance::settings::{DuplicateClockInPolicy, Settings};
use crate::database::models::{AttendanceRecord, PunchKind};
use crate::database::store::RecordStore;
use crate::utils::format::{format_amount, format_hours};
use crate::utils::time::{format_time_local, hours_between, local_date, local_hour};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Overtime earned for a given number of worked hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overtime {
    pub hours: f64,
    pub amount: f64,
}

impl Overtime {
    pub fn from_working_hours(working_hours: f64, settings: &Settings) -> Self {
        if working_hours > settings.standard_hours {
            let hours = working_hours - settings.standard_hours;
            Self {
                hours,
                amount: hours * settings.hourly_rate,
            }
        } else {
            Self {
                hours: 0.0,
                amount: 0.0,
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct PunchOutcome {
    pub kind: PunchKind,
    pub record: AttendanceRecord,
    pub message: String,
}

pub struct AttendanceRecorder {
    store: Arc<dyn RecordStore>,
    settings: Settings,
}

impl AttendanceRecorder {
    pub fn new(store: Arc<dyn RecordStore>, settings: Settings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The caller's explicit kind wins; otherwise the local time of day decides.
    pub fn resolve_kind(&self, now: DateTime<Utc>, requested: Option<PunchKind>) -> PunchKind {
        requested.unwrap_or_else(|| {
            PunchKind::from_local_hour(
                local_hour(now, self.settings.utc_offset),
                self.settings.clock_out_from_hour,
            )
        })
    }

    pub async fn record_punch(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        requested: Option<PunchKind>,
    ) -> Result<PunchOutcome, PunchError> {
        let kind = self.resolve_kind(now, requested);
        let today = local_date(now, self.settings.utc_offset);
        debug!("Punch for {} on {}: {}", user_id, today, kind.as_str());

        let existing = self
            .store
            .find_record_for_user_and_day(user_id, today)
            .await?;

        let (record, message) = match kind {
            PunchKind::ClockIn => self.clock_in(user_id, today, existing, now)?,
            PunchKind::ClockOut => self.clock_out(existing, now)?,
        };

        let record = self.store.save(&record).await?;
        info!(
            "Recorded {} for user {} on {}",
            kind.as_str(),
            user_id,
            record.date
        );

        Ok(PunchOutcome {
            kind,
            record,
            message,
        })
    }

    fn clock_in(
        &self,
        user_id: &str,
        today: chrono::NaiveDate,
        existing: Option<AttendanceRecord>,
        now: DateTime<Utc>,
    ) -> Result<(AttendanceRecord, String), PunchError> {
        let offset = self.settings.utc_offset;
        let mut record = existing.unwrap_or_else(|| AttendanceRecord::new(user_id, today));

        let message = match record.clock_in_time {
            None => format!("Clocked in at {}", format_time_local(now, offset)),
            Some(previous) => match self.settings.duplicate_clock_in {
                DuplicateClockInPolicy::Reject => {
                    return Err(PunchError::AlreadyClockedIn {
                        clock_in_time: previous,
                    });
                }
                DuplicateClockInPolicy::Overwrite if record.is_completed() => {
                    return Err(PunchError::AlreadyClockedOut);
                }
                DuplicateClockInPolicy::Overwrite => format!(
                    "Clock-in updated to {} (was {})",
                    format_time_local(now, offset),
                    format_time_local(previous, offset)
                ),
            },
        };

        record.clock_in_time = Some(now);
        Ok((record, message))
    }

    fn clock_out(
        &self,
        existing: Option<AttendanceRecord>,
        now: DateTime<Utc>,
    ) -> Result<(AttendanceRecord, String), PunchError> {
        let mut record = existing.ok_or(PunchError::MissingClockIn)?;
        let clock_in_time = record.clock_in_time.ok_or(PunchError::MissingClockIn)?;
        if record.is_completed() {
            return Err(PunchError::AlreadyClockedOut);
        }

        let working_hours = hours_between(clock_in_time, now);
        if working_hours < 0.0 {
            return Err(PunchError::InsufficientData(format!(
                "clock-in at {} is later than clock-out",
                format_time_local(clock_in_time, self.settings.utc_offset)
            )));
        }

        let overtime = Overtime::from_working_hours(working_hours, &self.settings);
        record.clock_out_time = Some(now);
        record.working_hours = Some(working_hours);
        record.overtime_hours = overtime.hours;
        record.overtime_amount = overtime.amount;

        let mut message = format!(
            "Clocked out at {}\nWorking hours today: {} h",
            format_time_local(now, self.settings.utc_offset),
            format_hours(working_hours)
        );
        if overtime.hours > 0.0 {
            message.push_str(&format!(
                "\nOvertime: {} h\nOvertime pay: {} {}",
                format_hours(overtime.hours),
                self.settings.currency,
                format_amount(overtime.amount)
            ));
        }

        Ok((record, message))
    }
}
