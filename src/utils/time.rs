use anyhow::Result;
use chrono::{DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, Timelike, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub fn offset_from_hours(hours: i32) -> Result<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| anyhow::anyhow!("UTC offset out of range: {} hours", hours))
}

pub fn local_date(timestamp: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    timestamp.with_timezone(&offset).date_naive()
}

pub fn local_hour(timestamp: DateTime<Utc>, offset: FixedOffset) -> u32 {
    timestamp.with_timezone(&offset).hour()
}

pub fn format_time_local(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    timestamp.with_timezone(&offset).format("%H:%M:%S").to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Fractional hours from `start` to `end`, at millisecond precision.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    end.signed_duration_since(start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Days::new(u64::from(date.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn offset_rejects_out_of_range_hours() {
        assert_eq!(offset_from_hours(9).unwrap().local_minus_utc(), 9 * 3600);
        assert_eq!(offset_from_hours(-5).unwrap().local_minus_utc(), -5 * 3600);
        assert!(offset_from_hours(24).is_err());
        assert!(offset_from_hours(i32::MAX).is_err());
    }

    #[test]
    fn local_day_and_hour_follow_offset() {
        let offset = offset_from_hours(8).unwrap();
        // 17:30 UTC is 01:30 the next morning at UTC+8.
        let ts = Utc.with_ymd_and_hms(2024, 1, 31, 17, 30, 0).unwrap();
        assert_eq!(local_date(ts, offset), ymd(2024, 2, 1));
        assert_eq!(local_hour(ts, offset), 1);
        assert_eq!(format_time_local(ts, offset), "01:30:00");
    }

    #[test]
    fn hours_between_is_fractional() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 11, 30, 0).unwrap();
        assert_eq!(hours_between(start, end), 10.5);
        assert_eq!(hours_between(start, start), 0.0);
        assert!(hours_between(end, start) < 0.0);
    }

    #[test]
    fn month_bounds_cover_whole_month() {
        assert_eq!(month_bounds(ymd(2024, 2, 14)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(month_bounds(ymd(2023, 2, 1)), (ymd(2023, 2, 1), ymd(2023, 2, 28)));
        assert_eq!(month_bounds(ymd(2024, 12, 31)), (ymd(2024, 12, 1), ymd(2024, 12, 31)));
        assert_eq!(month_bounds(ymd(2024, 4, 30)), (ymd(2024, 4, 1), ymd(2024, 4, 30)));
    }

    #[test]
    fn week_starts_on_monday() {
        // 2024-05-01 is a Wednesday.
        assert_eq!(week_start(ymd(2024, 5, 1)), ymd(2024, 4, 29));
        assert_eq!(week_start(ymd(2024, 4, 29)), ymd(2024, 4, 29));
        assert_eq!(week_start(ymd(2024, 5, 5)), ymd(2024, 4, 29));
    }

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(format_date(ymd(2024, 3, 7)), "2024-03-07");
    }
}
