use crate::attendance::{DuplicateClockInPolicy, Settings};
use crate::utils::time::offset_from_hours;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub settings: Settings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .ok_or_else(|| anyhow::anyhow!("DISCORD_TOKEN environment variable is required"))?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:overtime.db".to_string());

        let defaults = Settings::default();
        let utc_offset = match parse_var::<i32, _>(&lookup, "UTC_OFFSET_HOURS")? {
            Some(hours) => offset_from_hours(hours)?,
            None => defaults.utc_offset,
        };

        let clock_out_from_hour = parse_var::<u32, _>(&lookup, "CLOCK_OUT_FROM_HOUR")?
            .unwrap_or(defaults.clock_out_from_hour);
        if clock_out_from_hour > 24 {
            anyhow::bail!("CLOCK_OUT_FROM_HOUR must be between 0 and 24");
        }

        let standard_hours =
            parse_var::<f64, _>(&lookup, "STANDARD_HOURS")?.unwrap_or(defaults.standard_hours);
        let hourly_rate =
            parse_var::<f64, _>(&lookup, "HOURLY_RATE")?.unwrap_or(defaults.hourly_rate);
        if !standard_hours.is_finite() || standard_hours < 0.0 {
            anyhow::bail!("STANDARD_HOURS must be a non-negative number");
        }
        if !hourly_rate.is_finite() || hourly_rate < 0.0 {
            anyhow::bail!("HOURLY_RATE must be a non-negative number");
        }

        let duplicate_clock_in =
            parse_var::<DuplicateClockInPolicy, _>(&lookup, "DUPLICATE_CLOCK_IN")?
                .unwrap_or(defaults.duplicate_clock_in);

        let currency = lookup("CURRENCY").unwrap_or(defaults.currency);

        Ok(Config {
            discord_token,
            database_url,
            settings: Settings {
                standard_hours,
                hourly_rate,
                currency,
                utc_offset,
                clock_out_from_hour,
                duplicate_clock_in,
            },
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn token_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("DISCORD_TOKEN"));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[("DISCORD_TOKEN", "t")]).unwrap();
        assert_eq!(config.database_url, "sqlite:overtime.db");
        assert_eq!(config.settings.standard_hours, 8.0);
        assert_eq!(config.settings.hourly_rate, 150.0);
        assert_eq!(config.settings.currency, "NT$");
        assert_eq!(config.settings.utc_offset.local_minus_utc(), 8 * 3600);
        assert_eq!(config.settings.clock_out_from_hour, 12);
        assert_eq!(
            config.settings.duplicate_clock_in,
            DuplicateClockInPolicy::Reject
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "t"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("UTC_OFFSET_HOURS", "9"),
            ("STANDARD_HOURS", "7.5"),
            ("HOURLY_RATE", "200"),
            ("CURRENCY", "¥"),
            ("CLOCK_OUT_FROM_HOUR", "13"),
            ("DUPLICATE_CLOCK_IN", "overwrite"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.settings.utc_offset.local_minus_utc(), 9 * 3600);
        assert_eq!(config.settings.standard_hours, 7.5);
        assert_eq!(config.settings.hourly_rate, 200.0);
        assert_eq!(config.settings.currency, "¥");
        assert_eq!(config.settings.clock_out_from_hour, 13);
        assert_eq!(
            config.settings.duplicate_clock_in,
            DuplicateClockInPolicy::Overwrite
        );
    }

    #[test]
    fn invalid_values_are_errors() {
        for (key, value) in [
            ("HOURLY_RATE", "lots"),
            ("HOURLY_RATE", "-1"),
            ("STANDARD_HOURS", "NaN"),
            ("UTC_OFFSET_HOURS", "30"),
            ("CLOCK_OUT_FROM_HOUR", "25"),
            ("DUPLICATE_CLOCK_IN", "maybe"),
        ] {
            let result = config_from(&[("DISCORD_TOKEN", "t"), (key, value)]);
            assert!(result.is_err(), "{}={} should be rejected", key, value);
        }
    }
}
