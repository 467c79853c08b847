//! Timezone-aware clock. Every date, window check, and scheduler guard
//! runs against the configured timezone, not the host's local time.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct Clock {
    tz: Tz,
    frozen: Option<DateTime<Tz>>,
}

impl Clock {
    pub fn new(timezone: &str) -> AppResult<Self> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| AppError::Config(format!("Unknown timezone: {timezone}")))?;
        Ok(Self { tz, frozen: None })
    }

    /// Freeze the clock at a fixed instant (hidden `--at` flag, tests).
    /// Accepts RFC3339 or a naive "YYYY-MM-DD HH:MM" interpreted in the
    /// configured timezone.
    pub fn freeze(mut self, at: &str) -> AppResult<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(at) {
            self.frozen = Some(dt.with_timezone(&self.tz));
            return Ok(self);
        }

        let naive = NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M"))
            .map_err(|_| AppError::InvalidTime(at.to_string()))?;

        let dt = self
            .tz
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| AppError::InvalidTime(at.to_string()))?;
        self.frozen = Some(dt);
        Ok(self)
    }

    pub fn now(&self) -> DateTime<Tz> {
        match self.frozen {
            Some(dt) => dt,
            None => Utc::now().with_timezone(&self.tz),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Hour-of-day as a float (minutes as fractions), the unit both the
    /// confirmation window and the dispatch window are configured in.
    pub fn current_hour(&self) -> f64 {
        let now = self.now();
        now.hour() as f64 + now.minute() as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_clock_reports_configured_zone() {
        let clock = Clock::new("Asia/Kathmandu")
            .unwrap()
            .freeze("2025-06-02 13:30")
            .unwrap();
        assert_eq!(
            clock.today(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert!((clock.current_hour() - 13.5).abs() < 1e-9);
    }

    #[test]
    fn rfc3339_instants_convert_into_zone() {
        // 07:45 UTC is 13:30 in Kathmandu (+05:45).
        let clock = Clock::new("Asia/Kathmandu")
            .unwrap()
            .freeze("2025-06-02T07:45:00+00:00")
            .unwrap();
        assert!((clock.current_hour() - 13.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_timezone_is_a_config_error() {
        assert!(Clock::new("Mars/Olympus").is_err());
    }
}
