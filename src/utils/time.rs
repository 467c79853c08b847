//! Time utilities: HH:MM ↔ float-hour conversions used by the
//! confirmation window and the reminder dispatch window.

use crate::errors::{AppError, AppResult};

/// Render a float hour (13.5) as a wall clock string ("13:30").
pub fn format_clock(float_time: f64) -> String {
    let hours = float_time.trunc() as u32;
    let minutes = ((float_time - float_time.trunc()) * 60.0).round() as u32;
    format!("{:02}:{:02}", hours, minutes % 60)
}

/// Parse an "HH:MM" string into a float hour in [0, 24).
pub fn parse_clock(s: &str) -> AppResult<f64> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    let hours: u32 = h.parse().map_err(|_| AppError::InvalidTime(s.to_string()))?;
    let minutes: u32 = m.parse().map_err(|_| AppError::InvalidTime(s.to_string()))?;
    if hours >= 24 || minutes >= 60 {
        return Err(AppError::InvalidTime(s.to_string()));
    }
    Ok(hours as f64 + minutes as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_round_trips() {
        assert_eq!(format_clock(13.5), "13:30");
        assert_eq!(format_clock(14.0), "14:00");
        assert_eq!(parse_clock("13:30").unwrap(), 13.5);
    }

    #[test]
    fn rejects_out_of_range_clock() {
        assert!(parse_clock("24:00").is_err());
        assert!(parse_clock("12:60").is_err());
        assert!(parse_clock("noon").is_err());
    }
}
