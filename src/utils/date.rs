//! Date parsing helpers: strict YYYY-MM-DD dates and period expressions
//! (YYYY, YYYY-MM, YYYY-MM-DD, or start:end ranges of the same).

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    if !re.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Expand a single period token into inclusive (from, to) bounds.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM (strict: zero-padded month)
    let re_month = regex::Regex::new(r"^\d{4}-\d{2}$").unwrap();
    if re_month.is_match(p)
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    let re_year = regex::Regex::new(r"^\d{4}$").unwrap();
    if re_year.is_match(p)
        && let Ok(year) = p.parse::<i32>()
    {
        let from = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        return Ok((from, to));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported forms: "YYYY", "YYYY-MM", "YYYY-MM-DD", and "start:end"
/// where both halves use any of the single forms.
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        if from > to {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }
        return Ok((from, to));
    }
    period_bounds(p)
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strict_dates_only() {
        assert!(parse_date("2025-06-02").is_some());
        assert!(parse_date("2025-6-2").is_none());
        assert!(parse_date("garbage").is_none());
    }

    #[test]
    fn expands_month_period() {
        let (from, to) = parse_period("2025-06").unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    }

    #[test]
    fn expands_year_and_range() {
        let (from, to) = parse_period("2024:2025-02").unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn rejects_unpadded_month() {
        assert!(parse_period("2025-9").is_err());
    }
}
