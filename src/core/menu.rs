//! The weekday menu rule: which lunch category a date gets, and which
//! dates are valid lunch days at all.
//!
//! Monday and Friday serve "Non-Veg"; Tuesday, Wednesday, Thursday, and
//! Sunday serve "Veg"; Saturday is the weekly holiday and is rejected at
//! the call site before the rule is consulted. The rule is hardcoded by
//! policy, but kept behind this module so it could become data-driven
//! without touching the state machine.

use chrono::{Datelike, NaiveDate, Weekday};

pub const NON_VEG: &str = "Non-Veg";
pub const VEG: &str = "Veg";

pub fn is_holiday(date: &NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

/// Lunch type name for a date, or None on the Saturday holiday.
pub fn lunch_type_for(date: &NaiveDate) -> Option<&'static str> {
    match date.weekday() {
        Weekday::Sat => None,
        Weekday::Mon | Weekday::Fri => Some(NON_VEG),
        _ => Some(VEG),
    }
}

/// The next date a lunch can be booked for: tomorrow, skipping the
/// Saturday holiday.
pub fn next_lunch_date(today: NaiveDate) -> NaiveDate {
    let mut d = today.succ_opt().expect("date overflow");
    if is_holiday(&d) {
        d = d.succ_opt().expect("date overflow");
    }
    d
}

pub fn weekday_name(date: &NaiveDate) -> String {
    date.format("%A").to_string()
}
