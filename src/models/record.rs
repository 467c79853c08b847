use super::record_state::RecordState;
use chrono::NaiveDate;
use serde::Serialize;

/// A single employee lunch record for one calendar date.
///
/// `employee`, `lunch_type`, and `cost` are joined in at read time;
/// `cost` is the current cost of the referenced lunch type, never a
/// stored copy. The weekday is derived from `date`.
#[derive(Debug, Clone, Serialize)]
pub struct LunchRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee: String,
    pub date: NaiveDate, // ⇔ lunch_records.date (TEXT "YYYY-MM-DD")
    pub lunch_type_id: i64,
    pub lunch_type: String,
    pub cost: f64,
    pub note: String,
    pub state: RecordState,
    pub is_admin_request: bool,
    pub created_at: String, // ISO8601
}

impl LunchRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Weekday name ("Monday", ...), derived from the date.
    pub fn day(&self) -> String {
        self.date.format("%A").to_string()
    }

    /// Human reference, e.g. "Jane Smith - 2025-06-02".
    pub fn reference(&self) -> String {
        format!("{} - {}", self.employee, self.date_str())
    }
}
