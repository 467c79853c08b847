use crate::models::record::LunchRecord;
use serde::Serialize;

/// Flattened record row for CSV/JSON/PDF output.
#[derive(Debug, Clone, Serialize)]
pub struct RecordExport {
    pub employee: String,
    pub date: String,
    pub day: String,
    pub lunch_type: String,
    pub cost: f64,
    pub state: String,
    pub note: String,
}

impl From<&LunchRecord> for RecordExport {
    fn from(r: &LunchRecord) -> Self {
        Self {
            employee: r.employee.clone(),
            date: r.date_str(),
            day: r.day(),
            lunch_type: r.lunch_type.clone(),
            cost: r.cost,
            state: r.state.label().to_string(),
            note: r.note.clone(),
        }
    }
}

pub fn headers() -> [&'static str; 7] {
    ["Employee", "Date", "Day", "Lunch Type", "Cost", "State", "Remarks"]
}

pub fn to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.employee.clone(),
        r.date.clone(),
        r.day.clone(),
        r.lunch_type.clone(),
        format!("{:.2}", r.cost),
        r.state.clone(),
        r.note.clone(),
    ]
}
