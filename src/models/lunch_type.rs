use serde::Serialize;

/// A lunch category (e.g. "Veg" / "Non-Veg") with its unit cost.
/// Referenced, never owned, by lunch records.
#[derive(Debug, Clone, Serialize)]
pub struct LunchType {
    pub id: i64,
    pub name: String,
    pub cost: f64,
    pub note: String,
}
