/// Singleton configuration for the daily reminder dispatch.
///
/// `last_sent_date` is the idempotency guard: it is written once per
/// timezone-day, after the dispatch loop completes.
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    pub email_time: f64,
    pub template_id: Option<i64>,
    pub is_active: bool,
    pub last_sent_date: String,
}

/// A reminder message template. Placeholders `{employee_name}` and
/// `{tomorrow_date}` are substituted at dispatch time.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub body: String,
}
