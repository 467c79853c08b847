use serde::Serialize;

/// An employee who can hold lunch records and receive reminders.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl Employee {
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}
