//! Notification dispatch seam. The scheduler talks to a `Notifier`;
//! the shipped implementation records messages in the outbox table,
//! leaving the actual transport (SMTP relay, chat webhook, ...) to
//! whatever drains the outbox.

use crate::db::outbox;
use crate::errors::AppResult;
use rusqlite::Connection;

pub trait Notifier {
    fn send(
        &self,
        conn: &Connection,
        kind: &str,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> AppResult<()>;
}

/// Default notifier: append to the outbox with status `sent`.
pub struct OutboxNotifier;

impl Notifier for OutboxNotifier {
    fn send(
        &self,
        conn: &Connection,
        kind: &str,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> AppResult<()> {
        outbox::push(conn, kind, recipient, subject, body, "sent")?;
        Ok(())
    }
}

/// Substitute `{name}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_known_placeholders() {
        let body = render(
            "Hello {employee_name}, lunch for {tomorrow_date}.",
            &[("employee_name", "Jane"), ("tomorrow_date", "June 03, 2025")],
        );
        assert_eq!(body, "Hello Jane, lunch for June 03, 2025.");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let body = render("Hi {employee_name} {unknown}", &[("employee_name", "Jo")]);
        assert_eq!(body, "Hi Jo {unknown}");
    }
}
