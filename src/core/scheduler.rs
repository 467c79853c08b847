//! Daily reminder dispatch.
//!
//! Runs from a recurring timer (`remind tick` under cron). At most one
//! dispatch per timezone-day: the `last_sent_date` guard is written after
//! the dispatch loop completes, regardless of per-recipient failures.
//! Per-recipient send errors are logged and counted; they never abort the
//! batch. Precondition misses (no config, already sent, outside the
//! window, no recipients) log and return without error.

use crate::core::clock::Clock;
use crate::db::{employees, log::ttlog, settings};
use crate::errors::{AppError, AppResult};
use crate::models::reminder::{ReminderConfig, Template};
use crate::notify::{self, Notifier};
use crate::ui::messages::{info, warning};
use rusqlite::Connection;

pub const DEFAULT_TEMPLATE_NAME: &str = "Lunch Reminder";

const DEFAULT_SUBJECT: &str = "Lunch Reminder - Fill Tomorrow's Form";
const DEFAULT_BODY: &str = "Hello {employee_name},\n\n\
This is a friendly reminder to fill in your lunch form for {tomorrow_date}.\n\
Please make sure to confirm your lunch before the deadline to ensure your meal is prepared.\n\n\
This is an automated message. Please do not reply.";

#[derive(Debug, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: u32,
    pub failed: u32,
}

/// The template referenced by the config, or the default one, created
/// once on first use and stored back into the config.
fn resolve_template(conn: &Connection, cfg: &ReminderConfig) -> AppResult<Template> {
    if let Some(id) = cfg.template_id
        && let Some(t) = settings::get_template(conn, id)?
    {
        return Ok(t);
    }

    let template = match settings::find_template_by_name(conn, DEFAULT_TEMPLATE_NAME)? {
        Some(t) => t,
        None => {
            let id =
                settings::insert_template(conn, DEFAULT_TEMPLATE_NAME, DEFAULT_SUBJECT, DEFAULT_BODY)?;
            settings::get_template(conn, id)?
                .ok_or_else(|| AppError::Other("template vanished after insert".to_string()))?
        }
    };
    settings::set_template_id(conn, template.id)?;
    Ok(template)
}

/// One scheduler pass. Returns None when a precondition aborted the run.
pub fn run(conn: &Connection, notifier: &dyn Notifier, clock: &Clock) -> AppResult<Option<DispatchReport>> {
    let Some(cfg) = settings::active_reminder_config(conn)? else {
        warning("No active reminder configuration found.");
        ttlog(conn, "remind", "", "No active reminder configuration found")?;
        return Ok(None);
    };

    let today = clock.today().to_string();
    if cfg.last_sent_date == today {
        info("Reminders already sent today. Skipping.");
        ttlog(conn, "remind", "", "Reminders already sent today")?;
        return Ok(None);
    }

    let current_hour = clock.current_hour();
    if !(cfg.email_time <= current_hour && current_hour <= cfg.email_time + 1.0) {
        ttlog(
            conn,
            "remind",
            "",
            &format!(
                "Not time to send yet. Current: {:.2}, Target: {:.2}",
                current_hour, cfg.email_time
            ),
        )?;
        return Ok(None);
    }

    let recipients = employees::active_with_email(conn)?;
    if recipients.is_empty() {
        warning("No employees with email found.");
        ttlog(conn, "remind", "", "No employees with email found")?;
        return Ok(None);
    }

    let template = resolve_template(conn, &cfg)?;

    let tomorrow = clock
        .today()
        .succ_opt()
        .expect("date overflow")
        .format("%B %d, %Y")
        .to_string();

    let mut sent = 0u32;
    let mut failed = 0u32;

    for emp in &recipients {
        let vars = [
            ("employee_name", emp.name.as_str()),
            ("tomorrow_date", tomorrow.as_str()),
        ];
        let subject = notify::render(&template.subject, &vars);
        let body = notify::render(&template.body, &vars);

        match notifier.send(conn, "reminder", &emp.email, &subject, &body) {
            Ok(()) => {
                sent += 1;
                ttlog(conn, "remind", &emp.name, "Reminder sent")?;
            }
            Err(e) => {
                failed += 1;
                ttlog(conn, "remind", &emp.name, &format!("Failed to send reminder: {e}"))?;
            }
        }
    }

    // Written once the recipient fetch succeeded, even on a full-batch
    // send failure.
    settings::set_last_sent(conn, &today)?;
    ttlog(
        conn,
        "remind",
        "",
        &format!("Reminder dispatch completed. Sent: {sent}, Failed: {failed}"),
    )?;

    Ok(Some(DispatchReport { sent, failed }))
}

/// Manual trigger: clears the already-sent guard, then runs the normal
/// pass. The dispatch window still applies.
pub fn send_now(
    conn: &Connection,
    notifier: &dyn Notifier,
    clock: &Clock,
) -> AppResult<Option<DispatchReport>> {
    settings::set_last_sent(conn, "")?;
    run(conn, notifier, clock)
}

/// Send a single test message to the operator's own employee identity,
/// bypassing every guard. Returns the address the message went to.
pub fn send_test(
    conn: &Connection,
    notifier: &dyn Notifier,
    clock: &Clock,
    operator: Option<&str>,
) -> AppResult<String> {
    let name = operator.ok_or(AppError::Identity)?;
    let emp = employees::find_by_name(conn, name)?.ok_or(AppError::Identity)?;
    if !emp.has_email() {
        return Err(AppError::Other(
            "Current user has no employee record or email!".to_string(),
        ));
    }

    let cfg = settings::configure_reminder(conn, None, None)?;
    let template = resolve_template(conn, &cfg)?;

    let tomorrow = clock
        .today()
        .succ_opt()
        .expect("date overflow")
        .format("%B %d, %Y")
        .to_string();
    let vars = [
        ("employee_name", emp.name.as_str()),
        ("tomorrow_date", tomorrow.as_str()),
    ];

    notifier.send(
        conn,
        "test",
        &emp.email,
        &notify::render(&template.subject, &vars),
        &notify::render(&template.body, &vars),
    )?;

    ttlog(conn, "remind", &emp.name, "Test reminder sent")?;
    Ok(emp.email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::notify::OutboxNotifier;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        init_db(&conn).expect("init schema");
        conn
    }

    fn seed_employee(conn: &Connection, name: &str, email: &str) {
        employees::insert(conn, name, email).expect("insert employee");
    }

    fn clock_at(at: &str) -> Clock {
        Clock::new("Asia/Kathmandu")
            .unwrap()
            .freeze(at)
            .unwrap()
    }

    fn outbox_count(conn: &Connection, kind: &str) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM outbox WHERE kind = ?1",
            [kind],
            |row| row.get(0),
        )
        .unwrap()
    }

    fn last_sent(conn: &Connection) -> String {
        settings::get_reminder_config(conn)
            .unwrap()
            .unwrap()
            .last_sent_date
    }

    /// Notifier that rejects one specific address.
    struct RejectingNotifier(&'static str);

    impl Notifier for RejectingNotifier {
        fn send(
            &self,
            conn: &Connection,
            kind: &str,
            recipient: &str,
            subject: &str,
            body: &str,
        ) -> AppResult<()> {
            if recipient == self.0 {
                return Err(AppError::Other("mailbox unavailable".to_string()));
            }
            OutboxNotifier.send(conn, kind, recipient, subject, body)
        }
    }

    #[test]
    fn second_run_same_day_is_a_noop() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        seed_employee(&conn, "John Doe", "john@example.com");
        settings::configure_reminder(&conn, Some(14.0), Some(true)).unwrap();

        let clock = clock_at("2025-06-02 14:10");
        let first = run(&conn, &OutboxNotifier, &clock).unwrap();
        assert_eq!(first, Some(DispatchReport { sent: 2, failed: 0 }));
        assert_eq!(outbox_count(&conn, "reminder"), 2);
        assert_eq!(last_sent(&conn), "2025-06-02");

        let second = run(&conn, &OutboxNotifier, &clock).unwrap();
        assert_eq!(second, None);
        assert_eq!(outbox_count(&conn, "reminder"), 2);
    }

    #[test]
    fn outside_dispatch_window_nothing_is_sent() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        settings::configure_reminder(&conn, Some(14.0), Some(true)).unwrap();

        // 15.25 is past email_time + 1 (inclusive upper bound is 15.0).
        let clock = clock_at("2025-06-02 15:15");
        assert_eq!(run(&conn, &OutboxNotifier, &clock).unwrap(), None);
        assert_eq!(outbox_count(&conn, "reminder"), 0);
        assert_eq!(last_sent(&conn), "");
    }

    #[test]
    fn window_upper_bound_is_inclusive() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        settings::configure_reminder(&conn, Some(14.0), Some(true)).unwrap();

        let clock = clock_at("2025-06-02 15:00");
        let report = run(&conn, &OutboxNotifier, &clock).unwrap();
        assert_eq!(report, Some(DispatchReport { sent: 1, failed: 0 }));
    }

    #[test]
    fn recipient_failure_does_not_abort_batch_and_day_is_marked() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        seed_employee(&conn, "John Doe", "john@example.com");
        settings::configure_reminder(&conn, Some(14.0), Some(true)).unwrap();

        let clock = clock_at("2025-06-02 14:10");
        let notifier = RejectingNotifier("jane@example.com");
        let report = run(&conn, &notifier, &clock).unwrap();
        assert_eq!(report, Some(DispatchReport { sent: 1, failed: 1 }));
        assert_eq!(last_sent(&conn), "2025-06-02");
    }

    #[test]
    fn no_recipients_leaves_the_guard_unset() {
        let conn = setup();
        settings::configure_reminder(&conn, Some(14.0), Some(true)).unwrap();

        let clock = clock_at("2025-06-02 14:10");
        assert_eq!(run(&conn, &OutboxNotifier, &clock).unwrap(), None);
        assert_eq!(last_sent(&conn), "");
    }

    #[test]
    fn inactive_config_is_ignored() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        settings::configure_reminder(&conn, Some(14.0), Some(false)).unwrap();

        let clock = clock_at("2025-06-02 14:10");
        assert_eq!(run(&conn, &OutboxNotifier, &clock).unwrap(), None);
    }

    #[test]
    fn send_now_bypasses_guard_but_not_window() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        settings::configure_reminder(&conn, Some(14.0), Some(true)).unwrap();

        let in_window = clock_at("2025-06-02 14:10");
        run(&conn, &OutboxNotifier, &in_window).unwrap();
        assert_eq!(outbox_count(&conn, "reminder"), 1);

        // Guard says sent; send_now clears it and dispatches again.
        let report = send_now(&conn, &OutboxNotifier, &in_window).unwrap();
        assert_eq!(report, Some(DispatchReport { sent: 1, failed: 0 }));
        assert_eq!(outbox_count(&conn, "reminder"), 2);

        // Outside the window, send_now still refuses.
        let late = clock_at("2025-06-02 16:00");
        assert_eq!(send_now(&conn, &OutboxNotifier, &late).unwrap(), None);
        assert_eq!(outbox_count(&conn, "reminder"), 2);
    }

    #[test]
    fn default_template_is_created_once_and_pinned() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        settings::configure_reminder(&conn, Some(14.0), Some(true)).unwrap();

        let clock = clock_at("2025-06-02 14:10");
        run(&conn, &OutboxNotifier, &clock).unwrap();

        let cfg = settings::get_reminder_config(&conn).unwrap().unwrap();
        let template_id = cfg.template_id.expect("template pinned after first run");

        send_now(&conn, &OutboxNotifier, &clock).unwrap();
        let cfg2 = settings::get_reminder_config(&conn).unwrap().unwrap();
        assert_eq!(cfg2.template_id, Some(template_id));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM templates", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_send_bypasses_all_guards() {
        let conn = setup();
        seed_employee(&conn, "Jane Smith", "jane@example.com");
        // No reminder config, no window set up: test send still works.

        let clock = clock_at("2025-06-02 03:00");
        let to = send_test(&conn, &OutboxNotifier, &clock, Some("Jane Smith")).unwrap();
        assert_eq!(to, "jane@example.com");
        assert_eq!(outbox_count(&conn, "test"), 1);
    }
}
