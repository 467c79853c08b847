use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scheduler;
use crate::db::{pool::DbPool, settings};
use crate::errors::{AppError, AppResult};
use crate::notify::OutboxNotifier;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{format_clock, parse_clock};

fn require_admin(session: &Session) -> AppResult<()> {
    if !session.role.is_admin() {
        return Err(AppError::Authorization(
            "Only admin can manage the reminder scheduler.".to_string(),
        ));
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Remind {
        tick,
        now,
        send_test,
        time,
        activate,
        deactivate,
        show,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if time.is_some() || *activate || *deactivate {
            require_admin(session)?;

            let email_time = match time {
                Some(t) => Some(parse_clock(t)?),
                None => None,
            };
            let is_active = if *activate {
                Some(true)
            } else if *deactivate {
                Some(false)
            } else {
                None
            };

            let cfg_row = settings::configure_reminder(&pool.conn, email_time, is_active)?;
            success(format!(
                "Scheduler configured: dispatch at {}, {}.",
                format_clock(cfg_row.email_time),
                if cfg_row.is_active { "active" } else { "inactive" }
            ));
        }

        if *show {
            match settings::get_reminder_config(&pool.conn)? {
                Some(c) => info(format!(
                    "Dispatch at {} ({}), last sent: {}",
                    format_clock(c.email_time),
                    if c.is_active { "active" } else { "inactive" },
                    if c.last_sent_date.is_empty() {
                        "never"
                    } else {
                        c.last_sent_date.as_str()
                    }
                )),
                None => info("Reminder scheduler is not configured."),
            }
        }

        if *tick {
            match scheduler::run(&pool.conn, &OutboxNotifier, &session.clock)? {
                Some(report) => success(format!(
                    "Reminder dispatch completed. Sent: {}, Failed: {}",
                    report.sent, report.failed
                )),
                None => info("Nothing to dispatch."),
            }
        }

        if *now {
            require_admin(session)?;
            match scheduler::send_now(&pool.conn, &OutboxNotifier, &session.clock)? {
                Some(report) => success(format!(
                    "Lunch reminders have been sent to all employees. Sent: {}, Failed: {}",
                    report.sent, report.failed
                )),
                None => warning("Dispatch skipped (outside the dispatch window or no recipients)."),
            }
        }

        if *send_test {
            let to = scheduler::send_test(
                &pool.conn,
                &OutboxNotifier,
                &session.clock,
                session.operator_name(),
            )?;
            success(format!("Test email sent to {to}"));
        }
    }

    Ok(())
}
