use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{pool::DbPool, settings};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::time::{format_clock, parse_clock};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Timing {
        start,
        end,
        note,
        show,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if start.is_some() || end.is_some() {
            if !session.role.is_admin() {
                return Err(AppError::Authorization(
                    "Only admin can configure the confirmation window.".to_string(),
                ));
            }
            let (start, end) = match (start, end) {
                (Some(s), Some(e)) => (parse_clock(s)?, parse_clock(e)?),
                _ => {
                    return Err(AppError::Other(
                        "Both --start and --end are required to set the window".to_string(),
                    ));
                }
            };

            settings::set_timing(&pool.conn, start, end, note.as_deref().unwrap_or(""))?;
            success(format!(
                "Confirmation window set: {} - {}",
                format_clock(start),
                format_clock(end)
            ));
        }

        if *show {
            match settings::get_timing(&pool.conn)? {
                Some(t) => info(format!(
                    "Confirmation window: {} - {}",
                    format_clock(t.start_time),
                    format_clock(t.end_time)
                )),
                None => info("Confirmation window is not configured."),
            }
        }
    }

    Ok(())
}
