use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Edit {
        date,
        employee,
        new_date,
        move_to,
        lunch_type,
        note,
    } = cmd
    {
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let new_date = match new_date {
            Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let pool = DbPool::new(&cfg.database)?;

        let record = lifecycle::modify(
            &pool.conn,
            session.role,
            session.operator_name(),
            &lifecycle::ModifyRequest {
                employee: employee.as_deref(),
                date,
                new_employee: move_to.as_deref(),
                new_date,
                new_type: lunch_type.as_deref(),
                new_note: note.as_deref(),
            },
        )?;

        success(format!("Lunch record updated: {}.", record.reference()));
    }

    Ok(())
}
