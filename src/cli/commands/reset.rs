use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Reset { date, employee } = cmd {
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let pool = DbPool::new(&cfg.database)?;

        lifecycle::reset_to_draft(
            &pool.conn,
            session.role,
            session.operator_name(),
            employee.as_deref(),
            date,
        )?;

        info("Record has been reset to draft state.");
    }

    Ok(())
}
