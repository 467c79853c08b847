use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Cancel { date, employee } = cmd {
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let pool = DbPool::new(&cfg.database)?;

        lifecycle::cancel(
            &pool.conn,
            session.role,
            session.operator_name(),
            employee.as_deref(),
            date,
        )?;

        warning("Lunch record has been cancelled.");
    }

    Ok(())
}
