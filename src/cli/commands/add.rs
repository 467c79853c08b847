use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{lifecycle, menu};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Add {
        date,
        employee,
        lunch_type,
        note,
        fill,
    } = cmd
    {
        let date = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => menu::next_lunch_date(session.clock.today()),
        };

        let pool = DbPool::new(&cfg.database)?;

        let record = lifecycle::create(
            &pool.conn,
            session.role,
            session.operator_name(),
            &lifecycle::CreateRequest {
                employee: employee.as_deref(),
                date,
                lunch_type: lunch_type.as_deref(),
                note: note.as_deref(),
                fill: *fill,
            },
        )?;

        success(format!(
            "Lunch record created for {} on {} ({}, {}).",
            record.employee,
            record.date_str(),
            record.lunch_type,
            record.state.label()
        ));
    }

    Ok(())
}
