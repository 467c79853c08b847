use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{employees, pool::DbPool, records};
use crate::errors::{AppError, AppResult};
use crate::models::record::LunchRecord;
use crate::models::record_state::RecordState;
use crate::ui::messages::info;
use crate::utils::colors::colorize_state;
use crate::utils::date::parse_period;
use crate::utils::table::Table;

/// Render records as an aligned table; long remarks wrap onto
/// continuation lines.
pub(crate) fn records_table(rows: &[LunchRecord]) -> String {
    let mut table = Table::new(&["Date", "Day", "Employee", "Type", "Cost", "State", "Remarks"]);

    for r in rows {
        let note_lines = textwrap::wrap(&r.note, 32);

        table.add_row(vec![
            r.date_str(),
            r.day(),
            r.employee.clone(),
            r.lunch_type.clone(),
            format!("{:.2}", r.cost),
            colorize_state(r.state),
            note_lines.first().map(|l| l.to_string()).unwrap_or_default(),
        ]);

        for cont in note_lines.iter().skip(1) {
            let mut row = vec![String::new(); 6];
            row.push(cont.to_string());
            table.add_row(row);
        }
    }

    table.render()
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::List {
        period,
        employee,
        state,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let mut query = records::RecordQuery::default();

        if let Some(p) = period {
            let (from, to) = parse_period(p)?;
            query.from = Some(from);
            query.to = Some(to);
        }

        if session.role.acts_for_others() {
            if let Some(name) = employee {
                let emp = employees::find_by_name(&pool.conn, name)?
                    .ok_or_else(|| AppError::EmployeeNotFound(name.clone()))?;
                query.employee_id = Some(emp.id);
            }
        } else {
            let name = session.operator_name().ok_or(AppError::Identity)?;
            let own = employees::find_by_name(&pool.conn, name)?.ok_or(AppError::Identity)?;
            query.employee_id = Some(own.id);
        }

        if let Some(s) = state {
            let state = RecordState::from_db_str(&s.to_lowercase())
                .ok_or_else(|| AppError::Other(format!("Invalid state: {s}")))?;
            query.states = Some(vec![state]);
        }

        let rows = records::query(&pool.conn, &query)?;
        if rows.is_empty() {
            info("No lunch records found.");
        } else {
            print!("{}", records_table(&rows));
        }
    }

    Ok(())
}
