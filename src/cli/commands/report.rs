use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportFilter, run_report, total_cost};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ReportFormat, write_report};
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::path::expand_home;

use super::list::records_table;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Report {
        from,
        to,
        employee,
        format,
        out,
    } = cmd
    {
        let from = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
        let to = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;
        if from > to {
            return Err(AppError::InvalidPeriod(format!("{from}:{to}")));
        }

        let pool = DbPool::new(&cfg.database)?;

        let rows = run_report(
            &pool.conn,
            session.role,
            session.operator_name(),
            &ReportFilter {
                from,
                to,
                employee: employee.as_deref(),
            },
        )?;

        match format {
            ReportFormat::Table => {
                if rows.is_empty() {
                    info("No records found for the selected period.");
                } else {
                    print!("{}", records_table(&rows));
                    println!(
                        "\n{} record(s), total cost {:.2}",
                        rows.len(),
                        total_cost(&rows)
                    );
                }
            }
            _ => {
                if rows.is_empty() {
                    return Err(AppError::Export(
                        "No records found for the selected period.".to_string(),
                    ));
                }
                let out = out.as_deref().ok_or_else(|| {
                    AppError::Export("--out FILE is required for this format".to_string())
                })?;
                write_report(*format, &rows, &expand_home(out))?;
            }
        }
    }

    Ok(())
}
