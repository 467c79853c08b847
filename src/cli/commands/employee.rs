use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{employees, pool::DbPool};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Employee {
        add,
        email,
        deactivate,
        list,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            if !session.role.is_admin() {
                return Err(AppError::Authorization(
                    "Only admin can manage employees.".to_string(),
                ));
            }
            employees::insert(&pool.conn, name, email.as_deref().unwrap_or(""))?;
            success(format!("Employee '{name}' added."));
        }

        if let Some(name) = deactivate {
            if !session.role.is_admin() {
                return Err(AppError::Authorization(
                    "Only admin can manage employees.".to_string(),
                ));
            }
            if employees::set_active(&pool.conn, name, false)? {
                success(format!("Employee '{name}' deactivated."));
            } else {
                return Err(AppError::EmployeeNotFound(name.clone()));
            }
        }

        if *list {
            let mut table = Table::new(&["Name", "Email", "Active"]);
            for emp in employees::list(&pool.conn)? {
                let active = if emp.active { "yes" } else { "no" };
                table.add_row(vec![emp.name, emp.email, active.to_string()]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
