use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{pool::DbPool, settings};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Types {
        add,
        cost,
        note,
        list,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            if !session.role.is_admin() {
                return Err(AppError::Authorization(
                    "Only admin can manage lunch types.".to_string(),
                ));
            }
            let cost = match cost {
                Some(c) if *c > 0.0 => *c,
                Some(_) => return Err(AppError::Other("Cost must be positive".to_string())),
                None => {
                    return Err(AppError::Other(
                        "--cost is required when adding a lunch type".to_string(),
                    ));
                }
            };
            settings::insert_lunch_type(&pool.conn, name, cost, note.as_deref().unwrap_or(""))?;
            success(format!("Lunch type '{name}' added (cost {cost:.2})."));
        }

        if *list {
            let mut table = Table::new(&["Name", "Cost", "Remarks"]);
            for t in settings::list_lunch_types(&pool.conn)? {
                table.add_row(vec![t.name, format!("{:.2}", t.cost), t.note]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
