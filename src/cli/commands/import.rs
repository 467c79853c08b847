use crate::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::import_csv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::xlsx::write_template;
use crate::ui::messages::info;
use crate::utils::path::expand_home;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Import { file, template } = cmd {
        if let Some(out) = template {
            write_template(&expand_home(out))?;
            return Ok(());
        }

        let Some(file) = file else {
            return Err(AppError::Import(
                "Nothing to do: pass a CSV file or use --template.".to_string(),
            ));
        };

        if !session.role.is_admin() {
            return Err(AppError::Authorization(
                "Only admin can import lunch records.".to_string(),
            ));
        }

        let pool = DbPool::new(&cfg.database)?;
        let outcome = import_csv(&pool.conn, &expand_home(file))?;

        info(outcome.render_summary());
    }

    Ok(())
}
