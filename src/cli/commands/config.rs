use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set_operator,
        set_timezone,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                info("No configuration file found; defaults are in effect.");
            }
            return Ok(());
        }

        if set_operator.is_none() && set_timezone.is_none() {
            info("Nothing to do: use --print, --set-operator, or --set-timezone.");
            return Ok(());
        }

        let mut cfg = Config::load();

        if let Some(tz) = set_timezone {
            // Validate before persisting.
            Clock::new(tz)?;
            cfg.timezone = tz.clone();
        }
        if let Some(name) = set_operator {
            cfg.operator = Some(name.clone());
        }

        cfg.save().map_err(|_| AppError::ConfigSave)?;
        success("Configuration updated.");
    }

    Ok(())
}
