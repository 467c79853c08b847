//! lunchlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::models::role::Role;
use clap::Parser;

/// Per-invocation context threaded into every command handler: the acting
/// role, the timezone-aware clock, and the operator's linked identity.
pub struct Session {
    pub role: Role,
    pub clock: Clock,
    pub operator: Option<String>,
}

impl Session {
    pub fn operator_name(&self) -> Option<&str> {
        self.operator.as_deref()
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg, session),
        Commands::Types { .. } => cli::commands::types::handle(&cli.command, cfg, session),
        Commands::Timing { .. } => cli::commands::timing::handle(&cli.command, cfg, session),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, session),
        Commands::Request { .. } => cli::commands::request::handle(&cli.command, cfg, session),
        Commands::Confirm { .. } => cli::commands::confirm::handle(&cli.command, cfg, session),
        Commands::Cancel { .. } => cli::commands::cancel::handle(&cli.command, cfg, session),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg, session),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, session),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, session),
        Commands::Remind { .. } => cli::commands::remind::handle(&cli.command, cfg, session),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg, session),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg, session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // Apply CLI overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let mut clock = Clock::new(&cfg.timezone)?;
    if let Some(at) = &cli.at {
        clock = clock.freeze(at)?;
    }

    let session = Session {
        role: cli.role,
        clock,
        operator: cli.operator.clone().or_else(|| cfg.operator.clone()),
    };

    dispatch(&cli, &cfg, &session)
}
