//! hrdash library root.
//! Exposes the CLI parser, the high-level run() function and the core
//! (enrichment, filtering, bookmark store, synthetic data).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Bookmark { .. } | Commands::Unbookmark { .. } => {
            cli::commands::bookmark::handle(cli, cfg)
        }
        Commands::Bookmarks { .. } => cli::commands::bookmarks::handle(&cli.command, cfg),
        Commands::Analytics => cli::commands::analytics::handle(cfg),
        Commands::AddEmployee { .. } => cli::commands::add_employee::handle(&cli.command, cfg),
        Commands::Promote { .. } => cli::commands::promote::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and then adjusted by the global flags
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if cli.test {
        cfg.simulated_delay_ms = 0;
    }

    logging::init_tracing(&cfg.log_level);

    dispatch(&cli, &cfg)
}
