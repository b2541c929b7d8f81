use super::open_store;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::enrich::{RandomStrategy, enrich_one};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::source;
use crate::ui::messages::info;

/// `bookmark <id>` toggles, `unbookmark <id>` removes.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match &cli.command {
        Commands::Bookmark { id } => {
            let mut store = open_store(&pool, Some("bookmark"))?;

            if store.is_bookmarked(*id) {
                store.remove_bookmark(*id)?;
                return Ok(());
            }

            // only adding needs a snapshot of the employee
            let source = source::open(cli.users_file.as_deref(), cfg)?;
            let employee = enrich_one(source.fetch_by_id(*id)?, &mut RandomStrategy::from_entropy());
            store.toggle_bookmark(&employee)?;
        }
        Commands::Unbookmark { id } => {
            let mut store = open_store(&pool, Some("unbookmark"))?;

            if store.remove_bookmark(*id)?.is_none() {
                info(format!("Employee #{} is not bookmarked.", id));
            }
        }
        _ => {}
    }

    Ok(())
}
