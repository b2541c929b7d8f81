use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::actions::ActionLogic;
use crate::core::enrich::{RandomStrategy, enrich_one};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::source;
use crate::ui::messages::ConsoleNotifier;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Promote { id } = &cli.command {
        let source = source::open(cli.users_file.as_deref(), cfg)?;
        let employee = enrich_one(source.fetch_by_id(*id)?, &mut RandomStrategy::from_entropy());

        let pool = DbPool::new(&cfg.database)?;
        let mut notifier = ConsoleNotifier::audited(&pool.conn, "promote");
        ActionLogic::promote(&employee, &mut notifier);
    }
    Ok(())
}
