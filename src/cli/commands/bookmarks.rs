use super::list::print_employees;
use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bookmarks {
        export,
        format,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let store = open_store(&pool, None)?;
        let bookmarks = store.bookmarks();

        if let Some(file) = export {
            let path = ExportLogic::export_bookmarks(&bookmarks, *format, file, *force)?;
            audit(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{} bookmark(s) to {}", bookmarks.len(), path.display()),
            )?;
            return Ok(());
        }

        if bookmarks.is_empty() {
            info("No bookmarks yet. Use `hrdash bookmark <id>` to add one.");
            return Ok(());
        }

        let employees: Vec<_> = bookmarks.into_iter().cloned().collect();
        print_employees(&employees, |_| true);
        println!("\n{} bookmarked employee(s)", employees.len());
    }
    Ok(())
}
