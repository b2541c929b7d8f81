pub mod add_employee;
pub mod analytics;
pub mod bookmark;
pub mod bookmarks;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod promote;
pub mod show;

use crate::core::bookmarks::BookmarkStore;
use crate::db::pool::DbPool;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;
use crate::ui::messages::ConsoleNotifier;

pub(crate) type TerminalStore<'c> = BookmarkStore<SqliteStorage<'c>, ConsoleNotifier<'c>>;

/// Bookmark store backed by the application database. Notifications are
/// audited under `operation` when one is given.
pub(crate) fn open_store<'c>(
    pool: &'c DbPool,
    operation: Option<&'static str>,
) -> AppResult<TerminalStore<'c>> {
    let notifier = match operation {
        Some(op) => ConsoleNotifier::audited(&pool.conn, op),
        None => ConsoleNotifier::new(),
    };
    BookmarkStore::load(SqliteStorage::new(&pool.conn), notifier)
}
