//! SQLite connection wrapper (lightweight for CLI usage).

use super::initialize::init_db;
use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database and make sure the schema exists.
    pub fn new(path: &str) -> AppResult<Self> {
        let path = Path::new(path);
        ensure_parent_dir(path)?;

        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Throwaway database, used when embedding the store in tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
