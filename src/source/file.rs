use super::{EmployeeSource, LIST_FAILURE};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{RawPerson, UsersPage};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Reads the list endpoint's payload from disk. Useful offline and in tests.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> AppResult<Vec<RawPerson>> {
        debug!(path = %self.path.display(), "reading employees file");
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Fetch(format!("{LIST_FAILURE}: {e}")))?;
        let page: UsersPage = serde_json::from_str(&content)?;
        Ok(page.users)
    }
}

impl EmployeeSource for FileSource {
    fn fetch_page(&self, limit: usize) -> AppResult<Vec<RawPerson>> {
        let mut users = self.read_all()?;
        users.truncate(limit);
        Ok(users)
    }

    fn fetch_by_id(&self, id: u32) -> AppResult<RawPerson> {
        self.read_all()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(AppError::EmployeeNotFound(id))
    }
}
