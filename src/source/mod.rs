//! Where raw person records come from: the public people API or a local
//! JSON file with the same `{ "users": [...] }` shape.

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::employee::RawPerson;

pub const LIST_FAILURE: &str = "Failed to fetch employees";
pub const DETAIL_FAILURE: &str = "Failed to fetch employee details";

pub trait EmployeeSource {
    /// One page of at most `limit` records.
    fn fetch_page(&self, limit: usize) -> AppResult<Vec<RawPerson>>;

    fn fetch_by_id(&self, id: u32) -> AppResult<RawPerson>;
}

/// File source when `users_file` is given, HTTP source otherwise.
pub fn open(users_file: Option<&str>, cfg: &Config) -> AppResult<Box<dyn EmployeeSource>> {
    match users_file {
        Some(path) => Ok(Box::new(FileSource::new(crate::utils::path::expand_tilde(path)))),
        None => Ok(Box::new(HttpSource::new(&cfg.api_base_url)?)),
    }
}
