use super::{DETAIL_FAILURE, EmployeeSource, LIST_FAILURE};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{RawPerson, UsersPage};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, warn};

/// Plain JSON over HTTP: no auth, no retries.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("hrdash/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Any non-2xx status is a generic fetch failure.
pub fn ensure_success(status: StatusCode, failure: &str) -> AppResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        warn!(%status, "{failure}");
        Err(AppError::Fetch(failure.to_string()))
    }
}

impl EmployeeSource for HttpSource {
    fn fetch_page(&self, limit: usize) -> AppResult<Vec<RawPerson>> {
        let url = format!("{}/users", self.base_url);
        debug!(%url, limit, "GET employee page");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()?;
        ensure_success(response.status(), LIST_FAILURE)?;

        let page: UsersPage = response.json()?;
        Ok(page.users)
    }

    fn fetch_by_id(&self, id: u32) -> AppResult<RawPerson> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(%url, "GET employee");

        let response = self.client.get(&url).send()?;
        ensure_success(response.status(), DETAIL_FAILURE)?;

        Ok(response.json()?)
    }
}
