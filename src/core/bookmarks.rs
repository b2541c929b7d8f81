//! Bookmarked employees, mirrored to local storage after every change.

use crate::db::storage::LocalStorage;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::notification::{Notification, Notifier};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Storage key holding the serialized `Employee[]` array.
pub const BOOKMARKS_KEY: &str = "hr-bookmarks";

/// Snapshots of bookmarked employees keyed by id, kept in insertion order.
pub struct BookmarkStore<S, N> {
    storage: S,
    notifier: N,
    entries: HashMap<u32, Employee>,
    order: Vec<u32>,
}

impl<S: LocalStorage, N: Notifier> BookmarkStore<S, N> {
    /// Restore the set persisted in `storage`. An unreadable entry is logged,
    /// removed and replaced by an empty set.
    pub fn load(storage: S, notifier: N) -> AppResult<Self> {
        let mut store = Self {
            storage,
            notifier,
            entries: HashMap::new(),
            order: Vec::new(),
        };

        let Some(raw) = store.storage.get_item(BOOKMARKS_KEY)? else {
            return Ok(store);
        };

        match serde_json::from_str::<Vec<Employee>>(&raw) {
            Ok(saved) => {
                for employee in saved {
                    // first occurrence wins
                    if !store.entries.contains_key(&employee.id) {
                        store.order.push(employee.id);
                        store.entries.insert(employee.id, employee);
                    }
                }
                debug!(count = store.order.len(), "bookmarks restored");
            }
            Err(e) => {
                warn!(error = %e, "failed to parse stored bookmarks, starting empty");
                if let Err(e) = store.storage.remove_item(BOOKMARKS_KEY) {
                    warn!(error = %e, "failed to discard corrupt bookmarks");
                }
            }
        }

        Ok(store)
    }

    pub fn is_bookmarked(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.entries.get(&id)
    }

    /// Bookmarks in the order they were added.
    pub fn bookmarks(&self) -> Vec<&Employee> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove the bookmark if present, otherwise append a snapshot of
    /// `employee`. Returns whether the employee is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, employee: &Employee) -> AppResult<bool> {
        if self.is_bookmarked(employee.id) {
            self.remove_bookmark(employee.id)?;
            return Ok(false);
        }

        self.order.push(employee.id);
        self.entries.insert(employee.id, employee.clone());

        if let Err(e) = self.persist() {
            self.order.pop();
            self.entries.remove(&employee.id);
            return Err(e);
        }

        self.notifier.notify(Notification::success(
            "Employee bookmarked",
            format!(
                "{} has been added to your bookmarks.",
                employee.full_name()
            ),
        ));
        Ok(true)
    }

    /// Remove the bookmark with `id`. Absent ids are a silent no-op.
    pub fn remove_bookmark(&mut self, id: u32) -> AppResult<Option<Employee>> {
        let Some(pos) = self.order.iter().position(|&b| b == id) else {
            return Ok(None);
        };

        self.order.remove(pos);
        let removed = self.entries.remove(&id);

        if let Err(e) = self.persist() {
            self.order.insert(pos, id);
            if let Some(employee) = removed {
                self.entries.insert(id, employee);
            }
            return Err(e);
        }

        if let Some(employee) = &removed {
            self.notifier.notify(Notification::info(
                "Bookmark removed",
                format!(
                    "{} has been removed from your bookmarks.",
                    employee.full_name()
                ),
            ));
        }
        Ok(removed)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (S, N) {
        (self.storage, self.notifier)
    }

    // Written on every change, the empty set included, so a removed
    // bookmark cannot come back on the next load.
    fn persist(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.bookmarks())?;
        self.storage.set_item(BOOKMARKS_KEY, &json)?;
        debug!(count = self.order.len(), "bookmarks persisted");
        Ok(())
    }
}
