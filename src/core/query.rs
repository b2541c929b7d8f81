//! Employee listing: one fetch, then client-side search and filters.

use super::enrich::{EnrichmentStrategy, enrich};
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::models::rating::whole_stars;
use crate::source::EmployeeSource;
use tracing::{info, warn};

/// Search term plus the two multi-select filters. Empty parts match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub search_term: String,
    pub departments: Vec<Department>,
    pub ratings: Vec<u8>,
}

impl EmployeeFilter {
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.departments.is_empty() || !self.ratings.is_empty()
    }

    pub fn matches_search(&self, employee: &Employee) -> bool {
        if self.search_term.is_empty() {
            return true;
        }

        let term = self.search_term.to_lowercase();
        [
            employee.first_name.as_str(),
            employee.last_name.as_str(),
            employee.email.as_str(),
            employee.department.name(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn matches_department(&self, employee: &Employee) -> bool {
        self.departments.is_empty() || self.departments.contains(&employee.department)
    }

    pub fn matches_rating(&self, employee: &Employee) -> bool {
        self.ratings.is_empty() || self.ratings.contains(&whole_stars(employee.rating))
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee)
            && self.matches_department(employee)
            && self.matches_rating(employee)
    }

    /// Order-preserving subset of `employees` matching every predicate.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    Loading,
    Ready,
    Error(String),
}

/// Holds the fetched page and the current filtered view of it.
#[derive(Debug)]
pub struct EmployeeQuery {
    page_size: usize,
    state: QueryState,
    all: Vec<Employee>,
    filtered: Vec<Employee>,
    filter: EmployeeFilter,
}

impl EmployeeQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            state: QueryState::Loading,
            all: Vec::new(),
            filtered: Vec::new(),
            filter: EmployeeFilter::default(),
        }
    }

    /// Fetch one page, enrich it and move to `Ready`, or to `Error` with the
    /// failure message. Filters already set are applied to the new page.
    pub fn load<S, E>(&mut self, source: &S, strategy: &mut E) -> &QueryState
    where
        S: EmployeeSource + ?Sized,
        E: EnrichmentStrategy + ?Sized,
    {
        self.state = QueryState::Loading;

        match source.fetch_page(self.page_size) {
            Ok(people) => {
                self.all = enrich(people, strategy);
                self.state = QueryState::Ready;
                info!(count = self.all.len(), "employee page loaded");
                self.refresh();
            }
            Err(e) => {
                warn!(error = %e, "employee page failed to load");
                self.all.clear();
                self.filtered.clear();
                self.state = QueryState::Error(e.to_string());
            }
        }

        &self.state
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == QueryState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            QueryState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// The filtered view.
    pub fn employees(&self) -> &[Employee] {
        &self.filtered
    }

    /// The full fetched page.
    pub fn all_employees(&self) -> &[Employee] {
        &self.all
    }

    pub fn filter(&self) -> &EmployeeFilter {
        &self.filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.refresh();
    }

    pub fn set_selected_departments(&mut self, departments: Vec<Department>) {
        self.filter.departments = departments;
        self.refresh();
    }

    pub fn set_selected_ratings(&mut self, ratings: Vec<u8>) {
        self.filter.ratings = ratings;
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: EmployeeFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// Add the department to the selection, or drop it if already selected.
    pub fn toggle_department(&mut self, department: Department) {
        toggle(&mut self.filter.departments, department);
        self.refresh();
    }

    pub fn toggle_rating(&mut self, rating: u8) {
        toggle(&mut self.filter.ratings, rating);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter = EmployeeFilter::default();
        self.refresh();
    }

    // Always recomputed from the full page, never from the previous view.
    fn refresh(&mut self) {
        self.filtered = self.filter.apply(&self.all);
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(pos) = selection.iter().position(|v| *v == value) {
        selection.remove(pos);
    } else {
        selection.push(value);
    }
}
