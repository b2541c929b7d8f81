// src/export/model.rs

use crate::models::employee::Employee;
use serde::Serialize;

/// Flat row used by the CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BookmarkExport {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub rating: f64,
    pub salary: u32,
    pub join_date: String,
    pub city: String,
    pub state: String,
}

impl From<&Employee> for BookmarkExport {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: e.department.name().to_string(),
            position: e.position.clone(),
            rating: e.rating,
            salary: e.salary,
            join_date: e.join_date.format("%Y-%m-%d").to_string(),
            city: e.address.city.clone(),
            state: e.address.state.clone(),
        }
    }
}
