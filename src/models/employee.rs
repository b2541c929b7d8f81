use super::department::Department;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Postal address as returned by the people API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
}

/// A person record as fetched from the people API, before enrichment.
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
}

/// The `{ "users": [...] }` envelope of the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<RawPerson>,
}

/// The HR attributes attached to a person by enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct HrProfile {
    pub department: Department,
    pub rating: f64,
    pub position: String,
    pub salary: u32,
    pub join_date: NaiveDate,
}

/// An enriched employee. This is also the exact shape persisted for
/// bookmarks (camelCase keys, `joinDate` as `YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: String,
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    pub department: Department,
    pub rating: f64,
    pub position: String,
    pub salary: u32,
    pub join_date: NaiveDate,
    pub phone: String,
    pub address: Address,
}

impl Employee {
    pub fn from_parts(raw: RawPerson, hr: HrProfile) -> Self {
        Self {
            id: raw.id,
            first_name: raw.first_name,
            last_name: raw.last_name,
            email: raw.email,
            image: raw.image,
            age: raw.age,
            gender: raw.gender,
            department: hr.department,
            rating: hr.rating,
            position: hr.position,
            salary: hr.salary,
            join_date: hr.join_date,
            phone: raw.phone,
            address: raw.address,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn location(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for p in [&self.address.city, &self.address.state] {
            if !p.trim().is_empty() {
                parts.push(p);
            }
        }
        parts.join(", ")
    }
}

/// Data entered in the add-employee form. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    pub salary: u32,
    pub start_date: NaiveDate,
    pub address: Address,
}
