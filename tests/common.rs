#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use hrdash::models::department::Department;
use hrdash::models::employee::{Address, Employee};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real `~/.hrdash`.
pub fn hr() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("hrdash_test_home");
    fs::create_dir_all(&home).ok();
    hr_in(&home.to_string_lossy())
}

/// Binary under test with `home` as its HOME directory
pub fn hr_in(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("hrdash");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// A fresh, empty HOME for tests that write the config file
pub fn fresh_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrdash_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrdash.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const USERS_JSON: &str = r#"{
  "users": [
    {
      "id": 1,
      "firstName": "Emily",
      "lastName": "Johnson",
      "maidenName": "Smith",
      "age": 28,
      "gender": "female",
      "email": "emily.johnson@x.dummyjson.com",
      "phone": "+81 965-431-3024",
      "image": "https://dummyjson.com/icon/emilys/128",
      "address": {
        "address": "626 Main Street",
        "city": "Phoenix",
        "state": "Mississippi",
        "postalCode": "29112",
        "country": "United States"
      }
    },
    {
      "id": 2,
      "firstName": "Michael",
      "lastName": "Williams",
      "age": 35,
      "gender": "male",
      "email": "michael.williams@x.dummyjson.com",
      "phone": "+49 258-627-6644",
      "image": "https://dummyjson.com/icon/michaelw/128",
      "address": {
        "address": "385 Fifth Street",
        "city": "Houston",
        "state": "Alabama",
        "postalCode": "38807"
      }
    },
    {
      "id": 7,
      "firstName": "Ann",
      "lastName": "Lee",
      "age": 41,
      "gender": "female",
      "email": "ann.lee@x.dummyjson.com",
      "phone": "+1 555-0107",
      "image": "",
      "address": {
        "address": "12 Elm Road",
        "city": "Denver",
        "state": "Colorado",
        "postalCode": "80014"
      }
    }
  ],
  "total": 3,
  "skip": 0,
  "limit": 3
}"#;

/// Write the fixture people payload to a temp file and return its path
pub fn users_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_users.json", name));
    fs::write(&path, USERS_JSON).expect("write users fixture");
    path.to_string_lossy().to_string()
}

/// An enriched employee with fixed HR attributes
pub fn employee(
    id: u32,
    first: &str,
    last: &str,
    department: Department,
    rating: f64,
) -> Employee {
    Employee {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        image: String::new(),
        age: 30,
        gender: "female".to_string(),
        department,
        rating,
        position: "Team Lead".to_string(),
        salary: 75_000,
        join_date: NaiveDate::from_ymd_opt(2021, 3, 4).expect("valid date"),
        phone: "+1 555-0100".to_string(),
        address: Address {
            address: "1 Test Street".to_string(),
            city: "Springfield".to_string(),
            state: "Illinois".to_string(),
            postal_code: "62701".to_string(),
        },
    }
}
