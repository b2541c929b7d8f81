use crate::errors::AppResult;
use crate::models::employee::Employee;
use std::path::Path;

/// Pretty JSON in the same `Employee[]` shape the bookmark store persists.
pub fn write_json(path: &Path, employees: &[&Employee]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(employees)?;
    std::fs::write(path, json)?;
    Ok(())
}
