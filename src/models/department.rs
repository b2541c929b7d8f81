use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of departments an employee can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    Product,
    Design,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Legal,
}

impl Department {
    /// All departments, in display order.
    pub const ALL: [Department; 10] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Product,
        Department::Design,
        Department::Hr,
        Department::Finance,
        Department::Operations,
        Department::CustomerSupport,
        Department::Legal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Product => "Product",
            Department::Design => "Design",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::CustomerSupport => "Customer Support",
            Department::Legal => "Legal",
        }
    }

    /// Helper: convert input from CLI (any case, `-`/`_` accepted for spaces)
    pub fn parse(input: &str) -> AppResult<Self> {
        let wanted = input.trim().replace(['-', '_'], " ").to_lowercase();
        Department::ALL
            .iter()
            .copied()
            .find(|d| d.name().to_lowercase() == wanted)
            .ok_or_else(|| AppError::InvalidDepartment(input.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Department {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::parse(s)
    }
}
