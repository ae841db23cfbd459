//! Employee record and role rate table.
//!
//! # Responsibility
//! - Define the canonical employee record persisted in the roster slot.
//! - Map each role to its fixed bonus multiplier.
//!
//! # Invariants
//! - `Employee::new` is the only construction path and derives `bonus`
//!   as `salary * role.bonus_rate()`.
//! - Wire names are snake_case for both fields and role variants.

use serde::{Deserialize, Serialize};

/// Job role determining the bonus multiplier.
///
/// Unspecified hires default to `CommonEmployee`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Baseline role, 10% bonus.
    #[default]
    CommonEmployee,
    /// 20% bonus.
    Manager,
    /// 30% bonus.
    Director,
}

impl Role {
    /// Fixed bonus multiplier for this role.
    pub fn bonus_rate(self) -> f64 {
        match self {
            Self::CommonEmployee => 0.10,
            Self::Manager => 0.20,
            Self::Director => 0.30,
        }
    }

    /// Stable snake_case name, matching the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CommonEmployee => "common_employee",
            Self::Manager => "manager",
            Self::Director => "director",
        }
    }

    /// Parses the snake_case role name produced by [`Role::as_str`].
    ///
    /// Returns `None` for unknown input; callers decide whether to fall
    /// back to the default role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "common_employee" => Some(Self::CommonEmployee),
            "manager" => Some(Self::Manager),
            "director" => Some(Self::Director),
            _ => None,
        }
    }
}

/// Canonical employee record.
///
/// One record per successful append; the roster preserves insertion
/// order and allows duplicate names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name. Non-empty by append precondition.
    pub name: String,
    /// Years at the company. Non-negative.
    pub tenure_years: f64,
    /// Role driving the bonus rate.
    pub role: Role,
    /// Base salary. Non-negative.
    pub salary: f64,
    /// Derived as `salary * role.bonus_rate()` at construction.
    pub bonus: f64,
}

impl Employee {
    /// Creates a record with the bonus derived from the rate table.
    pub fn new(name: impl Into<String>, tenure_years: f64, role: Role, salary: f64) -> Self {
        Self {
            name: name.into(),
            tenure_years,
            role,
            salary,
            bonus: salary * role.bonus_rate(),
        }
    }
}
