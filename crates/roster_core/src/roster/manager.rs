//! Employee roster manager.
//!
//! # Responsibility
//! - Load the roster once from the durable slot, append records, list
//!   them in insertion order.
//! - Rewrite the full serialized roster to the slot after every append.
//!
//! # Invariants
//! - A slot value that cannot be decoded degrades to the empty roster;
//!   it is reported through a `degraded` log event, never as an error.
//! - Failed append preconditions reject silently: no partial record, no
//!   slot write.
//! - `bonus` is derived from the role rate table; callers cannot supply
//!   it.

use crate::model::employee::{Employee, Role};
use crate::store::{SlotStore, StoreError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key identifying the roster slot in durable storage.
pub const ROSTER_SLOT_KEY: &str = "employee_roster";

pub type RosterResult<T> = Result<T, RosterError>;

/// Errors surfaced by roster operations.
///
/// Precondition failures are not errors; they appear as
/// [`AppendOutcome::Rejected`].
#[derive(Debug)]
pub enum RosterError {
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode roster: {err}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RosterError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Request model for appending one employee record.
///
/// Optional fields model "not provided" input; presence is checked by
/// the append preconditions, not by the type system.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendRequest {
    /// Display name. Must be non-empty.
    pub name: String,
    /// Years at the company. Must be provided, finite and non-negative.
    pub tenure_years: Option<f64>,
    /// Defaults to [`Role::CommonEmployee`] when `None`.
    pub role: Option<Role>,
    /// Base salary. Must be provided, finite and non-negative.
    pub salary: Option<f64>,
}

/// Result of an append attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Record appended and the full roster persisted.
    Added,
    /// A precondition failed; roster and slot are untouched.
    Rejected(AppendRejection),
}

/// Why an append request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendRejection {
    EmptyName,
    MissingTenureYears,
    InvalidTenureYears,
    MissingSalary,
    InvalidSalary,
}

impl AppendRejection {
    /// Stable reason label used in logging events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::MissingTenureYears => "missing_tenure_years",
            Self::InvalidTenureYears => "invalid_tenure_years",
            Self::MissingSalary => "missing_salary",
            Self::InvalidSalary => "invalid_salary",
        }
    }
}

/// Ordered, append-only employee roster over an injected slot store.
pub struct RosterManager<S: SlotStore> {
    store: S,
    roster: Vec<Employee>,
}

impl<S: SlotStore> RosterManager<S> {
    /// Loads the roster from the store's fixed slot.
    ///
    /// # Contract
    /// - An absent slot loads as the empty roster.
    /// - An undecodable slot value loads as the empty roster (accepted
    ///   degradation); the next successful append overwrites it.
    /// - Store transport errors propagate.
    pub fn load(store: S) -> RosterResult<Self> {
        let roster = match store.read(ROSTER_SLOT_KEY)? {
            None => {
                info!("event=roster_load module=roster status=ok source=absent count=0");
                Vec::new()
            }
            Some(blob) => match serde_json::from_str::<Vec<Employee>>(&blob) {
                Ok(records) => {
                    info!(
                        "event=roster_load module=roster status=ok source=slot count={}",
                        records.len()
                    );
                    records
                }
                Err(err) => {
                    warn!(
                        "event=roster_load module=roster status=degraded error_code=undecodable_slot error={err}"
                    );
                    Vec::new()
                }
            },
        };

        Ok(Self { store, roster })
    }

    /// Appends one employee record and rewrites the persisted roster.
    ///
    /// # Contract
    /// - `role` defaults to [`Role::CommonEmployee`] when unset.
    /// - `bonus` is computed as `salary * role.bonus_rate()`.
    /// - Any failed precondition returns `Ok(AppendOutcome::Rejected)`
    ///   and leaves the roster and the slot untouched.
    /// - On success the whole roster is re-serialized and written to the
    ///   slot, replacing the previous value.
    pub fn append(&mut self, request: AppendRequest) -> RosterResult<AppendOutcome> {
        let (tenure_years, role, salary) = match validate_request(&request) {
            Ok(values) => values,
            Err(rejection) => {
                debug!(
                    "event=roster_append module=roster status=skipped reason={}",
                    rejection.as_str()
                );
                return Ok(AppendOutcome::Rejected(rejection));
            }
        };

        self.roster
            .push(Employee::new(request.name, tenure_years, role, salary));

        match self.persist() {
            Ok(()) => {
                info!(
                    "event=roster_append module=roster status=ok role={} count={}",
                    role.as_str(),
                    self.roster.len()
                );
                Ok(AppendOutcome::Added)
            }
            Err(err) => {
                // The roster mirrors durable state; drop the record the
                // rewrite failed to persist.
                self.roster.pop();
                Err(err)
            }
        }
    }

    /// Returns the roster in insertion order, read-only.
    pub fn list(&self) -> &[Employee] {
        &self.roster
    }

    /// Borrow of the underlying store, for callers that inspect the slot.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> RosterResult<()> {
        let blob = serde_json::to_string(&self.roster)?;
        self.store.write(ROSTER_SLOT_KEY, &blob)?;
        Ok(())
    }
}

fn validate_request(request: &AppendRequest) -> Result<(f64, Role, f64), AppendRejection> {
    if request.name.is_empty() {
        return Err(AppendRejection::EmptyName);
    }

    let tenure_years = request
        .tenure_years
        .ok_or(AppendRejection::MissingTenureYears)?;
    if !tenure_years.is_finite() || tenure_years < 0.0 {
        return Err(AppendRejection::InvalidTenureYears);
    }

    let salary = request.salary.ok_or(AppendRejection::MissingSalary)?;
    if !salary.is_finite() || salary < 0.0 {
        return Err(AppendRejection::InvalidSalary);
    }

    Ok((tenure_years, request.role.unwrap_or_default(), salary))
}
