//! Durable slot storage port and implementations.
//!
//! # Responsibility
//! - Define the get/set contract for single-blob slot storage.
//! - Isolate storage backend details from roster orchestration.
//!
//! # Invariants
//! - An absent slot reads as `Ok(None)`, never as an error.
//! - `write` fully replaces any previous value under the same key.

mod memory;
mod sqlite;

pub use memory::MemorySlotStore;
pub use sqlite::SqliteSlotStore;

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport and schema errors raised by slot store backends.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingSlotTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; run migrations first"
            ),
            Self::MissingSlotTable(table) => {
                write!(f, "required table `{table}` is missing from the connection")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingSlotTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage port for one serialized blob per fixed key.
///
/// Backends persist whole values only; partial updates do not exist at
/// this layer.
pub trait SlotStore {
    /// Reads the current value under `key`, `None` when absent.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value under `key` with `value`.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}
