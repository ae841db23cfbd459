//! SQLite-backed slot store.
//!
//! # Responsibility
//! - Persist slot blobs in the `slots` table of a bootstrapped connection.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - `try_new` must reject connections whose schema was not migrated.
//! - `write` replaces the previous value for the key in a single upsert.

use super::{SlotStore, StoreError, StoreResult};
use crate::db::migrations;
use rusqlite::{params, Connection};

const SLOT_TABLE: &str = "slots";

/// Slot store over a borrowed, migrated SQLite connection.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    /// Wraps `conn` after validating that the slot schema is present.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is behind the
    ///   latest migration (typically a raw, unmigrated connection).
    /// - `MissingSlotTable` when the version claims readiness but the
    ///   `slots` table does not exist.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected_version = migrations::latest_version();

        if actual_version < expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            params![SLOT_TABLE],
            |row| row.get(0),
        )?;
        if table_count == 0 {
            return Err(StoreError::MissingSlotTable(SLOT_TABLE));
        }

        Ok(Self { conn })
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE slot_key = ?1;")?;

        let mut rows = stmt.query(params![key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (slot_key, value) VALUES (?1, ?2)
             ON CONFLICT(slot_key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;

        Ok(())
    }
}
