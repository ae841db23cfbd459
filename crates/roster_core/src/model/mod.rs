//! Domain model for the employee roster.
//!
//! # Responsibility
//! - Define the canonical employee record shape used by core logic.
//! - Own the fixed role-to-bonus-rate table.
//!
//! # Invariants
//! - Records are immutable once created; the roster only grows.
//! - `bonus` is always derived from `salary` and the role rate, never
//!   supplied by callers.

pub mod employee;
