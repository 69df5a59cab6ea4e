//! # agenda-core
//!
//! Core types, error definitions, and string helpers for agenda.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – type aliases, the error hierarchy with its
//! `ensure!` macro, and the parsers and formatters for the date and
//! time strings exchanged with the scheduling API.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Identifier of a provider (psychologist) as assigned by the scheduling API.
pub type ProviderId = u64;

/// A count of minutes (minute of day, slot interval).
pub type Minutes = u16;

/// Number of minutes in a civil day.
pub const MINUTES_PER_DAY: Minutes = 24 * 60;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
