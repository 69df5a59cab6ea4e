//! Error types for agenda.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace. The holiday, slot and availability calculators themselves are
//! total; errors only arise when building values from caller input (date and
//! time strings, work windows, configuration files).

use thiserror::Error;

/// The top-level error type used throughout agenda.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated by the caller.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (unparsable string, out-of-range component).
    #[error("date error: {0}")]
    Date(String),

    /// Time-of-day error (malformed `HH:MM` label, out-of-range component).
    #[error("time error: {0}")]
    Time(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or decoded.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout agenda.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use agenda_core::{ensure, errors::Error};
/// fn positive(x: i32) -> agenda_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
