//! Error types for the dochadzka workspace.
//!
//! Every crate reports failures through the single `thiserror`-derived
//! [`Error`] enum defined here.  Parsing constructors return [`Result`];
//! classification and accounting entry points that consume user-editable text
//! absorb these errors and degrade to `false` / `0` instead.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A month key (`"MM-YYYY"`) or day key (`"01"`..`"31"`) failed to parse.
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// A wall-clock time did not match `HH:MM`.
    #[error("malformed time: {0:?}")]
    MalformedTime(String),

    /// A range whose start day lies after its end day.
    #[error("inconsistent range: start day {start} is after end day {end}")]
    InconsistentRange {
        /// First day of the range.
        start: u8,
        /// Last day of the range.
        end: u8,
    },

    /// Date-related error (out-of-range year, month, or day).
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The requested month is not present in the attendance book.
    #[error("month {0} not found")]
    MonthNotFound(String),

    /// The persisted document could not be read or written.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dz_core::{ensure, errors::Error};
/// fn positive(x: i32) -> dz_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
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
