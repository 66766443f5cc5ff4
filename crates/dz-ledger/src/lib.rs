//! # dz-ledger
//!
//! Per-month day ledgers and the detection of contiguous blocks of a status
//! code (business trips, vacations) within them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Block detection with configurable gap transparency.
pub mod block;

/// `DayCode` — the status of one day.
pub mod day_code;

/// `DayLedger` — the codes of every day of one month.
pub mod ledger;

pub use block::{group_runs, Block, BlockDetector, BlockPolicy, Transparency};
pub use day_code::DayCode;
pub use ledger::DayLedger;
