//! Concrete calendar implementations.

/// Calendar with holidays added at run time.
pub mod bespoke_calendar;

/// Slovak public holidays.
pub mod slovakia;

pub use bespoke_calendar::BespokeCalendar;
pub use slovakia::Slovakia;
