//! Derived figures for printed documents: per-diem for trips and the
//! working-day count for vacations.

use dz_core::{Amount, Hours};
use dz_ledger::{DayCode, DayLedger};
use dz_time::{Calendar, ClockTime, DayKey};
use tracing::warn;

use crate::config::PerDiemRates;
use crate::record::{TripRecord, VacationRecord};

/// Signed hours from `from` to `to` on the same day.
pub fn clock_hours(from: ClockTime, to: ClockTime) -> Hours {
    (Hours::from(to.minutes()) - Hours::from(from.minutes())) / 60.0
}

/// Signed hours between two `HH:MM` strings.  A malformed time yields zero.
pub fn hours_between(from: &str, to: &str) -> Hours {
    match (from.parse::<ClockTime>(), to.parse::<ClockTime>()) {
        (Ok(from), Ok(to)) => clock_hours(from, to),
        _ => {
            warn!(from, to, "malformed time, counting zero hours");
            0.0
        }
    }
}

/// The allowance for one day away for `hours`.
///
/// Each bracket includes its upper bound: 12 h pays `rate_5_to_12` and 18 h
/// pays `rate_12_to_18`.
pub fn per_diem(hours: Hours, rates: &PerDiemRates) -> Amount {
    if hours < 5.0 {
        0.0
    } else if hours <= 12.0 {
        rates.rate_5_to_12
    } else if hours <= 18.0 {
        rates.rate_12_to_18
    } else {
        rates.rate_over_18
    }
}

/// One day of a trip statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    /// Calendar day.
    pub day: DayKey,
    /// Departure time that day.
    pub time_from: String,
    /// Arrival time that day.
    pub time_to: String,
    /// Hours away.
    pub hours: Hours,
    /// Allowance for the day.
    pub per_diem: Amount,
    /// Distance, present on the departure and return days.
    pub km: Option<u32>,
}

/// Per-day breakdown of a trip for the expense statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TripStatement {
    /// One leg per day of the trip.
    pub legs: Vec<TripLeg>,
    /// Sum of the daily allowances.
    pub total_per_diem: Amount,
    /// Sum of the distances shown on the legs.
    pub total_km: u32,
}

impl TripStatement {
    /// Build the statement for `trip`.
    ///
    /// The first day runs from the departure time to `23:59`, the last from
    /// `00:00` to the return time, and any day in between is a full day.  A
    /// single-day trip runs from departure to return.  A missing return time
    /// reads as `23:59`.
    pub fn for_trip(trip: &TripRecord, rates: &PerDiemRates) -> Self {
        let end_of_day = ClockTime::END_OF_DAY.to_string();
        let start_of_day = ClockTime::START_OF_DAY.to_string();
        let return_time = if trip.details.end_time.is_empty() {
            end_of_day.clone()
        } else {
            trip.details.end_time.clone()
        };

        let legs: Vec<TripLeg> = trip
            .days()
            .map(|day| {
                let first = day == trip.start_day;
                let last = day == trip.end_day;
                let (time_from, time_to) = match (first, last) {
                    (true, true) => (trip.details.start_time.clone(), return_time.clone()),
                    (true, false) => (trip.details.start_time.clone(), end_of_day.clone()),
                    (false, true) => (start_of_day.clone(), return_time.clone()),
                    (false, false) => (start_of_day.clone(), end_of_day.clone()),
                };
                let hours = hours_between(&time_from, &time_to);
                TripLeg {
                    day,
                    per_diem: per_diem(hours, rates),
                    km: (first || last).then_some(trip.details.km),
                    time_from,
                    time_to,
                    hours,
                }
            })
            .collect();

        let total_per_diem = legs.iter().map(|l| l.per_diem).sum();
        let total_km = legs.iter().filter_map(|l| l.km).sum();
        Self {
            legs,
            total_per_diem,
            total_km,
        }
    }
}

impl TripRecord {
    /// Shorthand for [`TripStatement::for_trip`].
    pub fn statement(&self, rates: &PerDiemRates) -> TripStatement {
        TripStatement::for_trip(self, rates)
    }
}

/// Vacation days actually taken in `[start, end]`: days coded `D` that are
/// neither weekends nor holidays.  Zero for an inverted range.
pub fn working_days<C: Calendar + ?Sized>(
    start: DayKey,
    end: DayKey,
    ledger: &DayLedger,
    calendar: &C,
) -> u32 {
    let month = ledger.month();
    let count = DayKey::span(start, end)
        .filter(|&d| calendar.is_workday(month, d) && ledger.is(d, &DayCode::Vacation))
        .count();
    // at most 31
    count as u32
}

impl VacationRecord {
    /// [`working_days`] over this record's span.
    pub fn working_days<C: Calendar + ?Sized>(&self, ledger: &DayLedger, calendar: &C) -> u32 {
        working_days(self.start_day, self.end_day, ledger, calendar)
    }
}
