//! `BespokeCalendar` — public holidays listed by hand, for deployments
//! outside Slovakia or for company-wide days off.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::HolidaySet;

/// Weekends plus an explicit list of holiday dates.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeMap<u16, HolidaySet>,
}

impl BespokeCalendar {
    /// An empty calendar called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Add a holiday. Weekends are already non-working days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays
            .entry(date.year())
            .or_insert_with(|| HolidaySet::new(date.year()))
            .insert(date.month(), date.day_of_month());
    }

    /// Number of dates added so far.
    pub fn holiday_count(&self) -> usize {
        self.holidays.values().map(HolidaySet::len).sum()
    }
}

impl Calendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_for_year(&self, year: u16) -> Arc<HolidaySet> {
        Arc::new(
            self.holidays
                .get(&year)
                .cloned()
                .unwrap_or_else(|| HolidaySet::new(year)),
        )
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays
            .get(&date.year())
            .is_some_and(|set| set.contains(date.month(), date.day_of_month()))
    }
}
