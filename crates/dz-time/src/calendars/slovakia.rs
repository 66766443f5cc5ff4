//! Slovakia public-holiday calendar.

use std::sync::Arc;

use crate::calendar::Calendar;
use crate::easter::easter_sunday;
use crate::holidays::{HolidayCache, HolidaySet};

/// Fixed-date holidays as `(month, day)`:
/// * Republic Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Labour Day (May 1)
/// * Victory Day (May 8)
/// * Saints Cyril & Methodius Day (Jul 5)
/// * SNP Anniversary (Aug 29)
/// * Constitution Day (Sep 1)
/// * All Saints' Day (Nov 1)
/// * Freedom & Democracy Day (Nov 17)
/// * Christmas Eve, Christmas Day, St. Stephen's Day (Dec 24–26)
pub const FIXED_HOLIDAYS: [(u8, u8); 12] = [
    (1, 1),
    (1, 6),
    (5, 1),
    (5, 8),
    (7, 5),
    (8, 29),
    (9, 1),
    (11, 1),
    (11, 17),
    (12, 24),
    (12, 25),
    (12, 26),
];

/// Slovakia calendar.
///
/// Weekends, the [`FIXED_HOLIDAYS`], Good Friday (Easter − 2) and Easter
/// Monday (Easter + 1).  Holiday sets are memoised per year in a
/// [`HolidayCache`], which may be shared with other calendar instances.
#[derive(Debug, Clone, Default)]
pub struct Slovakia {
    cache: Arc<HolidayCache>,
}

impl Slovakia {
    /// Create a calendar with its own private cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calendar backed by an existing cache.
    pub fn with_cache(cache: Arc<HolidayCache>) -> Self {
        Self { cache }
    }

    /// The cache backing this calendar.
    pub fn cache(&self) -> &Arc<HolidayCache> {
        &self.cache
    }
}

/// Compute the Slovak holiday set for `year` without caching.
pub fn slovak_holidays(year: u16) -> HolidaySet {
    let mut set = HolidaySet::new(year);
    for (m, d) in FIXED_HOLIDAYS {
        set.insert(m, d);
    }
    // Outside the supported date range only the fixed dates are known.
    if let Ok(easter) = easter_sunday(year) {
        for offset in [-2, 1] {
            if let Ok(d) = easter.add_days(offset) {
                set.insert(d.month(), d.day_of_month());
            }
        }
    }
    set
}

impl Calendar for Slovakia {
    fn name(&self) -> &str {
        "Slovakia"
    }

    fn holidays_for_year(&self, year: u16) -> Arc<HolidaySet> {
        self.cache
            .get_or_insert_with(year, || slovak_holidays(year))
    }
}
