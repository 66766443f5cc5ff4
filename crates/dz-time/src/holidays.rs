//! Per-year public holiday sets and the write-once cache that stores them.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

/// The public holidays of one year, keyed by `(month, day)`.
///
/// Rendered as `"MM-DD"` strings by [`HolidaySet::keys`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    year: u16,
    days: BTreeSet<(u8, u8)>,
}

impl HolidaySet {
    /// Create an empty set for `year`.
    pub fn new(year: u16) -> Self {
        Self {
            year,
            days: BTreeSet::new(),
        }
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Add a holiday.
    pub fn insert(&mut self, month: u8, day: u8) {
        self.days.insert((month, day));
    }

    /// Whether `month`/`day` is a holiday.
    pub fn contains(&self, month: u8, day: u8) -> bool {
        self.days.contains(&(month, day))
    }

    /// Whether the `"MM-DD"` string names a holiday.  Malformed input is not.
    pub fn contains_key(&self, mm_dd: &str) -> bool {
        let Some((m, d)) = mm_dd.split_once('-') else {
            return false;
        };
        match (m.parse(), d.parse()) {
            (Ok(m), Ok(d)) => self.contains(m, d),
            _ => false,
        }
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All holidays as `"MM-DD"` strings, in calendar order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.days.iter().map(|(m, d)| format!("{m:02}-{d:02}"))
    }
}

/// A year-keyed cache of [`HolidaySet`]s.
///
/// Entries are written once per year and never invalidated, so a cache can be
/// shared between calendars (and threads) through an `Arc`.
#[derive(Debug, Default)]
pub struct HolidayCache {
    sets: RwLock<HashMap<u16, Arc<HolidaySet>>>,
}

impl HolidayCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set for `year`, computing it with `compute` on a miss.
    pub fn get_or_insert_with(
        &self,
        year: u16,
        compute: impl FnOnce() -> HolidaySet,
    ) -> Arc<HolidaySet> {
        if let Some(set) = self
            .sets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Arc::clone(set);
        }
        tracing::trace!(year, "holiday cache miss");
        let mut sets = self.sets.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(sets.entry(year).or_insert_with(|| Arc::new(compute())))
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.sets.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
