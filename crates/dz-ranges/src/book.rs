//! `AttendanceBook` — the persisted, month-indexed attendance document.

use std::collections::BTreeMap;

use dz_core::errors::{Error, Result};
use dz_ledger::{DayCode, DayLedger};
use dz_time::{Calendar, Date, DayKey, MonthKey};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::TripConfig;
use crate::record::{TripRecord, VacationRecord};
use crate::sync::RangeSynchronizer;

/// One month of the document: its day codes and range records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSheet {
    /// Day codes keyed `"01"`..`"31"`.  Entries with malformed keys are
    /// dropped on read.
    #[serde(default, deserialize_with = "lenient_days")]
    pub days: BTreeMap<DayKey, DayCode>,
    /// Business trips.
    #[serde(default)]
    pub trips: Vec<TripRecord>,
    /// Vacations.
    #[serde(default)]
    pub vacations: Vec<VacationRecord>,
    /// Unrecognised fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MonthSheet {
    /// A sheet with the codes of `ledger` and no records.
    pub fn from_ledger(ledger: DayLedger) -> Self {
        Self {
            days: ledger.into_days(),
            ..Self::default()
        }
    }
}

fn lenient_days<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<DayKey, DayCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, DayCode>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(k, code)| match k.parse() {
            Ok(day) => Some((day, code)),
            Err(e) => {
                warn!(key = %k, error = %e, "dropping day with malformed key");
                None
            }
        })
        .collect())
}

/// Records proposed by one synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncSummary {
    /// New trip records.
    pub trips_added: usize,
    /// New vacation records.
    pub vacations_added: usize,
}

impl std::ops::AddAssign for SyncSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.trips_added += rhs.trips_added;
        self.vacations_added += rhs.vacations_added;
    }
}

/// The whole attendance document.
///
/// Months are keyed by their `"MM-YYYY"` string.  Keys written without the
/// leading zero (`"7-2024"`) are found under their canonical [`MonthKey`] and
/// saved back unchanged.  Keys that do not parse are kept so that saving does
/// not lose them, but every operation skips them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceBook {
    /// Timesheet settings (names, default times, signature); passed through.
    #[serde(default)]
    pub config: Map<String, Value>,
    /// Business-trip settings.
    #[serde(default)]
    pub sc_config: TripConfig,
    /// Months by key.
    #[serde(default)]
    pub months: BTreeMap<String, MonthSheet>,
    /// Unrecognised top-level fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttendanceBook {
    // ── Persistence ───────────────────────────────────────────────────────────

    /// Read a document, filling in defaults for anything missing.
    ///
    /// # Errors
    /// [`Error::Serialization`] if `json` is not a valid document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Write the document as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    // ── Months ────────────────────────────────────────────────────────────────

    /// Valid month keys, newest first.
    pub fn month_keys(&self) -> Vec<MonthKey> {
        let mut keys: Vec<MonthKey> = self
            .months
            .keys()
            .filter_map(|k| match k.parse() {
                Ok(key) => Some(key),
                Err(e) => {
                    warn!(key = %k, error = %e, "skipping month with malformed key");
                    None
                }
            })
            .collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys.dedup();
        keys
    }

    /// The stored string under which `key` lives, preferring the canonical
    /// spelling.
    fn stored_key(&self, key: MonthKey) -> Option<&str> {
        let canonical = key.to_string();
        match self.months.get_key_value(&canonical) {
            Some((k, _)) => Some(k.as_str()),
            None => self
                .months
                .keys()
                .find(|k| k.parse::<MonthKey>().is_ok_and(|parsed| parsed == key))
                .map(String::as_str),
        }
    }

    /// The sheet stored for `key`.
    pub fn month(&self, key: MonthKey) -> Option<&MonthSheet> {
        self.months.get(self.stored_key(key)?)
    }

    /// Mutable access to the sheet stored for `key`.
    pub fn month_mut(&mut self, key: MonthKey) -> Option<&mut MonthSheet> {
        let stored = self.stored_key(key)?.to_owned();
        self.months.get_mut(&stored)
    }

    fn sheet_mut(&mut self, key: MonthKey) -> Result<&mut MonthSheet> {
        self.month_mut(key)
            .ok_or_else(|| Error::MonthNotFound(key.to_string()))
    }

    /// The ledger of `key`.
    ///
    /// # Errors
    /// [`Error::MonthNotFound`] if the month is absent, or the error of
    /// [`DayLedger::from_days`] if its day codes are incomplete.
    pub fn ledger(&self, key: MonthKey) -> Result<DayLedger> {
        let sheet = self
            .month(key)
            .ok_or_else(|| Error::MonthNotFound(key.to_string()))?;
        DayLedger::from_days(key, sheet.days.clone())
    }

    /// Append the month after the newest one, or the month of `today` if the
    /// book is empty, with a freshly generated ledger.  Returns its key.
    ///
    /// # Errors
    /// [`Error::MalformedKey`] if the newest month is the last supported one.
    pub fn add_next_month<C: Calendar + ?Sized>(
        &mut self,
        calendar: &C,
        today: Date,
    ) -> Result<MonthKey> {
        let key = match self.month_keys().first() {
            Some(newest) => newest.next()?,
            None => MonthKey::of(today),
        };
        let sheet = MonthSheet::from_ledger(DayLedger::generate(key, calendar));
        self.months.entry(key.to_string()).or_insert(sheet);
        debug!(month = %key, "added month");
        Ok(key)
    }

    /// Record `code` for `day` of `key`, returning the previous code.
    ///
    /// # Errors
    /// [`Error::MonthNotFound`] for an absent month and [`Error::MalformedKey`]
    /// for a day the month does not have.
    pub fn set_day(&mut self, key: MonthKey, day: DayKey, code: DayCode) -> Result<Option<DayCode>> {
        if !key.contains(day) {
            return Err(Error::MalformedKey(format!("day {day} does not exist in {key}")));
        }
        Ok(self.sheet_mut(key)?.days.insert(day, code))
    }

    // ── Synchronization ───────────────────────────────────────────────────────

    /// Synchronize the trips and vacations of one month with its day codes.
    ///
    /// # Errors
    /// As [`AttendanceBook::ledger`].
    pub fn sync_month<C: Calendar + ?Sized>(
        &mut self,
        key: MonthKey,
        calendar: &C,
        today: Date,
    ) -> Result<SyncSummary> {
        let ledger = self.ledger(key)?;
        let sync = RangeSynchronizer::new(calendar, &self.sc_config, today);
        let (trips, vacations) = match self.month(key) {
            Some(sheet) => (
                sync.sync_trips(&ledger, &sheet.trips),
                sync.sync_vacations(&ledger, &sheet.vacations),
            ),
            None => return Err(Error::MonthNotFound(key.to_string())),
        };

        let sheet = self.sheet_mut(key)?;
        let summary = SyncSummary {
            trips_added: trips.len() - sheet.trips.len(),
            vacations_added: vacations.len() - sheet.vacations.len(),
        };
        sheet.trips = trips;
        sheet.vacations = vacations;
        Ok(summary)
    }

    /// Synchronize every month.  Months that cannot be read are skipped.
    pub fn sync_all<C: Calendar + ?Sized>(&mut self, calendar: &C, today: Date) -> SyncSummary {
        let mut total = SyncSummary::default();
        for key in self.month_keys() {
            match self.sync_month(key, calendar, today) {
                Ok(summary) => total += summary,
                Err(e) => warn!(month = %key, error = %e, "skipping month"),
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dz_time::WeekendsOnly;

    fn mk(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_book_starts_at_the_current_month() {
        let mut book = AttendanceBook::default();
        let key = book.add_next_month(&WeekendsOnly, date(2026, 10, 18)).unwrap();
        assert_eq!(key, mk("10-2026"));
        assert_eq!(book.month(key).unwrap().days.len(), 31);
    }

    #[test]
    fn next_month_follows_the_newest() {
        let mut book = AttendanceBook::default();
        let today = date(2024, 11, 5);
        book.add_next_month(&WeekendsOnly, today).unwrap();
        let dec = book.add_next_month(&WeekendsOnly, today).unwrap();
        let jan = book.add_next_month(&WeekendsOnly, today).unwrap();
        assert_eq!(dec, mk("12-2024"));
        assert_eq!(jan, mk("01-2025"));
        assert_eq!(book.month_keys(), vec![jan, dec, mk("11-2024")]);
    }

    #[test]
    fn set_day_checks_month_and_day() {
        let mut book = AttendanceBook::default();
        let feb = book.add_next_month(&WeekendsOnly, date(2024, 2, 1)).unwrap();
        let d = |n| DayKey::new(n).unwrap();
        assert_eq!(book.set_day(feb, d(1), DayCode::Sick).unwrap(), Some(DayCode::WorkFull));
        assert!(matches!(
            book.set_day(feb, d(30), DayCode::Sick),
            Err(Error::MalformedKey(_))
        ));
        assert!(matches!(
            book.set_day(mk("03-2024"), d(1), DayCode::Sick),
            Err(Error::MonthNotFound(_))
        ));
    }

    #[test]
    fn no_month_after_the_last_supported_one() {
        let mut book = AttendanceBook::default();
        let last = book.add_next_month(&WeekendsOnly, date(2199, 12, 1)).unwrap();
        assert_eq!(last, mk("12-2199"));
        assert!(matches!(
            book.add_next_month(&WeekendsOnly, date(2199, 12, 1)),
            Err(Error::MalformedKey(_))
        ));
        assert_eq!(book.months.len(), 1);
    }

    #[test]
    fn unpadded_month_key_is_synchronized_in_place() {
        let july = mk("07-2024");
        let mut book = AttendanceBook::default();
        book.months.insert(
            "7-2024".to_string(),
            MonthSheet::from_ledger(DayLedger::filled(july, DayCode::Trip)),
        );

        assert_eq!(book.month_keys(), vec![july]);
        assert!(book.month(july).is_some());
        assert_eq!(book.ledger(july).unwrap().len(), 31);

        let summary = book.sync_all(&WeekendsOnly, date(2024, 7, 31));
        assert_eq!(summary.trips_added, 1);
        assert_eq!(book.months.keys().collect::<Vec<_>>(), vec!["7-2024"]);
        assert_eq!(book.months["7-2024"].trips[0].id, "01-31-07-2024");
    }

    #[test]
    fn padded_key_wins_over_unpadded_duplicate() {
        let july = mk("07-2024");
        let mut book = AttendanceBook::default();
        book.months.insert("7-2024".to_string(), MonthSheet::default());
        book.months.insert(
            "07-2024".to_string(),
            MonthSheet::from_ledger(DayLedger::filled(july, DayCode::Off)),
        );
        assert_eq!(book.month_keys(), vec![july]);
        assert_eq!(book.month(july).unwrap().days.len(), 31);
    }

    #[test]
    fn malformed_day_keys_are_dropped() {
        let json = r#"{ "months": { "07-2024": { "days": { "01": "8", "xx": "D", "32": "SC" } } } }"#;
        let book = AttendanceBook::from_json(json).unwrap();
        let days = &book.month(mk("07-2024")).unwrap().days;
        assert_eq!(days.len(), 1);
        assert_eq!(days[&DayKey::new(1).unwrap()], DayCode::WorkFull);
    }

    #[test]
    fn malformed_month_keys_are_kept_but_skipped() {
        let json = r#"{ "months": { "13-2024": { "days": {} }, "xx": {} } }"#;
        let mut book = AttendanceBook::from_json(json).unwrap();
        assert!(book.month_keys().is_empty());
        assert_eq!(book.sync_all(&WeekendsOnly, date(2024, 1, 1)), SyncSummary::default());
        assert_eq!(book.months.len(), 2);
    }
}
