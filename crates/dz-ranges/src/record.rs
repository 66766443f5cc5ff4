//! Trip and vacation range records.
//!
//! Both kinds share the common [`RangeRecord`] envelope (`id`, `startDay`,
//! `endDay`, `confirmed`) and differ only in their flattened payload.

use dz_core::errors::{Error, Result};
use dz_ledger::BlockPolicy;
use dz_time::{Date, DayKey, MonthKey};
use serde::{Deserialize, Serialize};

use crate::config::TripConfig;

/// The two kinds of range record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// Business trip (*služobná cesta*), built from `SC` days.
    Trip,
    /// Vacation (*dovolenka*), built from `D` days.
    Vacation,
}

impl RangeKind {
    /// The detection policy for this kind.
    pub fn policy(&self) -> BlockPolicy {
        match self {
            RangeKind::Trip => BlockPolicy::trips(),
            RangeKind::Vacation => BlockPolicy::vacations(),
        }
    }

    /// Prefix distinguishing ids of this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RangeKind::Trip => "",
            RangeKind::Vacation => "v-",
        }
    }
}

/// The deterministic id of a record: `"{start}-{end}-{MM-YYYY}"`, with a
/// `v-` prefix for vacations.
pub fn make_id(kind: RangeKind, start: DayKey, end: DayKey, month: MonthKey) -> String {
    format!("{}{start}-{end}-{month}", kind.id_prefix())
}

/// A trip or vacation period within one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRecord<P> {
    /// Unique within the month's collection.
    pub id: String,
    /// First day (inclusive).
    pub start_day: DayKey,
    /// Last day (inclusive).
    pub end_day: DayKey,
    /// `false` while the record is a synchronizer proposal.
    #[serde(default)]
    pub confirmed: bool,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub details: P,
}

/// A business-trip record.
pub type TripRecord = RangeRecord<TripDetails>;

/// A vacation record.
pub type VacationRecord = RangeRecord<VacationDetails>;

impl<P> RangeRecord<P> {
    /// Every day from `start_day` to `end_day`; empty for an inverted range.
    pub fn days(&self) -> impl Iterator<Item = DayKey> {
        DayKey::span(self.start_day, self.end_day)
    }

    /// Whether `day` lies within the record.
    pub fn covers(&self, day: DayKey) -> bool {
        self.start_day <= day && day <= self.end_day
    }

    /// Whether the record spans exactly one day.
    pub fn is_single_day(&self) -> bool {
        self.start_day == self.end_day
    }

    /// Check that `start_day <= end_day`.
    ///
    /// # Errors
    /// [`Error::InconsistentRange`] for an inverted range.
    pub fn validate(&self) -> Result<()> {
        if self.start_day > self.end_day {
            return Err(Error::InconsistentRange {
                start: self.start_day.number(),
                end: self.end_day.number(),
            });
        }
        Ok(())
    }
}

impl<P: RangeDetails> RangeRecord<P> {
    /// A new unconfirmed record proposed for `[start, end]` of `month`.
    pub fn proposed(
        start: DayKey,
        end: DayKey,
        month: MonthKey,
        config: &TripConfig,
        today: Date,
    ) -> Self {
        Self {
            id: make_id(P::KIND, start, end, month),
            start_day: start,
            end_day: end,
            confirmed: false,
            details: P::proposed(config, today),
        }
    }
}

/// Payload of a [`RangeRecord`].
pub trait RangeDetails: Clone + std::fmt::Debug {
    /// Which kind of record carries this payload.
    const KIND: RangeKind;

    /// Defaults for a freshly proposed record.
    fn proposed(config: &TripConfig, today: Date) -> Self;
}

/// Trip-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    /// Departure time on the first day (`HH:MM`).
    #[serde(default)]
    pub start_time: String,
    /// Return time on the last day; empty until known.
    #[serde(default)]
    pub end_time: String,
    /// Distance driven, in kilometres.
    #[serde(default)]
    pub km: u32,
}

impl RangeDetails for TripDetails {
    const KIND: RangeKind = RangeKind::Trip;

    fn proposed(config: &TripConfig, _today: Date) -> Self {
        Self {
            start_time: config.default_start_time.clone(),
            end_time: String::new(),
            km: config.default_km,
        }
    }
}

/// Vacation-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationDetails {
    /// Manual correction of the working-day count.
    #[serde(default)]
    pub working_days_override: Option<u32>,
    /// Date the request was created, `DD.MM.YYYY`.
    #[serde(default)]
    pub request_date: String,
}

impl RangeDetails for VacationDetails {
    const KIND: RangeKind = RangeKind::Vacation;

    fn proposed(_config: &TripConfig, today: Date) -> Self {
        Self {
            working_days_override: None,
            request_date: today.to_string(),
        }
    }
}

impl VacationRecord {
    /// The working-day count to print: the override when it is at least one,
    /// `computed` otherwise.
    pub fn effective_working_days(&self, computed: u32) -> u32 {
        match self.details.working_days_override {
            Some(n) if n >= 1 => n,
            _ => computed,
        }
    }
}
