//! Reconciling detected blocks with stored range records.
//!
//! Synchronization is additive: every existing record is returned unchanged
//! and in order, and new unconfirmed records are appended for target days that
//! no existing record covers.  A new vacation may span covered days it bridges.
//! Running it on its own output adds nothing.

use std::collections::{BTreeSet, HashSet};

use dz_core::errors::Result;
use dz_ledger::{group_runs, Block, BlockDetector, DayLedger};
use dz_time::{Calendar, Date, DayKey};
use tracing::{debug, warn};

use crate::config::TripConfig;
use crate::record::{RangeDetails, RangeRecord, TripRecord, VacationRecord};

/// Proposes trip and vacation records for uncovered target days.
#[derive(Debug, Clone, Copy)]
pub struct RangeSynchronizer<'a, C: Calendar + ?Sized> {
    calendar: &'a C,
    config: &'a TripConfig,
    today: Date,
}

impl<'a, C: Calendar + ?Sized> RangeSynchronizer<'a, C> {
    /// `today` becomes the request date of proposed vacations.
    pub fn new(calendar: &'a C, config: &'a TripConfig, today: Date) -> Self {
        Self {
            calendar,
            config,
            today,
        }
    }

    /// A synchronizer dated with the local wall-clock date.
    pub fn for_today(calendar: &'a C, config: &'a TripConfig) -> Result<Self> {
        Ok(Self::new(calendar, config, Date::today()?))
    }

    /// The request date used for proposals.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Reconcile `existing` with the blocks found in `ledger`.
    pub fn sync<P: RangeDetails>(
        &self,
        ledger: &DayLedger,
        existing: &[RangeRecord<P>],
    ) -> Vec<RangeRecord<P>> {
        let month = ledger.month();
        let policy = P::KIND.policy();
        let detector = BlockDetector::new(self.calendar);
        let is_target = |d: DayKey| detector.is_candidate(ledger, &policy, d);

        let targets: BTreeSet<DayKey> = detector
            .detect(ledger, &policy)
            .iter()
            .flat_map(Block::days)
            .filter(|&d| is_target(d))
            .collect();
        let claimed: BTreeSet<DayKey> = existing.iter().flat_map(RangeRecord::days).collect();
        let covered: BTreeSet<DayKey> = claimed.iter().copied().filter(|&d| is_target(d)).collect();
        let uncovered: Vec<DayKey> = targets.difference(&covered).copied().collect();

        // Covered days bridge like any other target day, so a new vacation may
        // span an existing record.
        let runs = group_runs(&uncovered, |gap| {
            policy
                .transparency
                .bridges(self.calendar, ledger, gap, &policy.target)
        });

        let mut ids: HashSet<String> = existing.iter().map(|r| r.id.clone()).collect();
        let mut out = existing.to_vec();
        for run in &runs {
            let mut record =
                RangeRecord::<P>::proposed(run.start, run.end, month, self.config, self.today);
            if ids.contains(&record.id) {
                let base = std::mem::take(&mut record.id);
                let mut n = 2;
                record.id = loop {
                    let id = format!("{base}~{n}");
                    if !ids.contains(&id) {
                        break id;
                    }
                    n += 1;
                };
                warn!(%base, id = %record.id, "proposed id already in use, added a suffix");
            }
            ids.insert(record.id.clone());
            out.push(record);
        }

        debug!(
            %month,
            kind = ?P::KIND,
            targets = targets.len(),
            uncovered = uncovered.len(),
            existing = existing.len(),
            added = runs.len(),
            "synchronized ranges"
        );
        out
    }

    /// [`sync`](Self::sync) for business trips.
    pub fn sync_trips(&self, ledger: &DayLedger, existing: &[TripRecord]) -> Vec<TripRecord> {
        self.sync(ledger, existing)
    }

    /// [`sync`](Self::sync) for vacations.
    pub fn sync_vacations(
        &self,
        ledger: &DayLedger,
        existing: &[VacationRecord],
    ) -> Vec<VacationRecord> {
        self.sync(ledger, existing)
    }
}
