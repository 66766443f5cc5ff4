//! Contiguous block detection.
//!
//! A [`Block`] is a maximal run of days carrying a target code.  Whether two
//! target days with a gap between them belong to the same block is decided by
//! a [`Transparency`] rule: every gap day must be transparent for the run to
//! continue.

use dz_time::{Calendar, DayKey};
use tracing::debug;

use crate::day_code::DayCode;
use crate::ledger::DayLedger;

/// An inclusive run of days within one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// First day of the run.
    pub start: DayKey,
    /// Last day of the run (`start <= end`).
    pub end: DayKey,
}

impl Block {
    /// A single-day block.
    pub fn single(day: DayKey) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Every day from `start` to `end`.
    pub fn days(&self) -> impl Iterator<Item = DayKey> {
        DayKey::span(self.start, self.end)
    }

    /// Number of calendar days spanned.
    pub fn len(&self) -> usize {
        self.days().count()
    }

    /// Whether the block spans no days.  Never true for detector output.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Which non-target days may be skipped without breaking a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transparency {
    /// Nothing is skipped: blocks need literal day-to-day adjacency.
    StrictAdjacency,
    /// Weekends, public holidays, and target-coded days are skipped; a genuine
    /// workday breaks the block.  Target marks that themselves fall on a
    /// weekend or holiday bridge gaps but never start or count as block days.
    WeekendHolidayTransparent,
}

impl Transparency {
    /// Whether a target-coded `day` is a block candidate under this rule.
    pub fn admits<C: Calendar + ?Sized>(&self, calendar: &C, ledger: &DayLedger, day: DayKey) -> bool {
        match self {
            Transparency::StrictAdjacency => true,
            Transparency::WeekendHolidayTransparent => calendar.is_workday(ledger.month(), day),
        }
    }

    /// Whether the gap day `day` may be skipped inside a run of `target` days.
    pub fn bridges<C: Calendar + ?Sized>(
        &self,
        calendar: &C,
        ledger: &DayLedger,
        day: DayKey,
        target: &DayCode,
    ) -> bool {
        match self {
            Transparency::StrictAdjacency => false,
            Transparency::WeekendHolidayTransparent => {
                let month = ledger.month();
                calendar.is_weekend_day(month, day)
                    || calendar.is_holiday_day(month, day)
                    || ledger.is(day, target)
            }
        }
    }
}

/// The target code and transparency rule used to find one kind of period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPolicy {
    /// Code the blocks are made of.
    pub target: DayCode,
    /// Gap rule.
    pub transparency: Transparency,
}

impl BlockPolicy {
    /// Business trips: `SC` days with strict adjacency.
    pub fn trips() -> Self {
        Self {
            target: DayCode::Trip,
            transparency: Transparency::StrictAdjacency,
        }
    }

    /// Vacations: `D` workdays, bridging weekends and holidays.
    pub fn vacations() -> Self {
        Self {
            target: DayCode::Vacation,
            transparency: Transparency::WeekendHolidayTransparent,
        }
    }
}

/// Group sorted `days` into maximal runs.
///
/// Consecutive days `prev < curr` share a run when every day strictly between
/// them satisfies `bridges`.  The final run is always emitted.
pub fn group_runs(days: &[DayKey], mut bridges: impl FnMut(DayKey) -> bool) -> Vec<Block> {
    let Some((&first, rest)) = days.split_first() else {
        return Vec::new();
    };
    let mut blocks = Vec::new();
    let mut current = Block::single(first);
    for &day in rest {
        if DayKey::between(current.end, day).all(&mut bridges) {
            current.end = day;
        } else {
            blocks.push(current);
            current = Block::single(day);
        }
    }
    blocks.push(current);
    blocks
}

/// Finds blocks of a target code in a [`DayLedger`].
#[derive(Debug, Clone, Copy)]
pub struct BlockDetector<'c, C: Calendar + ?Sized> {
    calendar: &'c C,
}

impl<'c, C: Calendar + ?Sized> BlockDetector<'c, C> {
    /// Create a detector classifying days with `calendar`.
    pub fn new(calendar: &'c C) -> Self {
        Self { calendar }
    }

    /// The calendar used for weekend/holiday checks.
    pub fn calendar(&self) -> &'c C {
        self.calendar
    }

    /// Candidate days of `policy` in ascending order.
    pub fn candidates(&self, ledger: &DayLedger, policy: &BlockPolicy) -> Vec<DayKey> {
        ledger
            .days_with(&policy.target)
            .filter(|&d| policy.transparency.admits(self.calendar, ledger, d))
            .collect()
    }

    /// Whether `day` counts as a target day of `policy`.
    pub fn is_candidate(&self, ledger: &DayLedger, policy: &BlockPolicy, day: DayKey) -> bool {
        ledger.is(day, &policy.target) && policy.transparency.admits(self.calendar, ledger, day)
    }

    /// Maximal blocks of `policy.target` in `ledger`, in day order.
    pub fn detect(&self, ledger: &DayLedger, policy: &BlockPolicy) -> Vec<Block> {
        let candidates = self.candidates(ledger, policy);
        let blocks = group_runs(&candidates, |gap| {
            policy
                .transparency
                .bridges(self.calendar, ledger, gap, &policy.target)
        });
        debug!(
            month = %ledger.month(),
            target = %policy.target,
            candidates = candidates.len(),
            blocks = blocks.len(),
            "detected blocks"
        );
        blocks
    }
}
