//! `Weekday` — day of the week, ISO numbered.

/// ISO weekday: Monday is 1, Sunday is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// The weekday numbered `n`, if `n` is 1–7.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Weekday of a count of days since 1970-01-01, which was a Thursday.
    pub(crate) fn from_epoch_day(days: i32) -> Self {
        ALL[(days + 3).rem_euclid(7) as usize]
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// ISO number, 1–7.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Slovak two-letter abbreviation shown next to each day of a timesheet.
    pub fn short_name_sk(&self) -> &'static str {
        match self {
            Weekday::Monday => "Po",
            Weekday::Tuesday => "Ut",
            Weekday::Wednesday => "St",
            Weekday::Thursday => "Št",
            Weekday::Friday => "Pi",
            Weekday::Saturday => "So",
            Weekday::Sunday => "Ne",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name_sk())
    }
}
