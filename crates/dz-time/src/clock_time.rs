//! `ClockTime` — a same-day wall-clock time (`HH:MM`).

use dz_core::errors::{Error, Result};
use dz_core::parsers::parse_clock;

/// A wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight at the start of the day.
    pub const START_OF_DAY: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// The last minute of the day.
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 23,
        minute: 59,
    };

    /// Create a time from hour (0–23) and minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour < 24 && minute < 60 {
            Ok(Self { hour, minute })
        } else {
            Err(Error::MalformedTime(format!("{hour}:{minute:02}")))
        }
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl std::str::FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute) = parse_clock(s).ok_or_else(|| Error::MalformedTime(s.to_string()))?;
        Ok(Self { hour, minute })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_minutes() {
        let t: ClockTime = "04:30".parse().unwrap();
        assert_eq!(t.minutes(), 270);
        assert_eq!(t.to_string(), "04:30");
        assert_eq!(ClockTime::END_OF_DAY.minutes(), 1439);
        assert_eq!(ClockTime::START_OF_DAY.to_string(), "00:00");
    }

    #[test]
    fn malformed() {
        assert!(matches!("".parse::<ClockTime>(), Err(Error::MalformedTime(_))));
        assert!(matches!("25:00".parse::<ClockTime>(), Err(Error::MalformedTime(_))));
        assert!(ClockTime::new(12, 60).is_err());
    }
}
