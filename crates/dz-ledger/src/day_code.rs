//! `DayCode` — the attendance status recorded for one calendar day.

use dz_core::Real;
use dz_time::DayKind;
use serde::{Deserialize, Serialize};

/// Status code of a single ledger day.
///
/// The standard codes have fixed spellings; any other string (normally a
/// number such as `"7.5"`) is kept verbatim as a worked-hours override so that
/// documents round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayCode {
    /// Full working day (`"8"`).
    WorkFull,
    /// Day off (`"0"`).
    Off,
    /// Vacation (`"D"`, *dovolenka*).
    Vacation,
    /// Sick leave (`"PN"`).
    Sick,
    /// Child care (`"O"`, *OČR*).
    ChildCare,
    /// Other absence (`"IN"`).
    OtherAbsence,
    /// Public holiday (`"S"`, *sviatok*).
    Holiday,
    /// Business trip (`"SC"`, *služobná cesta*).
    Trip,
    /// Non-standard worked-hours count, stored as entered.
    Hours(String),
}

impl DayCode {
    /// Parse a stored code.  Unknown strings become [`DayCode::Hours`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "8" => DayCode::WorkFull,
            "0" => DayCode::Off,
            "D" => DayCode::Vacation,
            "PN" => DayCode::Sick,
            "O" => DayCode::ChildCare,
            "IN" => DayCode::OtherAbsence,
            "S" => DayCode::Holiday,
            "SC" => DayCode::Trip,
            other => DayCode::Hours(other.to_string()),
        }
    }

    /// The stored spelling of the code.
    pub fn as_str(&self) -> &str {
        match self {
            DayCode::WorkFull => "8",
            DayCode::Off => "0",
            DayCode::Vacation => "D",
            DayCode::Sick => "PN",
            DayCode::ChildCare => "O",
            DayCode::OtherAbsence => "IN",
            DayCode::Holiday => "S",
            DayCode::Trip => "SC",
            DayCode::Hours(s) => s,
        }
    }

    /// The code a freshly generated month assigns to a day of `kind`.
    pub fn default_for(kind: DayKind) -> Self {
        match kind {
            DayKind::Weekend => DayCode::Off,
            DayKind::Holiday => DayCode::Holiday,
            DayKind::Workday => DayCode::WorkFull,
        }
    }

    /// Hours credited to the monthly total.
    ///
    /// A business trip counts as a full 8-hour day, a numeric code counts as
    /// its value, and every absence code counts as zero.
    pub fn worked_hours(&self) -> Real {
        match self {
            DayCode::WorkFull | DayCode::Trip => 8.0,
            DayCode::Hours(s) => s
                .trim()
                .parse::<Real>()
                .ok()
                .filter(|h| h.is_finite())
                .unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

impl From<String> for DayCode {
    fn from(s: String) -> Self {
        DayCode::from_code(&s)
    }
}

impl From<DayCode> for String {
    fn from(code: DayCode) -> String {
        match code {
            DayCode::Hours(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for DayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_codes_roundtrip() {
        for code in ["8", "0", "D", "PN", "O", "IN", "S", "SC"] {
            let parsed = DayCode::from_code(code);
            assert!(!matches!(parsed, DayCode::Hours(_)), "{code} parsed as override");
            assert_eq!(parsed.as_str(), code);
        }
    }

    #[test]
    fn overrides_are_kept_verbatim() {
        let code = DayCode::from_code("7.5");
        assert_eq!(code, DayCode::Hours("7.5".into()));
        assert_eq!(String::from(code), "7.5");
    }

    #[test]
    fn worked_hours() {
        assert_abs_diff_eq!(DayCode::WorkFull.worked_hours(), 8.0);
        assert_abs_diff_eq!(DayCode::Trip.worked_hours(), 8.0);
        assert_abs_diff_eq!(DayCode::Vacation.worked_hours(), 0.0);
        assert_abs_diff_eq!(DayCode::from_code("6.5").worked_hours(), 6.5);
        assert_abs_diff_eq!(DayCode::from_code("abc").worked_hours(), 0.0);
        assert_abs_diff_eq!(DayCode::from_code("NaN").worked_hours(), 0.0);
    }

    #[test]
    fn defaults_for_generated_months() {
        assert_eq!(DayCode::default_for(DayKind::Weekend), DayCode::Off);
        assert_eq!(DayCode::default_for(DayKind::Holiday), DayCode::Holiday);
        assert_eq!(DayCode::default_for(DayKind::Workday), DayCode::WorkFull);
    }

    #[test]
    fn serde_as_plain_string() {
        assert_eq!(serde_json::to_string(&DayCode::Trip).unwrap(), "\"SC\"");
        assert_eq!(
            serde_json::from_str::<DayCode>("\"4\"").unwrap(),
            DayCode::Hours("4".into())
        );
    }
}
