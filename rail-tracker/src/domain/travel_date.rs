//! Travel date type.
//!
//! The railway API exchanges dates as `DD-MM-YYYY` strings. This type
//! keeps a real calendar date internally and formats back to the wire
//! representation on display.

use std::fmt;

use chrono::NaiveDate;

/// Wire format for journey dates.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Error returned when parsing an invalid travel date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel date: {reason}")]
pub struct InvalidTravelDate {
    reason: &'static str,
}

/// A journey date in the railway API's `DD-MM-YYYY` format.
///
/// # Examples
///
/// ```
/// use rail_tracker::domain::TravelDate;
///
/// let date = TravelDate::parse("13-08-2025").unwrap();
/// assert_eq!(date.to_string(), "13-08-2025");
///
/// // ISO ordering is rejected
/// assert!(TravelDate::parse("2025-08-13").is_err());
///
/// // Impossible dates are rejected
/// assert!(TravelDate::parse("32-01-2025").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parse a travel date from a `DD-MM-YYYY` string.
    pub fn parse(s: &str) -> Result<Self, InvalidTravelDate> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(TravelDate)
            .map_err(|_| InvalidTravelDate {
                reason: "must be a valid DD-MM-YYYY date",
            })
    }

    /// Wrap an existing calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        TravelDate(date)
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Debug for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelDate({})", self.0.format(DATE_FORMAT))
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_dates() {
        assert!(TravelDate::parse("13-08-2025").is_ok());
        assert!(TravelDate::parse("01-01-2000").is_ok());
        assert!(TravelDate::parse("29-02-2024").is_ok());
    }

    #[test]
    fn reject_wrong_format() {
        assert!(TravelDate::parse("").is_err());
        assert!(TravelDate::parse("2025-08-13").is_err());
        assert!(TravelDate::parse("13/08/2025").is_err());
        assert!(TravelDate::parse("13-8-25").is_err());
    }

    #[test]
    fn reject_impossible_dates() {
        assert!(TravelDate::parse("32-01-2025").is_err());
        assert!(TravelDate::parse("00-01-2025").is_err());
        assert!(TravelDate::parse("13-13-2025").is_err());
        // 2025 is not a leap year
        assert!(TravelDate::parse("29-02-2025").is_err());
    }

    #[test]
    fn display_roundtrip() {
        let date = TravelDate::parse("13-08-2025").unwrap();
        assert_eq!(date.to_string(), "13-08-2025");

        // Single-digit day and month keep their leading zeros
        let padded = TravelDate::parse("05-03-2025").unwrap();
        assert_eq!(padded.to_string(), "05-03-2025");
    }

    #[test]
    fn from_date() {
        let naive = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
        let date = TravelDate::from_date(naive);
        assert_eq!(date.to_string(), "13-08-2025");
        assert_eq!(date.date(), naive);
    }

    #[test]
    fn debug() {
        let date = TravelDate::parse("13-08-2025").unwrap();
        assert_eq!(format!("{:?}", date), "TravelDate(13-08-2025)");
    }

    #[test]
    fn ordering_follows_calendar() {
        let earlier = TravelDate::parse("13-08-2025").unwrap();
        let later = TravelDate::parse("01-01-2026").unwrap();
        assert!(earlier < later);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: any calendar date survives format-then-parse
        #[test]
        fn roundtrip(days in 0i64..40_000) {
            let naive = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
                + chrono::Duration::days(days);
            let date = TravelDate::from_date(naive);
            let reparsed = TravelDate::parse(&date.to_string()).unwrap();
            prop_assert_eq!(reparsed, date);
        }
    }
}
