//! PNR (Passenger Name Record) type.

use std::fmt;

/// Error returned when parsing an invalid PNR.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid PNR: {reason}")]
pub struct InvalidPnr {
    reason: &'static str,
}

/// A valid PNR, the 10-digit reservation identifier issued by the
/// railway's booking system.
///
/// # Examples
///
/// ```
/// use rail_tracker::domain::Pnr;
///
/// let pnr = Pnr::parse("8135417862").unwrap();
/// assert_eq!(pnr.as_str(), "8135417862");
///
/// assert!(Pnr::parse("813541786").is_err());
/// assert!(Pnr::parse("81354178620").is_err());
/// assert!(Pnr::parse("813541786X").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pnr([u8; 10]);

impl Pnr {
    /// Parse a PNR from a string.
    ///
    /// The input must be exactly 10 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidPnr> {
        let src = s.as_bytes();

        if src.len() != 10 {
            return Err(InvalidPnr {
                reason: "must be exactly 10 digits",
            });
        }

        for &b in src {
            if !b.is_ascii_digit() {
                return Err(InvalidPnr {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        let mut digits = [0u8; 10];
        digits.copy_from_slice(src);

        Ok(Pnr(digits))
    }

    /// Returns the PNR as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Pnr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pnr({})", self.as_str())
    }
}

impl fmt::Display for Pnr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_pnr() {
        assert!(Pnr::parse("8135417862").is_ok());
        assert!(Pnr::parse("0000000000").is_ok());
        assert!(Pnr::parse("9999999999").is_ok());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Pnr::parse("").is_err());
        assert!(Pnr::parse("813541786").is_err());
        assert!(Pnr::parse("81354178620").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(Pnr::parse("813541786X").is_err());
        assert!(Pnr::parse("81354-7862").is_err());
        assert!(Pnr::parse("8135 17862").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let pnr = Pnr::parse("8135417862").unwrap();
        assert_eq!(pnr.as_str(), "8135417862");
    }

    #[test]
    fn display_and_debug() {
        let pnr = Pnr::parse("8135417862").unwrap();
        assert_eq!(format!("{}", pnr), "8135417862");
        assert_eq!(format!("{:?}", pnr), "Pnr(8135417862)");
    }

    #[test]
    fn equality() {
        let a = Pnr::parse("8135417862").unwrap();
        let b = Pnr::parse("8135417862").unwrap();
        let c = Pnr::parse("8135417863").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9]{10}") {
            let pnr = Pnr::parse(&s).unwrap();
            prop_assert_eq!(pnr.as_str(), s.as_str());
        }

        /// Wrong-length digit strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9]{0,9}|[0-9]{11,15}") {
            prop_assert!(Pnr::parse(&s).is_err());
        }
    }
}
