//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid Indian Railways station code.
///
/// Station codes are 2 to 5 uppercase ASCII letters (NDLS = New Delhi,
/// BCT = Mumbai Central). This type guarantees that any `StationCode`
/// value is valid by construction.
///
/// # Examples
///
/// ```
/// use rail_tracker::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("ndls").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("N").is_err());
/// assert!(StationCode::parse("NEWDELHI").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode {
    bytes: [u8; 5],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 2 to 5 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let src = s.as_bytes();

        if src.len() < 2 || src.len() > 5 {
            return Err(InvalidStationCode {
                reason: "must be 2 to 5 characters",
            });
        }

        for &b in src {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        let mut bytes = [0u8; 5];
        bytes[..src.len()].copy_from_slice(src);

        Ok(StationCode {
            bytes,
            len: src.len() as u8,
        })
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
