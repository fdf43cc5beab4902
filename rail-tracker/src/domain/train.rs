//! Train number type.

use std::fmt;

/// Error returned when parsing an invalid train number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {reason}")]
pub struct InvalidTrainNumber {
    reason: &'static str,
}

/// A valid Indian Railways train number.
///
/// Train numbers are 4 or 5 ASCII digits (the current numbering scheme
/// is 5 digits, e.g. 22177; a few special services still carry 4-digit
/// numbers). This type guarantees that any `TrainNumber` value is valid
/// by construction.
///
/// # Examples
///
/// ```
/// use rail_tracker::domain::TrainNumber;
///
/// let train = TrainNumber::parse("22177").unwrap();
/// assert_eq!(train.as_str(), "22177");
///
/// // Non-digits are rejected
/// assert!(TrainNumber::parse("2217A").is_err());
///
/// // Wrong length is rejected
/// assert!(TrainNumber::parse("221").is_err());
/// assert!(TrainNumber::parse("221770").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainNumber {
    digits: [u8; 5],
    len: u8,
}

impl TrainNumber {
    /// Parse a train number from a string.
    ///
    /// The input must be 4 or 5 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidTrainNumber> {
        let src = s.as_bytes();

        if src.len() < 4 || src.len() > 5 {
            return Err(InvalidTrainNumber {
                reason: "must be 4 or 5 digits",
            });
        }

        for &b in src {
            if !b.is_ascii_digit() {
                return Err(InvalidTrainNumber {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        let mut digits = [0u8; 5];
        digits[..src.len()].copy_from_slice(src);

        Ok(TrainNumber {
            digits,
            len: src.len() as u8,
        })
    }

    /// Returns the train number as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII digits
        std::str::from_utf8(&self.digits[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.as_str())
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
