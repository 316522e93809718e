//! Telephone area codes.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid DDD.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid DDD: {reason}")]
pub struct InvalidDdd {
    reason: &'static str,
}

/// A two-digit Brazilian telephone area code (DDD), 11 through 99.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ddd(u8);

impl Ddd {
    /// Build a DDD from its numeric value.
    pub fn new(code: u8) -> Result<Self, InvalidDdd> {
        if !(11..=99).contains(&code) {
            return Err(InvalidDdd {
                reason: "must be between 11 and 99",
            });
        }
        if code % 10 == 0 {
            return Err(InvalidDdd {
                reason: "second digit must not be zero",
            });
        }
        Ok(Ddd(code))
    }

    /// Build from a value known to be valid (reference table only).
    pub(super) const fn from_table(code: u8) -> Self {
        Ddd(code)
    }

    /// Parse a DDD from exactly two ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidDdd> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidDdd {
                reason: "must be exactly 2 digits",
            });
        }

        Self::new((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
    }

    /// The numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for Ddd {
    type Err = InvalidDdd;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Ddd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ddd({})", self.0)
    }
}

impl fmt::Display for Ddd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for Ddd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(Ddd::parse("11").unwrap().value(), 11);
        assert_eq!(Ddd::parse("99").unwrap().value(), 99);
        assert_eq!("34".parse::<Ddd>().unwrap().value(), 34);
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Ddd::parse("00").is_err());
        assert!(Ddd::parse("09").is_err());
        assert!(Ddd::parse("10").is_err());
        assert!(Ddd::parse("20").is_err());
        assert!(Ddd::new(100).is_err());
    }

    #[test]
    fn reject_malformed() {
        assert!(Ddd::parse("").is_err());
        assert!(Ddd::parse("1").is_err());
        assert!(Ddd::parse("111").is_err());
        assert!(Ddd::parse("1a").is_err());
        assert!(Ddd::parse(" 11").is_err());
    }

    #[test]
    fn display_is_two_digits() {
        assert_eq!(Ddd::new(21).unwrap().to_string(), "21");
        assert_eq!(format!("{:?}", Ddd::new(21).unwrap()), "Ddd(21)");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Ddd::new(61).unwrap()).unwrap();
        assert_eq!(json, "\"61\"");
    }
}
