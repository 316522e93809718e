//! Brazilian state codes.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid UF code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid UF code: {reason}")]
pub struct InvalidUf {
    reason: &'static str,
}

/// A two-letter Brazilian state abbreviation (UF).
///
/// Always two uppercase ASCII letters. Whether the code names one of the 27
/// federative units is a question for the reference table, not for this
/// type: the address search only needs the shape to be right.
///
/// # Examples
///
/// ```
/// use cep_server::domain::Uf;
///
/// let sp = Uf::parse("SP").unwrap();
/// assert_eq!(sp.as_str(), "SP");
///
/// assert!(Uf::parse("sp").is_err());
/// assert_eq!(Uf::parse_normalized(" sp ").unwrap(), sp);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uf([u8; 2]);

impl Uf {
    /// Parse a UF code. The input must be exactly 2 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidUf> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidUf {
                reason: "must be exactly 2 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidUf {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(Uf([bytes[0], bytes[1]]))
    }

    /// Parse user input: surrounding whitespace is trimmed and letters are
    /// upper-cased before validation.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidUf> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Build from bytes known to be uppercase letters (reference table only).
    pub(super) const fn from_table(bytes: [u8; 2]) -> Self {
        Uf(bytes)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Debug for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uf({})", self.as_str())
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Uf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert!(Uf::parse("SP").is_ok());
        assert!(Uf::parse("MG").is_ok());
        assert!(Uf::parse("ZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Uf::parse("sp").is_err());
        assert!(Uf::parse("Sp").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Uf::parse("").is_err());
        assert!(Uf::parse("S").is_err());
        assert!(Uf::parse("SPX").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Uf::parse("S1").is_err());
        assert!(Uf::parse("S-").is_err());
        assert!(Uf::parse("SÃ").is_err());
    }

    #[test]
    fn normalized_trims_and_uppercases() {
        let uf = Uf::parse_normalized("  rj\t").unwrap();
        assert_eq!(uf.as_str(), "RJ");
        assert!(Uf::parse_normalized(" r j ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let uf = Uf::parse("BA").unwrap();
        assert_eq!(uf.to_string(), "BA");
        assert_eq!(format!("{:?}", uf), "Uf(BA)");
    }
}
