//! Postal codes.

use std::fmt;

/// Error returned when a postal code does not have 8 digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("CEP must have exactly 8 digits, found {digits}")]
pub struct InvalidCep {
    /// Number of digits left after stripping formatting.
    pub digits: usize,
}

/// A Brazilian postal code (CEP): exactly 8 ASCII digits.
///
/// # Examples
///
/// ```
/// use cep_server::domain::Cep;
///
/// let cep = Cep::parse_normalized("01310-100").unwrap();
/// assert_eq!(cep.as_str(), "01310100");
/// assert_eq!(cep.formatted(), "01310-100");
///
/// assert!(Cep::parse_normalized("1310-100").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cep([u8; 8]);

impl Cep {
    /// Parse user input. Every non-digit character (dashes, dots, spaces)
    /// is discarded; what remains must be exactly 8 digits.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCep> {
        let digits: Vec<u8> = s.bytes().filter(u8::is_ascii_digit).collect();

        let bytes: [u8; 8] = digits
            .as_slice()
            .try_into()
            .map_err(|_| InvalidCep {
                digits: digits.len(),
            })?;

        Ok(Cep(bytes))
    }

    /// The bare 8 digits.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("00000000")
    }

    /// The conventional `NNNNN-NNN` rendering.
    pub fn formatted(&self) -> String {
        let s = self.as_str();
        format!("{}-{}", &s[..5], &s[5..])
    }
}

impl fmt::Debug for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cep({})", self.as_str())
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_and_bare_are_equal() {
        let a = Cep::parse_normalized("01310-100").unwrap();
        let b = Cep::parse_normalized("01310100").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "01310100");
    }

    #[test]
    fn strips_any_formatting() {
        let cep = Cep::parse_normalized(" 30.140-071 ").unwrap();
        assert_eq!(cep.as_str(), "30140071");
        assert_eq!(cep.formatted(), "30140-071");
    }

    #[test]
    fn rejects_wrong_digit_count() {
        assert_eq!(Cep::parse_normalized("").unwrap_err().digits, 0);
        assert_eq!(Cep::parse_normalized("1234567").unwrap_err().digits, 7);
        assert_eq!(Cep::parse_normalized("123456789").unwrap_err().digits, 9);
        assert_eq!(Cep::parse_normalized("abc-defgh").unwrap_err().digits, 0);
    }

    #[test]
    fn error_display() {
        let err = Cep::parse_normalized("123").unwrap_err();
        assert_eq!(err.to_string(), "CEP must have exactly 8 digits, found 3");
    }
}
