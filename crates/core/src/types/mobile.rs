//! Mobile number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Mobile`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum MobileError {
    /// The input string is empty.
    #[error("mobile number cannot be empty")]
    Empty,
    /// The input has too few digits.
    #[error("mobile number must have at least {min} digits")]
    TooShort {
        /// Minimum number of digits.
        min: usize,
    },
    /// The input has too many digits.
    #[error("mobile number must have at most {max} digits")]
    TooLong {
        /// Maximum number of digits.
        max: usize,
    },
    /// The input contains a character that is not a digit.
    #[error("mobile number may only contain digits after an optional leading +")]
    InvalidCharacter,
}

/// A subscriber mobile number.
///
/// Mobile numbers are the unique natural key for user accounts, so they get
/// basic structural validation before they enter the store.
///
/// ## Constraints
///
/// - 6 to 15 digits (ITU-T E.164 upper bound)
/// - Optional leading `+`
/// - No separators or whitespace
///
/// ## Examples
///
/// ```
/// use boutique_core::Mobile;
///
/// assert!(Mobile::parse("9999999999").is_ok());
/// assert!(Mobile::parse("+918050990669").is_ok());
///
/// assert!(Mobile::parse("").is_err());          // empty
/// assert!(Mobile::parse("98-76").is_err());     // separator
/// assert!(Mobile::parse("12345").is_err());     // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Mobile(String);

impl Mobile {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 6;
    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `Mobile` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digit characters
    /// (other than one leading `+`), or has fewer than 6 or more than 15
    /// digits.
    pub fn parse(s: &str) -> Result<Self, MobileError> {
        if s.is_empty() {
            return Err(MobileError::Empty);
        }

        let digits = s.strip_prefix('+').unwrap_or(s);

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MobileError::InvalidCharacter);
        }

        if digits.len() < Self::MIN_DIGITS {
            return Err(MobileError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        if digits.len() > Self::MAX_DIGITS {
            return Err(MobileError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the mobile number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Mobile` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Mobile {
    type Err = MobileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
