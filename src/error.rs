//! Error types for the squarecipher library.

use std::fmt;

/// Errors produced by the squarecipher library.
///
/// Every error is fatal to the single operation in progress: no partial
/// output is produced and nothing is retried. Variants carry the
/// offending character or text so callers can diagnose bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Cleaned text still contains characters outside A–Z.
    InvalidInput {
        /// The cleaned text that failed validation.
        text: String,
    },
    /// Key text normalized to an empty string.
    EmptyKey,
    /// Square construction would place more than 25 distinct letters.
    ///
    /// Indicates an upstream cleaning defect, e.g. an unmerged 'J'.
    SquareOverflow {
        /// The letter that did not fit.
        letter: char,
    },
    /// A letter was not found in a square during substitution.
    ///
    /// Unreachable when input went through the cipher's own text prep.
    UnknownLetter {
        /// The letter that was looked up.
        letter: char,
    },
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidInput { text } => {
                write!(f, "Can only handle alphabetical input: \"{}\"", text)
            }
            CipherError::EmptyKey => {
                write!(f, "Key text normalizes to an empty string")
            }
            CipherError::SquareOverflow { letter } => {
                write!(
                    f,
                    "Square overflow placing '{}': more than 25 distinct letters",
                    letter
                )
            }
            CipherError::UnknownLetter { letter } => {
                write!(f, "Letter '{}' is not present in the square", letter)
            }
        }
    }
}

impl std::error::Error for CipherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = CipherError::InvalidInput {
            text: "ÜBER".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Can only handle alphabetical input: \"ÜBER\""
        );
    }

    #[test]
    fn test_display_empty_key() {
        let err = CipherError::EmptyKey;
        assert_eq!(format!("{}", err), "Key text normalizes to an empty string");
    }

    #[test]
    fn test_display_square_overflow() {
        let err = CipherError::SquareOverflow { letter: 'Z' };
        assert_eq!(
            format!("{}", err),
            "Square overflow placing 'Z': more than 25 distinct letters"
        );
    }

    #[test]
    fn test_display_unknown_letter() {
        let err = CipherError::UnknownLetter { letter: 'J' };
        assert_eq!(format!("{}", err), "Letter 'J' is not present in the square");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::EmptyKey, CipherError::EmptyKey);
        assert_ne!(
            CipherError::EmptyKey,
            CipherError::UnknownLetter { letter: 'A' }
        );
        assert_ne!(
            CipherError::UnknownLetter { letter: 'A' },
            CipherError::UnknownLetter { letter: 'B' }
        );
    }

    #[test]
    fn test_error_clone() {
        let err = CipherError::InvalidInput {
            text: "123".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
