//! 5×5 Polybius square: keyed letter grid with coordinate lookup.
//!
//! The square holds each letter of the 25-letter alphabet (J merged into
//! I) exactly once. Deduplicated key letters are placed first in
//! row-major reading order, then the remaining alphabet letters in A–Z
//! order. Letter → coordinate lookup goes through a direct-addressed
//! 26-entry table rather than a hash map, so the bijection between cells
//! and letters is checkable by construction.

use std::fmt;

use crate::error::CipherError;
use crate::text::{normalize, ALPHABET_WITHOUT_J};

/// Immutable 5×5 letter grid with bidirectional letter ↔ (row, col) lookup.
///
/// Built once from key text and never mutated; used by the Playfair and
/// Four-square ciphers for digraph substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusSquare {
    /// Letters in row-major order, as ASCII uppercase bytes.
    grid: [[u8; 5]; 5],
    /// Coordinates indexed by `letter - b'A'`; `None` for absent letters
    /// (always 'J', plus nothing else once construction succeeds).
    coords: [Option<(usize, usize)>; 26],
}

impl PolybiusSquare {
    /// Builds a square from key text.
    ///
    /// The key is normalized (punctuation stripped, digits spelled out,
    /// upper-cased) but NOT J-merged — callers working in the 25-letter
    /// alphabet merge J→I before calling. An empty key yields the plain
    /// alphabet square.
    ///
    /// # Errors
    /// - [`CipherError::InvalidInput`] if the key has non-alphabetic
    ///   residue after normalization.
    /// - [`CipherError::SquareOverflow`] if more than 25 distinct letters
    ///   would be placed. Only reachable when the key was not reduced to
    ///   the 25-letter alphabet, e.g. contains an unmerged 'J'.
    ///
    /// # Examples
    ///
    /// ```
    /// use squarecipher::PolybiusSquare;
    ///
    /// let square = PolybiusSquare::build("GEMINI").unwrap();
    /// assert_eq!(
    ///     square.to_string(),
    ///     "G E M I N\nA B C D F\nH K L O P\nQ R S T U\nV W X Y Z"
    /// );
    /// ```
    pub fn build(keytext: &str) -> Result<Self, CipherError> {
        let key = normalize(keytext)?;
        let mut grid = [[0u8; 5]; 5];
        let mut coords: [Option<(usize, usize)>; 26] = [None; 26];
        let mut placed = 0usize;
        for letter in key.bytes().chain(ALPHABET_WITHOUT_J.bytes()) {
            let slot = (letter - b'A') as usize;
            if coords[slot].is_some() {
                continue;
            }
            if placed == 25 {
                return Err(CipherError::SquareOverflow {
                    letter: letter as char,
                });
            }
            let cell = (placed / 5, placed % 5);
            grid[cell.0][cell.1] = letter;
            coords[slot] = Some(cell);
            placed += 1;
        }
        Ok(PolybiusSquare { grid, coords })
    }

    /// Looks up the grid coordinates of a letter.
    ///
    /// # Errors
    /// Returns [`CipherError::UnknownLetter`] if the letter is not in the
    /// square (anything outside A–Z, or 'J').
    pub fn coords_of(&self, letter: char) -> Result<(usize, usize), CipherError> {
        letter
            .try_into()
            .ok()
            .filter(u8::is_ascii_uppercase)
            .and_then(|b: u8| self.coords[(b - b'A') as usize])
            .ok_or(CipherError::UnknownLetter { letter })
    }

    /// Returns the letter at the given cell.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside `[0, 4]`.
    pub fn letter_at(&self, row: usize, col: usize) -> char {
        self.grid[row][col] as char
    }

    /// One grid row as space-separated uppercase letters, e.g. `"G E M I N"`.
    pub(crate) fn render_row(&self, row: usize) -> String {
        let mut out = String::with_capacity(9);
        for (col, &letter) in self.grid[row].iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            out.push(letter as char);
        }
        out
    }
}

impl fmt::Display for PolybiusSquare {
    /// Renders the grid as five lines of space-separated letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..5 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.render_row(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_square_layout() {
        let square = PolybiusSquare::build("GEMINI").unwrap();
        assert_eq!(
            square.to_string(),
            "G E M I N\nA B C D F\nH K L O P\nQ R S T U\nV W X Y Z"
        );
    }

    #[test]
    fn test_empty_key_yields_plain_alphabet() {
        let square = PolybiusSquare::build("").unwrap();
        assert_eq!(
            square.to_string(),
            "A B C D E\nF G H I K\nL M N O P\nQ R S T U\nV W X Y Z"
        );
    }

    #[test]
    fn test_key_letters_deduplicated_in_order() {
        // AQUILA: second 'A' is skipped, then the fill starts at 'B'.
        let square = PolybiusSquare::build("AQUILA").unwrap();
        assert_eq!(square.render_row(0), "A Q U I L");
        assert_eq!(square.render_row(1), "B C D E F");
    }

    #[test]
    fn test_key_is_normalized() {
        let long_key = PolybiusSquare::build("the quick brown fox!").unwrap();
        let clean_key = PolybiusSquare::build("THEQUICKBROWNFOX").unwrap();
        assert_eq!(long_key, clean_key);
    }

    #[test]
    fn test_bijection_holds_for_keyed_square() {
        let square = PolybiusSquare::build("GEMINI").unwrap();
        let mut seen = [false; 26];
        for row in 0..5 {
            for col in 0..5 {
                let letter = square.letter_at(row, col);
                let slot = (letter as u8 - b'A') as usize;
                assert!(!seen[slot], "letter {} appears twice", letter);
                seen[slot] = true;
                assert_eq!(square.coords_of(letter).unwrap(), (row, col));
            }
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), 25);
        assert!(!seen[(b'J' - b'A') as usize]);
    }

    #[test]
    fn test_coords_of_unknown_letter() {
        let square = PolybiusSquare::build("GEMINI").unwrap();
        assert_eq!(
            square.coords_of('J').unwrap_err(),
            CipherError::UnknownLetter { letter: 'J' }
        );
        assert_eq!(
            square.coords_of('a').unwrap_err(),
            CipherError::UnknownLetter { letter: 'a' }
        );
        assert_eq!(
            square.coords_of('?').unwrap_err(),
            CipherError::UnknownLetter { letter: '?' }
        );
    }

    #[test]
    fn test_unmerged_j_overflows() {
        // 'J' plus the full 25-letter fill makes 26 distinct letters.
        let err = PolybiusSquare::build("JAR").unwrap_err();
        assert!(matches!(err, CipherError::SquareOverflow { .. }));
    }

    #[test]
    fn test_invalid_key_rejected() {
        assert!(matches!(
            PolybiusSquare::build("k*y"),
            Err(CipherError::InvalidInput { .. })
        ));
    }
}
