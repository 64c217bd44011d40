//! Four-square cipher: cross-square digraph substitution.
//!
//! Four Polybius squares sit in a 2×2 arrangement. The upper-left and
//! lower-right squares hold the plain alphabet; the upper-right and
//! lower-left squares are keyed. A plaintext digraph is located in the
//! plain squares and its ciphertext read out of the keyed squares at the
//! crossed coordinates. Decryption swaps the roles of the keyed and
//! plain square pairs rather than reversing any arithmetic.

use std::fmt;

use crate::cipher::TextCipher;
use crate::error::CipherError;
use crate::square::PolybiusSquare;
use crate::text::{digraphs, even_pad, five_chunk, merge_j, ALPHABET_WITHOUT_J};

/// Four-square cipher with J mapped to I.
///
/// See <https://en.wikipedia.org/wiki/Four-square_cipher>.
#[derive(Debug, Clone)]
pub struct Foursquare {
    /// Upper-left: plain alphabet.
    ul: PolybiusSquare,
    /// Upper-right: keyed by the first key.
    ur: PolybiusSquare,
    /// Lower-left: keyed by the second key.
    ll: PolybiusSquare,
    /// Lower-right: plain alphabet, identical to `ul`.
    lr: PolybiusSquare,
}

impl Foursquare {
    /// Creates a Four-square cipher from two key texts.
    ///
    /// `urkeytext` keys the upper-right square, `llkeytext` the
    /// lower-left one. Both keys are normalized and J-merged. The two
    /// plain-alphabet squares are built internally.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidInput`] if either key has
    /// non-alphabetic residue after normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use squarecipher::{Foursquare, TextCipher};
    ///
    /// let fs = Foursquare::new("GEMINI", "AQUILA").unwrap();
    /// let ct = fs.encrypt("Hello, world!").unwrap();
    /// assert_eq!(ct, "FUHGK YKSOA");
    /// assert_eq!(fs.decrypt(&ct).unwrap(), "HELLO WORLD");
    /// ```
    pub fn new(urkeytext: &str, llkeytext: &str) -> Result<Self, CipherError> {
        let urkey = Self::keyprep(urkeytext)?;
        let llkey = Self::keyprep(llkeytext)?;
        Ok(Foursquare {
            ul: PolybiusSquare::build(ALPHABET_WITHOUT_J)?,
            ur: PolybiusSquare::build(&urkey)?,
            ll: PolybiusSquare::build(&llkey)?,
            lr: PolybiusSquare::build(ALPHABET_WITHOUT_J)?,
        })
    }

    /// Cross-square substitution shared by encrypt and decrypt.
    ///
    /// Per digraph `(x, y)`: `x` is located in `a`, `y` in `d`, and the
    /// output letters are read from `b` and `c` at the crossed
    /// coordinates. Encryption locates in the plain squares and reads
    /// from the keyed ones; decryption passes the squares in swapped
    /// roles.
    fn crypt(
        text: &str,
        a: &PolybiusSquare,
        b: &PolybiusSquare,
        c: &PolybiusSquare,
        d: &PolybiusSquare,
    ) -> Result<String, CipherError> {
        let text = Self::ptprep(text)?;
        let mut out = String::with_capacity(text.len());
        for (first, second) in digraphs(&text) {
            let (r0, c0) = a.coords_of(first as char)?;
            let (r1, c1) = d.coords_of(second as char)?;
            out.push(b.letter_at(r0, c1));
            out.push(c.letter_at(r1, c0));
        }
        Ok(five_chunk(&out))
    }
}

impl TextCipher for Foursquare {
    /// Normalizes and merges J→I.
    fn prep(text: &str) -> Result<String, CipherError> {
        Ok(merge_j(&crate::text::normalize(text)?))
    }

    /// Normalizes, merges J→I, and pads odd-length text with 'X'.
    fn ptprep(text: &str) -> Result<String, CipherError> {
        Ok(even_pad(Self::prep(text)?))
    }

    fn encrypt(&self, pt: &str) -> Result<String, CipherError> {
        Self::crypt(pt, &self.ul, &self.ur, &self.ll, &self.lr)
    }

    fn decrypt(&self, ct: &str) -> Result<String, CipherError> {
        Self::crypt(ct, &self.ur, &self.ul, &self.lr, &self.ll)
    }
}

impl fmt::Display for Foursquare {
    /// Renders the 2×2 square arrangement.
    ///
    /// The two plain-alphabet squares are lowercased so the keyed
    /// squares stand out; banks are separated by three spaces, the upper
    /// and lower halves by a blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..5 {
            writeln!(
                f,
                "{}   {}",
                self.ul.render_row(row).to_lowercase(),
                self.ur.render_row(row)
            )?;
        }
        writeln!(f)?;
        for row in 0..5 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}   {}",
                self.ll.render_row(row),
                self.lr.render_row(row).to_lowercase()
            )?;
        }
        Ok(())
    }
}
