//! Vigenère cipher: repeating-key additive stream over A–Z.
//!
//! The only cipher in this crate that uses the full 26-letter alphabet
//! and no Polybius square. Each plaintext letter is shifted by the
//! aligned keystream letter, with the key repeating as often as needed.

use crate::cipher::TextCipher;
use crate::error::CipherError;
use crate::text::five_chunk;

/// Repeating-key additive cipher over the 26-letter alphabet.
///
/// Letters are treated as integers 0–25 (A = 0). Encryption adds the
/// keystream letter mod 26, decryption subtracts it. An all-'A' key is
/// the identity transform.
#[derive(Debug, Clone)]
pub struct Vigenere {
    /// Cleaned key letters, cycled as the keystream.
    key: Vec<u8>,
}

impl Vigenere {
    /// Creates a Vigenère cipher from key text.
    ///
    /// The key is normalized like any other input (punctuation stripped,
    /// digits spelled out, upper-cased).
    ///
    /// # Errors
    /// - [`CipherError::InvalidInput`] if the key has non-alphabetic
    ///   residue after normalization.
    /// - [`CipherError::EmptyKey`] if the key normalizes to empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use squarecipher::{TextCipher, Vigenere};
    ///
    /// let vig = Vigenere::new("LEMON").unwrap();
    /// assert_eq!(vig.encrypt("ATTACKATDAWN").unwrap(), "LXFOP VEFRN HR");
    /// ```
    ///
    /// ```
    /// use squarecipher::Vigenere;
    ///
    /// assert!(Vigenere::new("...").is_err());
    /// ```
    pub fn new(keytext: &str) -> Result<Self, CipherError> {
        let key = Self::keyprep(keytext)?;
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Vigenere {
            key: key.into_bytes(),
        })
    }

    /// Shared forward/backward keystream application.
    ///
    /// The keystream index wraps at the key length independently of the
    /// text length, so keys shorter, equal to, or longer than the text
    /// all work.
    fn crypt(&self, text: &str, forward: bool) -> Result<String, CipherError> {
        let text = Self::ptprep(text)?;
        let mut out = String::with_capacity(text.len());
        for (i, letter) in text.bytes().enumerate() {
            let p = i32::from(letter - b'A');
            let k = i32::from(self.key[i % self.key.len()] - b'A');
            let raw = if forward { p + k } else { p - k };
            let shifted = raw.rem_euclid(26);
            out.push((b'A' + shifted as u8) as char);
        }
        Ok(five_chunk(&out))
    }
}

impl TextCipher for Vigenere {
    fn encrypt(&self, pt: &str) -> Result<String, CipherError> {
        self.crypt(pt, true)
    }

    fn decrypt(&self, ct: &str) -> Result<String, CipherError> {
        self.crypt(ct, false)
    }
}
