//! The capability set shared by all cipher variants.

use crate::error::CipherError;
use crate::text::normalize;

/// Common interface for the classical ciphers in this crate.
///
/// Each variant specializes up to three text-cleaning rules plus the
/// encrypt/decrypt pair. The cleaning rules are associated functions
/// (not methods): key cleaning runs inside constructors, before an
/// instance exists.
///
/// Defaults give the Vigenère behavior — plain normalization everywhere.
/// The digraph ciphers (Playfair, Four-square) override [`prep`] to merge
/// J→I and [`ptprep`] to pad odd-length input with a trailing 'X'.
///
/// [`prep`]: TextCipher::prep
/// [`ptprep`]: TextCipher::ptprep
pub trait TextCipher {
    /// Base cleaning rule for any text this cipher touches.
    fn prep(text: &str) -> Result<String, CipherError> {
        normalize(text)
    }

    /// Cleaning applied to key text at construction time.
    fn keyprep(text: &str) -> Result<String, CipherError> {
        Self::prep(text)
    }

    /// Cleaning applied to plaintext/ciphertext on each call.
    fn ptprep(text: &str) -> Result<String, CipherError> {
        Self::prep(text)
    }

    /// Encrypts `pt`, returning ciphertext in 5-letter chunks.
    fn encrypt(&self, pt: &str) -> Result<String, CipherError>;

    /// Decrypts `ct`, returning plaintext in 5-letter chunks.
    fn decrypt(&self, ct: &str) -> Result<String, CipherError>;
}
