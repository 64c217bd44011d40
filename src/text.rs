//! Text cleaning, padding, and display formatting shared by the ciphers.
//!
//! All cipher input and key text passes through [`normalize`] before any
//! cipher logic runs; all cipher output passes through [`five_chunk`] on
//! the way out. The digraph ciphers additionally use [`merge_j`] and
//! [`even_pad`].

use crate::error::CipherError;

/// The 25-letter Latin alphabet with J merged into I, in placement order.
pub(crate) const ALPHABET_WITHOUT_J: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Characters removed outright during normalization.
const STRIPPED: &[char] = &[' ', '\t', '\n', ',', ';', ':', '.', '?', '!', '-'];

/// Cleans raw text into an uppercase A–Z string.
///
/// Strips whitespace and common punctuation, spells out digits 0–9 as
/// English words, and upper-cases the rest. Empty input yields empty
/// output.
///
/// # Errors
/// Returns [`CipherError::InvalidInput`] if any character outside A–Z
/// survives cleaning, carrying the cleaned text for diagnosis.
pub(crate) fn normalize(text: &str) -> Result<String, CipherError> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if STRIPPED.contains(&c) {
            continue;
        }
        if let Some(name) = digit_name(c) {
            out.push_str(name);
            continue;
        }
        for upper in c.to_uppercase() {
            out.push(upper);
        }
    }
    if out.chars().any(|c| !c.is_ascii_uppercase()) {
        return Err(CipherError::InvalidInput { text: out });
    }
    Ok(out)
}

/// Spelled-out name for a digit character, or `None` for anything else.
fn digit_name(c: char) -> Option<&'static str> {
    match c {
        '0' => Some("ZERO"),
        '1' => Some("ONE"),
        '2' => Some("TWO"),
        '3' => Some("THREE"),
        '4' => Some("FOUR"),
        '5' => Some("FIVE"),
        '6' => Some("SIX"),
        '7' => Some("SEVEN"),
        '8' => Some("EIGHT"),
        '9' => Some("NINE"),
        _ => None,
    }
}

/// Groups cleaned text into space-separated 5-letter chunks.
///
/// The last chunk may be shorter. Input must already be ASCII (true for
/// anything that passed [`normalize`]).
pub(crate) fn five_chunk(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 5);
    for (i, chunk) in text.as_bytes().chunks(5).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for &b in chunk {
            out.push(b as char);
        }
    }
    out
}

/// Maps every 'J' to 'I', reducing to the 25-letter square alphabet.
pub(crate) fn merge_j(text: &str) -> String {
    text.replace('J', "I")
}

/// Pads odd-length text to even length with a trailing 'X' filler.
///
/// Not digraph-aware: a repeated letter pair inside one digraph is left
/// as-is rather than split by a filler.
pub(crate) fn even_pad(mut text: String) -> String {
    if text.len() % 2 != 0 {
        text.push('X');
    }
    text
}

/// Splits even-length ASCII text into ordered letter pairs.
pub(crate) fn digraphs(text: &str) -> impl Iterator<Item = (u8, u8)> + '_ {
    text.as_bytes().chunks_exact(2).map(|pair| (pair[0], pair[1]))
}
