//! Classical Polybius-square substitution ciphers.
//!
//! This crate implements three pre-computer ciphers — Vigenère, Playfair,
//! and Four-square — as a reference/teaching library. Playfair and
//! Four-square are built atop a shared 5×5 Polybius square over the
//! 25-letter Latin alphabet (J merged into I); Vigenère works directly on
//! the full 26-letter alphabet with a repeating keystream.
//!
//! These ciphers are historical. They offer no security against modern
//! cryptanalysis and must not be used to protect real data.
//!
//! # Architecture
//!
//! ```text
//! normalize / five_chunk   (text cleaning and display formatting)
//!     ↕
//! PolybiusSquare           (keyed 5×5 letter grid, letter ↔ coordinate)
//!     ↕
//! Playfair    (one square   — row/column/rectangle digraph rules)
//! Foursquare  (four squares — cross-square digraph substitution)
//! Vigenere    (no square    — additive repeating-key stream)
//! ```
//!
//! All cipher state is immutable after construction; `encrypt` and
//! `decrypt` are pure functions of their input, so instances can be
//! shared freely across threads.
//!
//! # Examples
//!
//! Encrypt and decrypt with Playfair:
//!
//! ```
//! use squarecipher::{Playfair, TextCipher};
//!
//! let pf = Playfair::new("the quick brown fox jumped over the lazy dogs").unwrap();
//! let ct = pf.encrypt("Helxlo, world!").unwrap();
//! assert_eq!(ct, "EQSLM XNWXS LN");
//! assert_eq!(pf.decrypt(&ct).unwrap(), "HELXL OWORL DX");
//! ```
//!
//! Vigenère with a repeating key:
//!
//! ```
//! use squarecipher::{TextCipher, Vigenere};
//!
//! let vig = Vigenere::new("LEMON").unwrap();
//! let ct = vig.encrypt("attack at dawn").unwrap();
//! assert_eq!(vig.decrypt(&ct).unwrap(), "ATTAC KATDA WN");
//! ```

#![deny(clippy::all)]

pub mod error;

mod cipher;
mod foursquare;
mod playfair;
mod square;
mod text;
mod vigenere;

pub use cipher::TextCipher;
pub use foursquare::Foursquare;
pub use playfair::Playfair;
pub use square::PolybiusSquare;
pub use vigenere::Vigenere;
