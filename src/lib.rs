//! # chordcipher
//!
//! A crate for turning a numeric chord description into its chord symbol,
//! or cipher.
//!
//! A chord is described by a tonic pitch class, the three absolute pitch
//! classes of its triad and an optional extension measured in semitones from
//! the tonic. The triad is classified into one of a closed set of shapes and
//! the symbol is assembled from the tonic name, the shape's tokens and the
//! extension token.
//!
//! ```
//! use chordcipher::Chord;
//!
//! let chord = Chord::new(0, [0, 3, 7], Some(10));
//! assert_eq!(chord.cipher().unwrap(), "Cm7");
//!
//! let chord: Chord = "3, [0, 3, 6], 10".parse().unwrap();
//! assert_eq!(chord.cipher().unwrap(), "D#mь57");
//! ```

#[macro_use]
extern crate log;

pub mod chord;
pub mod error;
pub mod extension;
pub mod parser;
pub mod pitch;
pub mod triad;

pub use chord::Chord;
pub use error::{Error, Result};
pub use parser::parse_chord;
pub use pitch::{NamingScheme, PitchClass};
pub use triad::{classify, CipherFragments, TriadShape};
