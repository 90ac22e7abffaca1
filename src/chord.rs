//! Defines the `Chord` entity and the assembly of its cipher.
//!
//! A `Chord` is built once from raw numbers and never changes afterwards.
//! Every input is reduced modulo 12 on the way in.
//!
//! ```
//! use chordcipher::{Chord, NamingScheme};
//!
//! // Major triad with a major seventh
//! let a = Chord::new(0, [0, 4, 7], Some(11));
//! assert_eq!(a.cipher().unwrap(), "C7M");
//!
//! // Diminished triad with a minor seventh, named with flats
//! let b = Chord::new(3, [0, 3, 6], Some(10)).with_naming(NamingScheme::Flat);
//! assert_eq!(b.cipher().unwrap(), "Eьmь57");
//! ```
//!
//! The cipher is the tonic name, followed by the tokens of the triad shape,
//! followed by the extension token if there is one.

use crate::error::Result;
use crate::extension::extension_cipher;
use crate::pitch::{NamingScheme, PitchClass, PITCH_CLASS_COUNT};
use crate::triad::{self, TriadShape};

/// A chord described by its tonic, triad and optional extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    tonic: PitchClass,
    triad: [PitchClass; 3],
    extension: Option<u8>,
    naming: NamingScheme,
}

impl Chord {
    /// Construct and return a new `Chord`.
    ///
    /// The triad is given as absolute pitch classes, not as intervals from
    /// the tonic. The extension is measured in semitones from the tonic and
    /// is reduced modulo 12 like the other inputs, so compound extensions
    /// collapse onto their simple counterparts.
    pub fn new(tonic: i32, triad: [i32; 3], extension: Option<i32>) -> Chord {
        Chord {
            tonic: PitchClass::new(tonic),
            triad: triad.map(PitchClass::new),
            extension: extension.map(|e| e.rem_euclid(PITCH_CLASS_COUNT as i32) as u8),
            naming: NamingScheme::default(),
        }
    }

    /// Select the scheme used to name the tonic.
    pub fn with_naming(mut self, naming: NamingScheme) -> Chord {
        self.naming = naming;
        self
    }

    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    pub fn triad(&self) -> [PitchClass; 3] {
        self.triad
    }

    pub fn extension(&self) -> Option<u8> {
        self.extension
    }

    pub fn naming(&self) -> NamingScheme {
        self.naming
    }

    /// Returns the display name of the tonic.
    pub fn tonic_name(&self) -> &'static str {
        self.tonic.name(self.naming)
    }

    /// Classify the triad of this chord.
    pub fn triad_shape(&self) -> Result<TriadShape> {
        TriadShape::classify(self.triad)
    }

    /// Returns the extension token, or an empty string when the chord has no
    /// extension or the extension has no token.
    pub fn extension_cipher(&self) -> &'static str {
        match self.extension {
            Some(semitones) => extension_cipher(semitones).unwrap_or_else(|| {
                debug!("extension of {} semitones has no cipher, omitting", semitones);
                ""
            }),
            None => "",
        }
    }

    /// Build the chord symbol.
    ///
    /// Fails only when the triad is not one of the recognized shapes. An
    /// unknown extension never fails and contributes nothing.
    pub fn cipher(&self) -> Result<String> {
        let fragments = triad::classify(self.triad)?;
        let cipher = format!("{}{}{}", self.tonic_name(), fragments.segment(), self.extension_cipher());

        trace!("{:?} => {}", self, cipher);
        Ok(cipher)
    }
}
