//! Pitch classes and the tables used to name them.
//!
//! ```
//! use chordcipher::pitch::{NamingScheme, PitchClass};
//!
//! let p = PitchClass::new(15);
//! assert_eq!(p.value(), 3);
//! assert_eq!(p.name(NamingScheme::Sharp), "D#");
//! assert_eq!(p.name(NamingScheme::Flat), "Eь");
//! ```

use std::fmt;
use std::str::FromStr;

/// The total number of chromatic steps in an octave.
pub const PITCH_CLASS_COUNT: usize = 12;

static SHARP_NAMES: [&str; PITCH_CLASS_COUNT] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

static FLAT_NAMES: [&str; PITCH_CLASS_COUNT] = [
    "C", "Dь", "D", "Eь", "E", "F", "Gь", "G", "Aь", "A", "Bь", "B",
];

/// One of the twelve chromatic steps, independent of octave.
///
/// The contained value is always less than 12.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Construct a `PitchClass`, reducing the input modulo 12.
    ///
    /// Negative values wrap upwards, so `-1` is the same class as `11`.
    pub fn new(value: i32) -> PitchClass {
        PitchClass(value.rem_euclid(PITCH_CLASS_COUNT as i32) as u8)
    }

    /// Returns the underlying value in the range `0..12`.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display name of this class under the given scheme.
    pub fn name(&self, scheme: NamingScheme) -> &'static str {
        match scheme {
            NamingScheme::Sharp => SHARP_NAMES[self.0 as usize],
            NamingScheme::Flat  => FLAT_NAMES[self.0 as usize],
        }
    }
}

impl From<i32> for PitchClass {
    fn from(value: i32) -> PitchClass {
        PitchClass::new(value)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name(NamingScheme::Sharp))
    }
}

/// Selects which accidental is used when naming non-natural pitch classes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NamingScheme {
    /// `C#`, `D#`, `F#`, ...
    #[default]
    Sharp,

    /// `Dь`, `Eь`, `Gь`, ...
    Flat,
}

impl FromStr for NamingScheme {
    type Err = String;

    fn from_str(input: &str) -> Result<NamingScheme, String> {
        match input.trim().to_ascii_lowercase().as_str() {
            "sharp" | "sus" | "#" => Ok(NamingScheme::Sharp),
            "flat" | "be" | "b"   => Ok(NamingScheme::Flat),
            other => Err(format!("unknown naming scheme `{}`", other)),
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NamingScheme::Sharp => f.write_str("sharp"),
            NamingScheme::Flat  => f.write_str("flat"),
        }
    }
}
