//! Cipher tokens for chord extensions.
//!
//! An extension is measured in semitones from the tonic. Values beyond the
//! octave distinguish compound intervals, such as a ninth from a second.

/// Returns the cipher token for an extension `semitones` above the tonic.
///
/// The perfect fifth (7), octave (12) and twelfth (19) are already implied
/// by the triad and have no token. Any other value outside the table also
/// yields `None`.
pub fn extension_cipher(semitones: u8) -> Option<&'static str> {
    match semitones {
        5  => Some("sus4"),
        6  => Some("ь5"),
        8  => Some("m6"),
        9  => Some("6"),
        10 => Some("7"),
        11 => Some("7M"),
        13 => Some("ь9"),
        14 => Some("9"),
        15 => Some("ь10"),
        16 => Some("10"),
        17 => Some("11"),
        18 => Some("11+"),
        20 => Some("ь13"),
        21 => Some("13"),
        _  => None,
    }
}
