//! Classification of three pitch classes into a triad shape.
//!
//! Only the two internal intervals of the triad are considered, first to
//! second and second to third. These are plain signed differences, so a
//! triad must be written root, third, fifth in ascending pitch-class order
//! to be recognized. Inversions and wrapped spellings are rejected.
//!
//! ```
//! use chordcipher::pitch::PitchClass;
//! use chordcipher::triad::{classify, TriadShape};
//!
//! let triad = [PitchClass::new(0), PitchClass::new(3), PitchClass::new(6)];
//! assert_eq!(TriadShape::classify(triad), Ok(TriadShape::Diminished));
//!
//! let fragments = classify(triad).unwrap();
//! assert_eq!(fragments.prepend, ["m"]);
//! assert_eq!(fragments.append, ["ь5"]);
//! ```

use crate::error::{Error, Result};
use crate::pitch::PitchClass;

const MINOR: &str = "m";
const FLAT_FIVE: &str = "ь5";
const SHARP_FIVE: &str = "5+";

/// The closed set of recognized triad shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriadShape {
    Major,
    Minor,
    MajorFlatFive,
    Diminished,
    Augmented,
}

impl TriadShape {
    /// Determine the shape from the intervals between consecutive notes.
    pub fn from_intervals(lower: i8, upper: i8) -> Option<TriadShape> {
        use self::TriadShape::*;

        match (lower, upper) {
            (4, 3) => Some(Major),
            (3, 4) => Some(Minor),
            (4, 2) => Some(MajorFlatFive),
            (3, 3) => Some(Diminished),
            (4, 4) => Some(Augmented),
            _      => None,
        }
    }

    /// Classify a triad given as absolute pitch classes.
    pub fn classify(triad: [PitchClass; 3]) -> Result<TriadShape> {
        let [first, second, third] = triad.map(|p| p.value() as i8);

        TriadShape::from_intervals(second - first, third - second).ok_or_else(|| {
            debug!("no triad shape for intervals of {:?}", triad);
            Error::InvalidTriad(triad)
        })
    }

    /// Returns the cipher tokens which mark this shape.
    pub fn fragments(&self) -> CipherFragments {
        use self::TriadShape::*;

        match *self {
            Major         => CipherFragments { prepend: &[], append: &[] },
            Minor         => CipherFragments { prepend: &[MINOR], append: &[] },
            MajorFlatFive => CipherFragments { prepend: &[], append: &[FLAT_FIVE] },
            Diminished    => CipherFragments { prepend: &[MINOR], append: &[FLAT_FIVE] },
            Augmented     => CipherFragments { prepend: &[], append: &[SHARP_FIVE] },
        }
    }
}

/// Cipher tokens contributed by a triad shape.
///
/// `prepend` tokens sit closest to the tonic name, nearest first. `append`
/// tokens trail them in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CipherFragments {
    pub prepend: &'static [&'static str],
    pub append: &'static [&'static str],
}

impl CipherFragments {
    /// The text following the tonic name in a cipher.
    pub fn segment(&self) -> String {
        self.prepend.iter().chain(self.append).copied().collect()
    }
}

/// Classify a triad and return the tokens that represent its shape.
pub fn classify(triad: [PitchClass; 3]) -> Result<CipherFragments> {
    TriadShape::classify(triad).map(|shape| shape.fragments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::TriadShape::*;

    fn triad(a: i32, b: i32, c: i32) -> [PitchClass; 3] {
        [PitchClass::new(a), PitchClass::new(b), PitchClass::new(c)]
    }

    #[test]
    fn classify_each_shape() {
        assert_eq!(TriadShape::classify(triad(0, 4, 7)), Ok(Major));
        assert_eq!(TriadShape::classify(triad(2, 5, 9)), Ok(Minor));
        assert_eq!(TriadShape::classify(triad(5, 9, 11)), Ok(MajorFlatFive));
        assert_eq!(TriadShape::classify(triad(3, 6, 9)), Ok(Diminished));
        assert_eq!(TriadShape::classify(triad(1, 5, 9)), Ok(Augmented));
    }

    #[test]
    fn classify_reduces_input() {
        assert_eq!(TriadShape::classify(triad(12, 16, 19)), Ok(Major));
        assert_eq!(TriadShape::classify(triad(24, 15, 31)), Ok(Minor));
    }

    #[test]
    fn fragments_per_shape() {
        assert_eq!(classify(triad(0, 4, 7)).unwrap().segment(), "");
        assert_eq!(classify(triad(0, 3, 7)).unwrap().segment(), "m");
        assert_eq!(classify(triad(0, 4, 6)).unwrap().segment(), "ь5");
        assert_eq!(classify(triad(0, 3, 6)).unwrap().segment(), "mь5");
        assert_eq!(classify(triad(0, 4, 8)).unwrap().segment(), "5+");

        let diminished = Diminished.fragments();
        assert_eq!(diminished.prepend, ["m"]);
        assert_eq!(diminished.append, ["ь5"]);
        assert!(Major.fragments().prepend.is_empty());
        assert!(Major.fragments().append.is_empty());
    }

    #[test]
    fn reject_unknown_intervals() {
        assert_eq!(classify(triad(0, 2, 7)), Err(Error::InvalidTriad(triad(0, 2, 7))));
        assert!(classify(triad(0, 5, 7)).is_err());
        assert!(classify(triad(0, 0, 0)).is_err());
        assert!(classify(triad(7, 4, 0)).is_err());
    }

    #[test]
    fn reject_wrapped_spelling() {
        // A major triad on A spelled across the octave boundary.
        assert!(classify(triad(9, 1, 4)).is_err());
        // First inversion of C major.
        assert!(classify(triad(4, 7, 0)).is_err());
    }

    #[test]
    fn only_known_interval_pairs_classify() {
        let known = [(4, 3), (3, 4), (4, 2), (3, 3), (4, 4)];

        for lower in -11i8..12 {
            for upper in -11i8..12 {
                let shape = TriadShape::from_intervals(lower, upper);
                assert_eq!(shape.is_some(), known.contains(&(lower, upper)));
            }
        }
    }
}
