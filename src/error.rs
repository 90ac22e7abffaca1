//! Errors produced while building chord ciphers.

use crate::pitch::PitchClass;

/// Failures of cipher generation and chord description parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The triad's intervals match none of the known triad shapes.
    #[error("invalid triad {0:?}: intervals match no known triad shape")]
    InvalidTriad([PitchClass; 3]),

    /// A numeric chord description could not be parsed.
    #[error("malformed chord description: {0}")]
    Syntax(String),
}

pub type Result<T> = std::result::Result<T, Error>;
