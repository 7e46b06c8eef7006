use std::fmt;

/// Errors reported by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The name or index does not denote a [`VisionType`].
    ///
    /// [`VisionType`]: crate::VisionType
    UnknownVisionType(String),
    /// The pastel factor must be a finite number in \[0, 1\].
    PastelFactor(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            UnknownVisionType(s) => write!(f, "unknown vision type “{s}”"),
            PastelFactor(x) => write!(f, "pastel factor {x} not in [0, 1]"),
        }
    }
}

impl std::error::Error for Error {}
