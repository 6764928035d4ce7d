//! Error type shared by the codec and validation boundaries.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

/// Unified error type for codec and validation failures.
///
/// The remapping transforms themselves are total over well-formed grids and
/// never fail; every variant here originates at the container boundary or
/// from grid construction.
#[derive(Debug)]
#[non_exhaustive]
pub enum SublumaError {
    /// Input bytes do not carry a recognized container signature.
    UnrecognizedFormat,
    /// Malformed input, or a request the format cannot represent.
    InvalidInput(String),
    /// A configured [`Limits`](crate::Limits) cap was exceeded.
    LimitExceeded(String),
    /// Error surfaced by the underlying codec crate.
    Codec {
        source: Box<dyn core::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SublumaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SublumaError::UnrecognizedFormat => write!(f, "unrecognized image format"),
            SublumaError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            SublumaError::LimitExceeded(msg) => write!(f, "limit exceeded: {}", msg),
            SublumaError::Codec { source } => write!(f, "codec error: {}", source),
        }
    }
}

impl core::error::Error for SublumaError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            SublumaError::Codec { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl SublumaError {
    /// Boxes a codec crate's error into [`SublumaError::Codec`].
    pub fn from_codec<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        SublumaError::Codec {
            source: Box::new(error),
        }
    }
}
