//! Codec adapters for format-specific implementations.
//!
//! Each module provides a thin adapter between the unified decode/encode
//! API and a format-specific codec crate. PNG is the only container
//! currently wired up.

#[cfg(feature = "png")]
pub(crate) mod png;
