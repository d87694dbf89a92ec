#![deny(missing_docs)]
//! Conversions from numeric arrays to displayable images

/// conversion of numeric arrays into displayable images.
pub mod convert;

/// Error types for the io module.
pub mod error;

#[cfg(feature = "image-encoding")]
pub use crate::convert::array_to_image;
pub use crate::convert::ChannelLayout;
pub use crate::error::IoError;
