#![deny(missing_docs)]
//! Image and mask types for semantic segmentation pipelines

/// image representation for segmentation masks and pipeline buffers.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
