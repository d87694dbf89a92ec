mod convolution;

/// fixed convolution kernels.
pub mod kernels;

pub use convolution::filter_3x3;
