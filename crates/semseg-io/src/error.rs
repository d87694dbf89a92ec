/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the input array is not rank 3.
    #[error("Expected image array to have rank 3 (single image), got rank {0}")]
    InvalidArrayRank(usize),

    /// Error when the data format tag is not recognized.
    #[error("Invalid data format: {0}")]
    InvalidLayout(String),

    /// Error when the channel count is not displayable.
    #[error("Unsupported channel number: {0}")]
    UnsupportedChannelCount(usize),

    /// Error when the array data cannot be cast to the working type.
    #[error("Failed to cast the array data")]
    CastError,

    /// Error when shape is not valid.
    #[error("Invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),

    /// Error when the pixel buffer does not match the image dimensions.
    #[error("Pixel buffer does not match the image dimensions")]
    InvalidBufferSize,
}
