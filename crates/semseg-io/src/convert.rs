use std::str::FromStr;

use ndarray::{Array3, ArrayD, Ix3};
use num_traits::ToPrimitive;

use crate::error::IoError;

/// Axis ordering convention for image-like arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Channels lead the shape, (C, H, W).
    ChannelsFirst,
    /// Channels trail the shape, (H, W, C).
    ChannelsLast,
}

impl FromStr for ChannelLayout {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "channels_first" => Ok(Self::ChannelsFirst),
            "channels_last" => Ok(Self::ChannelsLast),
            _ => Err(IoError::InvalidLayout(s.to_string())),
        }
    }
}

/// Cast a rank-3 array to `f32` and normalize it to channel-last order.
///
/// The returned array is a standard-layout working copy; the input is
/// never mutated.
fn to_channels_last<T>(x: &ArrayD<T>, layout: ChannelLayout) -> Result<Array3<f32>, IoError>
where
    T: ToPrimitive + Copy,
{
    if x.ndim() != 3 {
        return Err(IoError::InvalidArrayRank(x.ndim()));
    }

    let data = x
        .iter()
        .map(|&v| v.to_f32().ok_or(IoError::CastError))
        .collect::<Result<Vec<f32>, IoError>>()?;

    let x = ArrayD::from_shape_vec(x.raw_dim(), data)?.into_dimensionality::<Ix3>()?;

    let x = match layout {
        ChannelLayout::ChannelsFirst => {
            // (C, H, W) -> (H, W, C)
            let x = x.permuted_axes([1, 2, 0]);
            Array3::from_shape_vec(x.raw_dim(), x.iter().copied().collect())?
        }
        ChannelLayout::ChannelsLast => x,
    };

    Ok(x)
}

/// Rescale array values linearly onto the displayable [0, 255] range.
///
/// The values are shifted up by the magnitude of the minimum when it is
/// negative, divided by the resulting maximum (skipped when the maximum is
/// exactly zero) and multiplied by 255. A constant array therefore
/// collapses to all zeros.
fn rescale_to_display(x: &mut Array3<f32>) {
    if x.is_empty() {
        return;
    }

    let min = x.iter().fold(f32::INFINITY, |acc, &v| acc.min(v));
    let offset = (-min).max(0.0);
    x.mapv_inplace(|v| v + offset);

    let max = x.iter().fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
    if max != 0.0 {
        x.mapv_inplace(|v| v / max);
    }

    x.mapv_inplace(|v| v * 255.0);
}

/// Convert a rank-3 numeric array to a displayable image.
///
/// The channel count selects the image mode: 4 channels produce an RGBA
/// image, 3 an RGB image and 1 a grayscale image (the trailing singleton
/// axis is dropped).
///
/// # Arguments
///
/// * `x` - The input array, (H, W, C) or (C, H, W) depending on `layout`.
/// * `layout` - The axis ordering of `x`.
/// * `scale` - Whether to rescale the values onto [0, 255] first.
///
/// # Errors
///
/// Fails if `x` is not rank 3 or if the channel count is not one of
/// {1, 3, 4}.
///
/// # Example
///
/// ```
/// use ndarray::ArrayD;
/// use semseg_io::{array_to_image, ChannelLayout};
///
/// let x = ArrayD::<f32>::zeros(ndarray::IxDyn(&[4, 5, 3]));
/// let img = array_to_image(&x, ChannelLayout::ChannelsLast, true).unwrap();
///
/// assert_eq!(img.width(), 5);
/// assert_eq!(img.height(), 4);
/// ```
#[cfg(feature = "image-encoding")]
pub fn array_to_image<T>(
    x: &ArrayD<T>,
    layout: ChannelLayout,
    scale: bool,
) -> Result<image::DynamicImage, IoError>
where
    T: ToPrimitive + Copy,
{
    let mut x = to_channels_last(x, layout)?;

    if scale {
        rescale_to_display(&mut x);
    }

    let (height, width, channels) = x.dim();
    let buf: Vec<u8> = x.iter().map(|&v| v as u8).collect();

    let image = match channels {
        4 => image::RgbaImage::from_raw(width as u32, height as u32, buf)
            .map(image::DynamicImage::ImageRgba8),
        3 => image::RgbImage::from_raw(width as u32, height as u32, buf)
            .map(image::DynamicImage::ImageRgb8),
        1 => image::GrayImage::from_raw(width as u32, height as u32, buf)
            .map(image::DynamicImage::ImageLuma8),
        _ => return Err(IoError::UnsupportedChannelCount(channels)),
    };

    image.ok_or(IoError::InvalidBufferSize)
}
