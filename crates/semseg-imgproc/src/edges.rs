use semseg_image::{Image, ImageError};

use crate::filter::{filter_3x3, kernels};
use crate::parallel;
use crate::threshold::threshold_binary;

/// Snap an edge magnitude into the label buckets defined by a palette.
///
/// Values strictly between two adjacent label values (the first scalar
/// component of each palette entry, in palette order) are reassigned to the
/// upper label. Exact label values and values outside every bucket pass
/// through unchanged.
fn snap_to_labels<const N: usize>(palette: &[[f32; N]], value: f32) -> f32 {
    let mut value = value;
    for pair in palette.windows(2) {
        if value > pair[0][0] && value < pair[1][0] {
            value = pair[1][0];
        }
    }
    value
}

/// Detect class boundaries in a segmentation mask.
///
/// Correlates the mask with two fixed 3x3 first-difference kernels (zero
/// padding of 1, so H and W are preserved), keeps the x response where it
/// is nonzero and the y response elsewhere, and snaps the resulting
/// magnitudes into the label buckets of the palette. The binary map marks
/// every positive semantic edge value with 255.
///
/// The mask must be single channel; callers holding color-coded RGB masks
/// can reduce them first, e.g. with [`semseg_image::Image::channel`].
///
/// # Arguments
///
/// * `src` - The input mask with shape (H, W, 1).
/// * `palette` - The ordered list of class colors; the first component of
///   each entry is its label value.
/// * `semantic` - Output edge map with intensities snapped to label values,
///   shape (H, W, 1).
/// * `binary` - Output edge map with every edge position set to 255, shape
///   (H, W, 1).
///
/// A palette with fewer than two entries leaves the raw edge magnitudes
/// unsnapped.
///
/// # Example
///
/// ```
/// use semseg_image::{Image, ImageSize};
/// use semseg_imgproc::edges::semantic_edge_detection;
///
/// let size = ImageSize { width: 4, height: 4 };
/// let mask = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
/// let mut semantic = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
/// let mut binary = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// semantic_edge_detection(&mask, &[[0.0], [255.0]], &mut semantic, &mut binary).unwrap();
///
/// // a uniform mask has no class boundaries
/// assert!(binary.as_slice().iter().all(|&v| v == 0.0));
/// ```
pub fn semantic_edge_detection<const N: usize>(
    src: &Image<f32, 1>,
    palette: &[[f32; N]],
    semantic: &mut Image<f32, 1>,
    binary: &mut Image<f32, 1>,
) -> Result<(), ImageError> {
    if src.size() != semantic.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            semantic.cols(),
            semantic.rows(),
        ));
    }

    if src.size() != binary.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            binary.cols(),
            binary.rows(),
        ));
    }

    let (kernel_x, kernel_y) = kernels::edge_difference_kernels_3x3();

    let mut edge_x = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
    filter_3x3(src, &mut edge_x, &kernel_x)?;

    let mut edge_y = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
    filter_3x3(src, &mut edge_y, &kernel_y)?;

    // keep the x response where it fires, fall back to the y response,
    // then snap the magnitude into the palette label buckets
    parallel::par_iter_rows_val_two(&edge_x, &edge_y, semantic, |ex, ey, dst| {
        let ex = ex.abs();
        let ey = ey.abs();
        let edge = if ex > 0.0 { ex } else { ey };
        *dst = snap_to_labels(palette, edge);
    });

    threshold_binary(semantic, binary, 0.0, 255.0)?;

    Ok(())
}
