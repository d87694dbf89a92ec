use rayon::prelude::*;

use semseg_image::{Image, ImageError};

/// Apply a 3x3 correlation filter to an image with zero padding.
///
/// The output keeps the input size; samples falling outside the image
/// contribute zero. The kernel is applied unflipped to each channel
/// independently.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The 3x3 kernel in row-major order.
pub fn filter_3x3<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &[[f32; 3]; 3],
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let rows = src.rows();
    let cols = src.cols();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(r, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(c, dst_pixel)| {
                    let mut sum = [0.0f32; C];
                    for (dy, kernel_row) in kernel.iter().enumerate() {
                        for (dx, &weight) in kernel_row.iter().enumerate() {
                            // zero padding of 1 on each side
                            let row = r + dy;
                            let col = c + dx;
                            if row < 1 || row > rows || col < 1 || col > cols {
                                continue;
                            }
                            let src_pix_offset = ((row - 1) * cols + (col - 1)) * C;
                            for (ch, sum_ch) in sum.iter_mut().enumerate() {
                                *sum_ch += src_data[src_pix_offset + ch] * weight;
                            }
                        }
                    }
                    dst_pixel.copy_from_slice(&sum);
                });
        });

    Ok(())
}
