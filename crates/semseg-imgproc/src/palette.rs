use ndarray::{Array3, Axis};
use rayon::prelude::*;

use semseg_image::{Image, ImageError, ImageSize};

/// Convert a color-coded segmentation mask to a one-hot class encoding.
///
/// Each palette entry defines one class: palette index `k` is class `k`.
/// A pixel belongs to class `k` when its full channel vector equals the
/// palette color exactly.
///
/// # Arguments
///
/// * `src` - The input mask with shape (H, W, C).
/// * `palette` - The ordered list of class colors, each of length C.
///
/// # Returns
///
/// A float array with shape (H, W, K) where K is the palette length.
/// Pixels matching no palette color yield an all-zero class vector; a
/// palette with duplicate colors yields multiple ones for the matching
/// pixels.
///
/// # Example
///
/// ```
/// use semseg_image::{Image, ImageSize};
/// use semseg_imgproc::palette::mask_to_onehot;
///
/// let mask = Image::<u8, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 1,
///   },
///   vec![0, 255],
/// ).unwrap();
///
/// let onehot = mask_to_onehot(&mask, &[[0u8], [255]]).unwrap();
/// assert_eq!(onehot.dim(), (1, 2, 2));
/// assert_eq!(onehot[[0, 0, 0]], 1.0);
/// assert_eq!(onehot[[0, 1, 1]], 1.0);
/// ```
pub fn mask_to_onehot<T, const C: usize>(
    src: &Image<T, C>,
    palette: &[[T; C]],
) -> Result<Array3<f32>, ImageError>
where
    T: PartialEq + Send + Sync,
{
    let num_classes = palette.len();
    let mut data = vec![0.0f32; src.rows() * src.cols() * num_classes];

    if num_classes > 0 {
        data.par_chunks_exact_mut(num_classes)
            .zip(src.as_slice().par_chunks_exact(C))
            .for_each(|(class_scores, pixel)| {
                for (class_idx, colour) in palette.iter().enumerate() {
                    if pixel == colour.as_slice() {
                        class_scores[class_idx] = 1.0;
                    }
                }
            });
    }

    Ok(Array3::from_shape_vec(
        (src.rows(), src.cols(), num_classes),
        data,
    )?)
}

/// Convert a one-hot or class-score mask back to a color-coded mask.
///
/// Takes the arg-max over the last axis per pixel (ties resolve to the
/// lowest class index) and looks the winning index up in the palette.
///
/// The class index is pushed through `u8` before the lookup, so palettes
/// longer than 256 entries wrap for classes at index 256 and above. This
/// keeps the historical behavior of the pipeline; a warning is logged when
/// such a palette is seen.
///
/// # Arguments
///
/// * `scores` - The one-hot or per-class score array with shape (H, W, K).
/// * `palette` - The ordered list of class colors, each of length C.
///
/// # Returns
///
/// The color-coded mask with shape (H, W, C).
///
/// # Errors
///
/// Returns an error if the score depth K does not match the palette
/// length, or if the palette is empty.
pub fn onehot_to_mask<T, const C: usize>(
    scores: &Array3<f32>,
    palette: &[[T; C]],
) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    let (rows, cols, depth) = scores.dim();
    if depth != palette.len() || palette.is_empty() {
        return Err(ImageError::InvalidPaletteLength(palette.len(), depth));
    }

    if palette.len() > 256 {
        log::warn!(
            "palette has {} colors; class indices above 255 wrap during lookup",
            palette.len()
        );
    }

    let mut data = Vec::with_capacity(rows * cols * C);
    for class_scores in scores.lanes(Axis(2)) {
        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (class_idx, &score) in class_scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best = class_idx;
            }
        }
        // the 8-bit cast is intentional, see above
        data.extend_from_slice(&palette[best as u8 as usize]);
    }

    Image::new(
        ImageSize {
            width: cols,
            height: rows,
        },
        data,
    )
}

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use semseg_image::{Image, ImageError, ImageSize};

    const GRAY_PALETTE: [[u8; 1]; 3] = [[0], [127], [255]];

    #[test]
    fn onehot_smoke() -> Result<(), ImageError> {
        let mask = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 127, 255, 9],
        )?;

        let onehot = super::mask_to_onehot(&mask, &GRAY_PALETTE)?;
        assert_eq!(onehot.dim(), (2, 2, 3));

        assert_eq!(onehot[[0, 0, 0]], 1.0);
        assert_eq!(onehot[[0, 1, 1]], 1.0);
        assert_eq!(onehot[[1, 0, 2]], 1.0);

        // the unknown color yields an all-zero class vector
        assert_eq!(&onehot.as_slice().unwrap()[9..12], &[0.0, 0.0, 0.0]);

        // each matched pixel carries exactly one hot entry
        let hot = onehot.as_slice().unwrap().iter().filter(|&&v| v == 1.0);
        assert_eq!(hot.count(), 3);

        Ok(())
    }

    #[test]
    fn onehot_rgb_colors() -> Result<(), ImageError> {
        let palette = [[0u8, 0, 0], [255, 0, 0], [0, 255, 0]];
        let mask = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![255, 0, 0, 0, 0, 0, 0, 255, 0],
        )?;

        let onehot = super::mask_to_onehot(&mask, &palette)?;
        assert_eq!(onehot.dim(), (1, 3, 3));
        assert_eq!(onehot[[0, 0, 1]], 1.0);
        assert_eq!(onehot[[0, 1, 0]], 1.0);
        assert_eq!(onehot[[0, 2, 2]], 1.0);

        Ok(())
    }

    #[test]
    fn onehot_duplicate_colors() -> Result<(), ImageError> {
        // duplicate palette entries produce more than one hot entry
        let mask = Image::<u8, 1>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![7],
        )?;

        let onehot = super::mask_to_onehot(&mask, &[[7u8], [7]])?;
        assert_eq!(onehot[[0, 0, 0]], 1.0);
        assert_eq!(onehot[[0, 0, 1]], 1.0);

        Ok(())
    }

    #[test]
    fn mask_round_trip() -> Result<(), ImageError> {
        let mask = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 127, 255, 127],
        )?;

        let onehot = super::mask_to_onehot(&mask, &GRAY_PALETTE)?;
        let decoded = super::onehot_to_mask(&onehot, &GRAY_PALETTE)?;

        assert_eq!(decoded.as_slice(), mask.as_slice());

        Ok(())
    }

    #[test]
    fn argmax_ties_resolve_to_first_class() -> Result<(), ImageError> {
        let scores = Array3::from_shape_vec((1, 1, 3), vec![0.5, 0.5, 0.5])
            .map_err(ImageError::from)?;
        let decoded = super::onehot_to_mask(&scores, &GRAY_PALETTE)?;
        assert_eq!(decoded.as_slice(), &[0]);

        Ok(())
    }

    #[test]
    fn decode_class_scores() -> Result<(), ImageError> {
        // decoding accepts raw per-class scores, not just one-hot rows
        let scores = Array3::from_shape_vec(
            (1, 2, 3),
            vec![0.1, 0.7, 0.2, 0.9, 0.05, 0.05],
        )
        .map_err(ImageError::from)?;
        let decoded = super::onehot_to_mask(&scores, &GRAY_PALETTE)?;
        assert_eq!(decoded.as_slice(), &[127, 0]);

        Ok(())
    }

    #[test]
    fn decode_palette_mismatch() -> Result<(), ImageError> {
        let scores = Array3::<f32>::zeros((1, 1, 2));
        let result = super::onehot_to_mask(&scores, &GRAY_PALETTE);
        assert!(matches!(
            result,
            Err(ImageError::InvalidPaletteLength(3, 2))
        ));

        Ok(())
    }

    #[test]
    fn encode_empty_palette() -> Result<(), ImageError> {
        let mask = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 1],
        )?;
        let onehot = super::mask_to_onehot(&mask, &[])?;
        assert_eq!(onehot.dim(), (1, 2, 0));

        Ok(())
    }
}
