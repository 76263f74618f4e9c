use hf_core::{Image, ImageView, Pixel};
use log::warn;

/// Marks every pixel whose mask sample is zero as `Missing`.
///
/// Only the region covered by both images is merged; pixels outside the mask
/// stay known.
pub fn merge_mask(image: &ImageView<'_, f32>, mask: &ImageView<'_, f32>) -> Image<Pixel> {
    warn_on_extent_mismatch(image, mask);

    let mut out = image.map(|&v| Pixel::Known(v));
    let (w, h) = overlap(image, mask);
    for y in 0..h {
        let mask_row = mask.row(y);
        for (x, &m) in mask_row[..w].iter().enumerate() {
            if m <= 0.0
                && let Some(px) = out.get_mut(x, y)
            {
                *px = Pixel::Missing;
            }
        }
    }
    out
}

/// Sentinel-encoded merge: `(value + 1) * mask - 1`, negative where the mask
/// is zero.
pub fn merge_mask_sentinel(image: &ImageView<'_, f32>, mask: &ImageView<'_, f32>) -> Image<f32> {
    warn_on_extent_mismatch(image, mask);

    let mut out = image.to_image();
    let (w, h) = overlap(image, mask);
    for y in 0..h {
        let (img_row, mask_row) = (image.row(y), mask.row(y));
        for x in 0..w {
            if let Some(px) = out.get_mut(x, y) {
                *px = (img_row[x] + 1.0) * mask_row[x] - 1.0;
            }
        }
    }
    out
}

fn overlap(image: &ImageView<'_, f32>, mask: &ImageView<'_, f32>) -> (usize, usize) {
    (
        image.width().min(mask.width()),
        image.height().min(mask.height()),
    )
}

fn warn_on_extent_mismatch(image: &ImageView<'_, f32>, mask: &ImageView<'_, f32>) {
    if (image.width(), image.height()) != (mask.width(), mask.height()) {
        warn!(
            "mask is {}x{} but image is {}x{}; merging the overlap only",
            mask.width(),
            mask.height(),
            image.width(),
            image.height()
        );
    }
}

#[cfg(test)]
mod tests {
    use hf_core::{Image, Pixel, from_sentinel_image};

    use super::{merge_mask, merge_mask_sentinel};

    #[test]
    fn zero_mask_samples_become_missing() {
        let img = Image::from_vec(2, 2, vec![0.2f32, 0.4, 0.6, 0.8]).expect("valid image");
        let mask = Image::from_vec(2, 2, vec![1.0f32, 0.0, 1.0, 0.0]).expect("valid mask");

        let merged = merge_mask(&img.as_view(), &mask.as_view());
        assert_eq!(
            merged.data(),
            &[
                Pixel::Known(0.2),
                Pixel::Missing,
                Pixel::Known(0.6),
                Pixel::Missing
            ]
        );
    }

    #[test]
    fn smaller_mask_only_covers_overlap() {
        let img = Image::new_fill(3, 2, 0.5f32);
        let mask = Image::new_fill(2, 1, 0.0f32);

        let merged = merge_mask(&img.as_view(), &mask.as_view());
        let missing: Vec<bool> = merged.data().iter().map(|p| p.is_missing()).collect();
        assert_eq!(missing, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn sentinel_merge_agrees_with_tagged_merge_for_binary_masks() {
        let img = Image::from_vec(3, 2, vec![0.0f32, 0.3, 1.0, 0.7, 0.0, 0.5]).expect("valid");
        let mask = Image::from_vec(3, 2, vec![1.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]).expect("valid");

        let sentinel = merge_mask_sentinel(&img.as_view(), &mask.as_view());
        let tagged = merge_mask(&img.as_view(), &mask.as_view());

        let via_sentinel = from_sentinel_image(&sentinel.as_view());
        let missing = |img: &Image<Pixel>| -> Vec<bool> {
            img.data().iter().map(|p| p.is_missing()).collect()
        };
        assert_eq!(missing(&via_sentinel), missing(&tagged));
        assert_eq!(sentinel.data()[0], 0.0);
        assert_eq!(sentinel.data()[5], 0.5);
    }
}
