use std::path::{Path, PathBuf};

use hf_core::{Image, ImageView, to_u8_unit, to_unit_f32};
use image::GrayImage;

use crate::IoError;

pub const FILLED_SUFFIX: &str = "_filled";

/// Decodes a raster, converts it to 8-bit luma and normalizes to `[0, 1]`.
pub fn load_gray(path: &Path) -> Result<Image<f32>, IoError> {
    let dyn_img = image::open(path).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();
    let img = Image::from_vec(w as usize, h as usize, luma.into_raw())?;
    Ok(to_unit_f32(&img.as_view()))
}

/// Writes `[0, 1]` samples as an 8-bit grayscale raster; the format follows
/// the file extension.
pub fn save_gray(path: &Path, img: &ImageView<'_, f32>) -> Result<(), IoError> {
    let bytes = to_u8_unit(img);
    let (w, h) = (bytes.width(), bytes.height());
    let raw = bytes.into_raw();
    let len = raw.len();
    let gray = GrayImage::from_raw(w as u32, h as u32, raw).ok_or(hf_core::Error::SizeMismatch {
        expected: w * h,
        actual: len,
    })?;
    gray.save(path).map_err(|source| IoError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// `dir/name.ext` becomes `dir/name_filled.ext`. Inputs without an extension
/// get `.png`.
pub fn filled_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_owned());
    input.with_file_name(format!("{stem}{FILLED_SUFFIX}.{ext}"))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use hf_core::Image;

    use super::{filled_path, load_gray, save_gray};
    use crate::IoError;

    #[test]
    fn filled_path_inserts_suffix_before_extension() {
        assert_eq!(
            filled_path(Path::new("data/cat.png")),
            PathBuf::from("data/cat_filled.png")
        );
        assert_eq!(
            filled_path(Path::new("scan.v2.tiff")),
            PathBuf::from("scan.v2_filled.tiff")
        );
        assert_eq!(
            filled_path(Path::new("/tmp/raw")),
            PathBuf::from("/tmp/raw_filled.png")
        );
    }

    #[test]
    fn save_then_load_preserves_8bit_levels() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("levels.png");

        let levels: Vec<f32> = (0..6).map(|i| i as f32 * 51.0 / 255.0).collect();
        let img = Image::from_vec(3, 2, levels.clone()).expect("valid image");
        save_gray(&path, &img.as_view()).expect("save succeeds");

        let back = load_gray(&path).expect("load succeeds");
        assert_eq!((back.width(), back.height()), (3, 2));
        for (a, b) in back.data().iter().zip(&levels) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_gray(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, IoError::Decode { .. }));
        assert!(err.to_string().contains("absent.png"));
    }
}
