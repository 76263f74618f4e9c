//! Raster I/O around the hole filler.
//!
//! Samples are normalized to `[0, 1]` on load and rescaled to 8-bit on save.
//! A mask marks the hole with zero samples; any other mask value keeps the
//! underlying pixel.

mod error;
mod mask;
mod raster;

pub use error::IoError;
pub use mask::{merge_mask, merge_mask_sentinel};
pub use raster::{FILLED_SUFFIX, filled_path, load_gray, save_gray};
