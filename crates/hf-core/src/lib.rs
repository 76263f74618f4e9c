//! Foundational primitives for single-channel hole filling.
//!
//! ## Coordinates
//! Buffers are addressed as `(x, y)` = `(col, row)`. [`Point`] carries
//! `(row, col)` as signed integers so that neighbors outside the grid can be
//! named before an [`EdgePolicy`] decides what they mean.
//!
//! ## Pixel State
//! A [`Pixel`] is either `Known(value)` or `Missing`. Sentinel-encoded grids
//! (negative value = missing) convert through [`from_sentinel_image`].

mod edge;
mod error;
mod geom;
mod image;
mod pixel;

pub use edge::{EdgePolicy, map_index};
pub use error::Error;
pub use geom::Point;
pub use image::{Image, ImageView, to_u8_unit, to_unit_f32};
pub use pixel::{Pixel, from_sentinel_image};
