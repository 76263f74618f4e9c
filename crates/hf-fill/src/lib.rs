//! Inverse-distance weighted hole filling.
//!
//! The fill runs as three strictly ordered stages, each producing an
//! immutable snapshot consumed by the next:
//! 1. [`locate_holes`] scans row-major for `Missing` pixels.
//! 2. [`find_boundary`] collects every known neighbor of every hole pixel
//!    under the chosen [`Connectivity`]. A pixel next to several hole pixels
//!    appears once per hole pixel.
//! 3. [`fill_holes`] sets each hole pixel to
//!    `sum(w(u, v) * I(v)) / sum(w(u, v))` over the whole boundary, with
//!    `w(u, v) = 1 / (|u - v|^z + epsilon)`.
//!
//! Hole pixels depend only on the boundary, never on each other, so stage 3
//! is evaluated in parallel when the `parallel` feature is enabled (default).
//!
//! Neighbors outside the grid are resolved by [`EdgePolicy`]; the default
//! drops them.

mod boundary;
mod config;
mod connectivity;
mod error;
mod filler;
mod kernel;
mod locate;
mod pipeline;

pub use boundary::{BoundaryPixel, BoundarySet, find_boundary};
pub use config::FillConfig;
pub use connectivity::Connectivity;
pub use error::FillError;
pub use filler::fill_holes;
pub use hf_core::EdgePolicy;
pub use kernel::WeightKernel;
pub use locate::{HoleSet, locate_holes};
pub use pipeline::{FillOutcome, FillResult, FillStats, fill, fill_sentinel};
