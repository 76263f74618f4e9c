use std::time::Instant;

use hf_core::{Image, ImageView, Pixel, from_sentinel_image};
use log::{debug, trace};
use serde::Serialize;

use crate::{FillConfig, FillError, fill_holes, find_boundary, locate_holes};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FillStats {
    pub hole_pixels: usize,
    /// Includes repeats: one entry per (hole pixel, known neighbor) pair.
    pub boundary_pixels: usize,
    pub locate_ms: f64,
    pub boundary_ms: f64,
    pub fill_ms: f64,
}

impl FillStats {
    pub fn total_ms(&self) -> f64 {
        self.locate_ms + self.boundary_ms + self.fill_ms
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillResult {
    pub image: Image<f32>,
    pub stats: FillStats,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FillOutcome {
    Filled(FillResult),
    /// The image had no missing pixel; nothing was computed or copied.
    NoHole,
}

impl FillOutcome {
    pub fn into_image(self) -> Option<Image<f32>> {
        match self {
            Self::Filled(result) => Some(result.image),
            Self::NoHole => None,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

/// Fills every `Missing` pixel of `img`.
///
/// The configuration is validated before the image is touched.
pub fn fill(img: &ImageView<'_, Pixel>, cfg: &FillConfig) -> Result<FillOutcome, FillError> {
    run(img, cfg, |hole_img| hole_img.map(|px| px.value().unwrap_or(0.0)))
}

/// Fills a sentinel-encoded grid, where strictly negative samples are missing.
///
/// The output starts as a copy of `img`, so every non-negative sample is
/// carried over bit for bit. A grid without negative samples returns
/// `NoHole` before any buffer is allocated.
pub fn fill_sentinel(
    img: &ImageView<'_, f32>,
    cfg: &FillConfig,
) -> Result<FillOutcome, FillError> {
    cfg.validate()?;
    let has_hole = (0..img.height()).any(|y| img.row(y).iter().any(|&v| v < 0.0));
    if !has_hole {
        debug!("locate: no sentinel pixels in {}x{} image", img.width(), img.height());
        return Ok(FillOutcome::NoHole);
    }

    let pixels = from_sentinel_image(img);
    run(&pixels.as_view(), cfg, |_| img.to_image())
}

fn run(
    img: &ImageView<'_, Pixel>,
    cfg: &FillConfig,
    base: impl FnOnce(&ImageView<'_, Pixel>) -> Image<f32>,
) -> Result<FillOutcome, FillError> {
    let kernel = cfg.kernel()?;
    let mut stats = FillStats::default();

    let t0 = Instant::now();
    let holes = locate_holes(img);
    stats.locate_ms = t0.elapsed().as_secs_f64() * 1e3;
    stats.hole_pixels = holes.len();
    debug!(
        "locate: {} hole pixels in {}x{} image",
        holes.len(),
        img.width(),
        img.height()
    );

    if holes.is_empty() {
        return Ok(FillOutcome::NoHole);
    }

    let t1 = Instant::now();
    let boundary = find_boundary(img, &holes, cfg.connectivity, &cfg.edge_policy);
    stats.boundary_ms = t1.elapsed().as_secs_f64() * 1e3;
    stats.boundary_pixels = boundary.len();
    debug!(
        "boundary: {} pixels ({:?}, {:?})",
        boundary.len(),
        cfg.connectivity,
        cfg.edge_policy
    );

    let t2 = Instant::now();
    let image = fill_holes(&holes, &boundary, &kernel, base(img))?;
    stats.fill_ms = t2.elapsed().as_secs_f64() * 1e3;
    debug!(
        "fill: z={} epsilon={} in {:.3} ms",
        kernel.z(),
        kernel.epsilon(),
        stats.fill_ms
    );
    trace!("fill stats: {stats:?}");

    Ok(FillOutcome::Filled(FillResult { image, stats }))
}
