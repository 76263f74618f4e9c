use hf_core::{Image, Point};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{BoundarySet, FillError, HoleSet, WeightKernel};

/// Writes the weighted boundary average into every hole cell of `out`.
///
/// `out` must have the extent of the image the hole set was located in;
/// cells outside the hole are left untouched. A hole point outside `out` is
/// reported before any value is computed.
pub fn fill_holes(
    holes: &HoleSet,
    boundary: &BoundarySet,
    kernel: &WeightKernel,
    mut out: Image<f32>,
) -> Result<Image<f32>, FillError> {
    let points = holes.points();
    let (width, height) = (out.width(), out.height());
    if let Some(u) = points.iter().find(|u| u.to_index(width, height).is_none()) {
        return Err(FillError::ExtentMismatch {
            row: u.row,
            col: u.col,
            width,
            height,
        });
    }

    #[cfg(feature = "parallel")]
    let values: Vec<f32> = points
        .par_iter()
        .map(|&u| weighted_value(u, boundary, kernel))
        .collect::<Result<_, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let values: Vec<f32> = points
        .iter()
        .map(|&u| weighted_value(u, boundary, kernel))
        .collect::<Result<_, _>>()?;

    for (&u, value) in points.iter().zip(values) {
        if let Some(cell) = u
            .to_index(width, height)
            .and_then(|(x, y)| out.get_mut(x, y))
        {
            *cell = value;
        }
    }

    Ok(out)
}

fn weighted_value(
    u: Point,
    boundary: &BoundarySet,
    kernel: &WeightKernel,
) -> Result<f32, FillError> {
    let mut numerator = 0.0f64;
    let mut denominator = 0.0f64;
    for b in boundary.pixels() {
        let w = kernel.weight(u, b.at);
        numerator += w * b.value as f64;
        denominator += w;
    }

    if !(denominator > 0.0 && denominator.is_finite()) {
        return Err(FillError::DegenerateBoundary {
            row: u.row,
            col: u.col,
        });
    }

    Ok((numerator / denominator) as f32)
}
