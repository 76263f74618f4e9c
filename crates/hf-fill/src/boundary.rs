use hf_core::{EdgePolicy, ImageView, Pixel, Point, map_index};

use crate::{Connectivity, HoleSet};

/// A known neighbor of a hole pixel and the value it contributes.
///
/// For `EdgePolicy::Pad` the point lies outside the grid; for `Clamp` and
/// `Reflect101` it is the in-grid pixel the neighbor was mapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPixel {
    pub at: Point,
    pub value: f32,
}

/// Known neighbors of the hole, one entry per (hole pixel, neighbor) pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundarySet {
    pixels: Vec<BoundaryPixel>,
}

impl BoundarySet {
    pub fn pixels(&self) -> &[BoundaryPixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Smallest and largest boundary value, `None` for an empty set.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.pixels.iter().fold(None, |acc, b| match acc {
            None => Some((b.value, b.value)),
            Some((lo, hi)) => Some((lo.min(b.value), hi.max(b.value))),
        })
    }
}

pub fn find_boundary(
    img: &ImageView<'_, Pixel>,
    holes: &HoleSet,
    connectivity: Connectivity,
    edge_policy: &EdgePolicy,
) -> BoundarySet {
    let offsets = connectivity.offsets();
    let mut pixels = Vec::with_capacity(holes.len() * offsets.len() / 2);

    for &hole in holes.points() {
        for &offset in offsets {
            let n = hole + offset;
            let mapped = map_index(n.col, img.width(), edge_policy)
                .zip(map_index(n.row, img.height(), edge_policy));

            match mapped {
                Some((x, y)) => {
                    if let Some(&Pixel::Known(value)) = img.get(x, y) {
                        pixels.push(BoundaryPixel {
                            at: Point::from_index(x, y),
                            value,
                        });
                    }
                }
                None => {
                    if let EdgePolicy::Pad(value) = *edge_policy {
                        pixels.push(BoundaryPixel { at: n, value });
                    }
                }
            }
        }
    }

    BoundarySet { pixels }
}
