use hf_core::{ImageView, Pixel, Point};

/// Missing pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoleSet {
    points: Vec<Point>,
}

impl HoleSet {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn locate_holes(img: &ImageView<'_, Pixel>) -> HoleSet {
    let mut points = Vec::new();
    for y in 0..img.height() {
        for (x, px) in img.row(y).iter().enumerate() {
            if px.is_missing() {
                points.push(Point::from_index(x, y));
            }
        }
    }
    HoleSet { points }
}
