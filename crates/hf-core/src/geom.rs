use core::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: isize,
    pub col: isize,
}

impl Point {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn from_index(x: usize, y: usize) -> Self {
        Self {
            row: y as isize,
            col: x as isize,
        }
    }

    pub fn dist_sq(self, other: Self) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        dr * dr + dc * dc
    }

    /// `(x, y)` buffer indices when the point lies inside a `width` x `height`
    /// grid.
    pub fn to_index(self, width: usize, height: usize) -> Option<(usize, usize)> {
        let x = usize::try_from(self.col).ok()?;
        let y = usize::try_from(self.row).ok()?;
        (x < width && y < height).then_some((x, y))
    }
}

impl Add<(isize, isize)> for Point {
    type Output = Point;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        Point {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}
