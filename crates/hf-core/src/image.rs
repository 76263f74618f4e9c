use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Builds a contiguous image by applying `f` to every pixel in row-major
    /// order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Image<U> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            out.extend(self.row(y).iter().map(&mut f));
        }

        Image {
            width: self.width,
            height: self.height,
            data: out,
        }
    }
}

impl<T: Clone> ImageView<'_, T> {
    pub fn to_image(&self) -> Image<T> {
        self.map(T::clone)
    }
}

/// Normalizes 8-bit samples to `[0, 1]`.
pub fn to_unit_f32(img: &ImageView<'_, u8>) -> Image<f32> {
    img.map(|&px| px as f32 / u8::MAX as f32)
}

/// Rescales `[0, 1]` samples to 8-bit, rounding to nearest and saturating.
pub fn to_u8_unit(img: &ImageView<'_, f32>) -> Image<u8> {
    img.map(|&v| (v * u8::MAX as f32).round().clamp(0.0, u8::MAX as f32) as u8)
}

#[cfg(test)]
mod tests {
    use super::{Image, to_u8_unit, to_unit_f32};
    use crate::Error;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Image::from_vec(3, 2, vec![0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn view_indexing_and_copy() {
        let img = Image::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).expect("valid image");
        let view = img.as_view();

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(0, 1), Some(&4));
        assert_eq!(view.get(3, 1), None);

        let owned = view.to_image();
        assert_eq!(owned, img);
    }

    #[test]
    fn get_mut_writes_in_place() {
        let mut img = Image::new_fill(2, 2, 0.0f32);
        *img.get_mut(1, 0).expect("in bounds") = 0.5;
        assert_eq!(img.data(), &[0.0, 0.5, 0.0, 0.0]);
        assert!(img.get_mut(2, 0).is_none());
    }

    #[test]
    fn unit_conversions_round_trip_u8() {
        let img = Image::from_vec(4, 1, vec![0u8, 1, 128, 255]).expect("valid image");
        let unit = to_unit_f32(&img.as_view());
        assert_eq!(unit.data()[0], 0.0);
        assert_eq!(unit.data()[3], 1.0);

        let back = to_u8_unit(&unit.as_view());
        assert_eq!(back.data(), img.data());
    }

    #[test]
    fn to_u8_unit_saturates() {
        let img = Image::from_vec(3, 1, vec![-0.2f32, 1.7, 0.5]).expect("valid image");
        assert_eq!(to_u8_unit(&img.as_view()).data(), &[0, 255, 128]);
    }
}
