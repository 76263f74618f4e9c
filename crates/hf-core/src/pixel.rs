use crate::image::{Image, ImageView};

/// Per-pixel state of an image with a hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pixel {
    Known(f32),
    Missing,
}

impl Pixel {
    /// Strictly negative samples mark a missing pixel. NaN is not negative
    /// and stays `Known`.
    pub fn from_sentinel(v: f32) -> Self {
        if v < 0.0 { Self::Missing } else { Self::Known(v) }
    }

    pub fn value(self) -> Option<f32> {
        match self {
            Self::Known(v) => Some(v),
            Self::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

pub fn from_sentinel_image(img: &ImageView<'_, f32>) -> Image<Pixel> {
    img.map(|&v| Pixel::from_sentinel(v))
}

#[cfg(test)]
mod tests {
    use super::{Pixel, from_sentinel_image};
    use crate::Image;

    #[test]
    fn sentinel_is_strictly_negative() {
        assert_eq!(Pixel::from_sentinel(-1.0), Pixel::Missing);
        assert_eq!(Pixel::from_sentinel(-f32::MIN_POSITIVE), Pixel::Missing);
        assert_eq!(Pixel::from_sentinel(0.0), Pixel::Known(0.0));
        assert_eq!(Pixel::from_sentinel(-0.0), Pixel::Known(-0.0));
        assert!(!Pixel::from_sentinel(f32::NAN).is_missing());
    }

    #[test]
    fn sentinel_image_conversion() {
        let img = Image::from_vec(2, 2, vec![0.25f32, -1.0, 1.0, -0.5]).expect("valid image");
        let px = from_sentinel_image(&img.as_view());

        assert_eq!(
            px.data(),
            &[
                Pixel::Known(0.25),
                Pixel::Missing,
                Pixel::Known(1.0),
                Pixel::Missing
            ]
        );
        assert_eq!(px.data()[0].value(), Some(0.25));
        assert_eq!(px.data()[1].value(), None);
    }
}
