use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FillError {
    /// `epsilon` must be finite and strictly positive.
    InvalidEpsilon(f64),
    /// `z` must be finite and non-negative.
    InvalidExponent(f64),
    InvalidConnectivity(u8),
    /// A hole pixel received no boundary weight at all.
    DegenerateBoundary { row: isize, col: isize },
    /// A hole point lies outside the buffer handed to the filler.
    ExtentMismatch {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },
}

impl FillError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEpsilon(_) | Self::InvalidExponent(_) | Self::InvalidConnectivity(_)
        )
    }
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEpsilon(eps) => {
                write!(f, "invalid epsilon {eps}: must be finite and > 0")
            }
            Self::InvalidExponent(z) => {
                write!(f, "invalid distance exponent {z}: must be finite and >= 0")
            }
            Self::InvalidConnectivity(c) => {
                write!(f, "invalid connectivity {c}: expected 4 or 8")
            }
            Self::DegenerateBoundary { row, col } => {
                write!(f, "hole pixel ({row}, {col}) has no boundary weight")
            }
            Self::ExtentMismatch {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "hole pixel ({row}, {col}) is outside the {width}x{height} output"
            ),
        }
    }
}

impl std::error::Error for FillError {}
