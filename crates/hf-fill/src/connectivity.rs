use serde::{Deserialize, Serialize};

use crate::FillError;

const OFFSETS_C8: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

/// Neighborhood used to find the hole boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Connectivity {
    /// Axis-aligned neighbors only.
    Four,
    /// Axis-aligned plus diagonal neighbors.
    Eight,
}

impl Connectivity {
    /// `(row, col)` offsets; the axis-aligned ones always come first.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Four => &OFFSETS_C8[..4],
            Self::Eight => &OFFSETS_C8,
        }
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = FillError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            other => Err(FillError::InvalidConnectivity(other)),
        }
    }
}

impl From<Connectivity> for u8 {
    fn from(value: Connectivity) -> Self {
        match value {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }
}
