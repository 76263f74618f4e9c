/// What a neighbor outside the image grid means to the boundary finder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", content = "value"))]
pub enum EdgePolicy {
    /// Out-of-range neighbors are dropped.
    #[default]
    Skip,
    /// Coordinates are clamped to the nearest edge pixel.
    Clamp,
    /// Mirror around the edge pixel without repeating it.
    Reflect101,
    /// The image is padded with a constant known value.
    Pad(f32),
}

/// Maps a possibly out-of-range index onto `[0, len)`.
///
/// In-range indices map to themselves under every policy. `Skip` and `Pad`
/// return `None` for out-of-range indices.
pub fn map_index(i: isize, len: usize, policy: &EdgePolicy) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }

    match policy {
        EdgePolicy::Skip | EdgePolicy::Pad(_) => None,
        EdgePolicy::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some(len - 1)
            }
        }
        EdgePolicy::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len { Some(r) } else { Some(period as usize - r) }
        }
    }
}
