use core::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum IoError {
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    Image(hf_core::Error),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "failed to encode {}: {source}", path.display())
            }
            Self::Image(err) => write!(f, "invalid image buffer: {err}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::Image(err) => Some(err),
        }
    }
}

impl From<hf_core::Error> for IoError {
    fn from(err: hf_core::Error) -> Self {
        Self::Image(err)
    }
}
