//! Umbrella crate for the hole filling workspace.
//!
//! Re-exports the buffer primitives, the fill pipeline and the raster I/O
//! helpers so applications can depend on a single crate.

pub use hf_core::*;
pub use hf_fill::*;
pub use hf_io::*;
