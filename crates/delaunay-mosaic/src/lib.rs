//! Umbrella crate for the `delaunay-mosaic` workspace.
//!
//! Re-exports the image core, the edge filters, the sampler, the
//! triangulation and the mosaic pipeline.

pub use dm_core::*;
pub use dm_delaunay::*;
pub use dm_edge::*;
pub use dm_mosaic::*;
pub use dm_sample::*;
