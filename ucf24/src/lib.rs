//! Frame-level sample index for the UCF101-24 action detection corpus.
//!
//! The index is built once from a train split file and a per-video tube
//! annotation store. Each selected frame with ground truth becomes one
//! [Sample]. Boxes stay in pixel units until they are normalized against the
//! image size at access time.

mod common;
pub mod annotation;
pub mod class;
pub mod config;
pub mod dataset;
pub mod error;
pub mod index;
pub mod layout;
pub mod raster;
pub mod sampler;
pub mod split;
pub mod transform;

pub use annotation::*;
pub use class::*;
pub use config::*;
pub use dataset::*;
pub use error::*;
pub use index::*;
pub use layout::*;
pub use raster::*;
pub use sampler::*;
pub use split::*;
pub use transform::*;
