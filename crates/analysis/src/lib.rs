//! # RegionKit Analysis
//!
//! Pixel-region algebra and geometric/statistical analysis for 2D rasters.
//!
//! ## Available components
//!
//! - **pixelset**: Unique coordinate container with masked statistical
//!   aggregation over an external raster
//! - **region**: Stride-bound pixel set with shape descriptors, contour
//!   extraction, convex hull, inter-region relations, affine transforms,
//!   and topology helpers
//! - **labeling**: Connected-component extraction from binary rasters
//! - **descriptors**: One-call shape descriptor summary

pub mod descriptors;
pub mod labeling;
pub mod pixelset;
pub mod region;

pub use descriptors::{shape_descriptors, DescriptorParams, Descriptors, ShapeDescriptors};
pub use labeling::label_regions;
pub use pixelset::{Extremes, PixelSet, PixelValue};
pub use region::Region;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::descriptors::{shape_descriptors, DescriptorParams, ShapeDescriptors};
    pub use crate::labeling::label_regions;
    pub use crate::pixelset::{PixelSet, PixelValue};
    pub use crate::region::contour::{is_inner_contour, is_outer_contour, Occupancy};
    pub use crate::region::Region;
    pub use regionkit_core::prelude::*;
}
