//! Raster data structures and operations

mod connectivity;
mod element;
mod grid;

pub use connectivity::{Connectivity, OFFSETS_4, OFFSETS_8};
pub use element::RasterElement;
pub use grid::Raster;
