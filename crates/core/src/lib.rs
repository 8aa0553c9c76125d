//! # RegionKit Core
//!
//! Core types for the RegionKit pixel-region analysis library.
//!
//! This crate provides:
//! - `Raster<T>`: Generic raster grid type, row-major, column count = stride
//! - `UniqueSet<T>`: Duplicate-free membership container
//! - `coord`: Scalar row-major index <-> (row, col) decoding
//! - `Connectivity`: 4-/8-neighbor relations
//! - Algorithm traits for consistent API

pub mod coord;
pub mod error;
pub mod raster;
pub mod set;

pub use error::{Error, Result};
pub use raster::{Connectivity, Raster, RasterElement};
pub use set::UniqueSet;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{Connectivity, Raster, RasterElement};
    pub use crate::set::UniqueSet;
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in RegionKit.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
