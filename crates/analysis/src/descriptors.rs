//! One-call shape descriptor summary
//!
//! Bundles the per-region shape measurements into a single serializable
//! record, computed in one call for feature-extraction pipelines that
//! persist descriptor tables per segmented component.

use serde::{Deserialize, Serialize};

use regionkit_core::{Algorithm, Error};

use crate::region::Region;

/// Shape descriptor record for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptors {
    /// Member pixel count
    pub area: usize,
    /// Bounding box width in columns (0 for an empty region)
    pub width: i64,
    /// Bounding box height in rows (0 for an empty region)
    pub height: i64,
    /// Boundary member count (one credit per member)
    pub perimeter: usize,
    /// Distinct outer-boundary cell count
    pub perimeter_length: usize,
    /// 4π·area / perimeter_length²
    pub circularity: f64,
    /// area / convex hull member count
    pub rectangularity: f64,
}

/// Parameters for descriptor computation
#[derive(Debug, Clone)]
pub struct DescriptorParams {
    /// Subdivisions per interpolated hull segment
    pub hull_resolution: usize,
}

impl Default for DescriptorParams {
    fn default() -> Self {
        Self {
            hull_resolution: crate::region::hull::DEFAULT_HULL_RESOLUTION,
        }
    }
}

/// Compute the full descriptor record for a region.
///
/// The bounding box is measured with a fresh member scan, independent of
/// the region's cached extremes.
pub fn shape_descriptors(region: &Region, params: &DescriptorParams) -> ShapeDescriptors {
    let (width, height) = match region.scan_bounds() {
        Some((min_row, min_col, max_row, max_col)) => {
            (max_col - min_col + 1, max_row - min_row + 1)
        }
        None => (0, 0),
    };

    let hull_area = region
        .convex_hull_with_resolution(params.hull_resolution)
        .area();

    ShapeDescriptors {
        area: region.area(),
        width,
        height,
        perimeter: region.perimeter(),
        perimeter_length: region.perimeter_length(),
        circularity: region.circularity(),
        rectangularity: region.area() as f64 / hull_area as f64,
    }
}

/// Shape descriptor algorithm
#[derive(Debug, Clone, Default)]
pub struct Descriptors;

impl Algorithm for Descriptors {
    type Input = Region;
    type Output = ShapeDescriptors;
    type Params = DescriptorParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Descriptors"
    }

    fn description(&self) -> &'static str {
        "Shape descriptor summary (area, extent, perimeter, circularity, rectangularity)"
    }

    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> Result<Self::Output, Self::Error> {
        Ok(shape_descriptors(&input, &params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_block(stride: i64, row0: i64, col0: i64, h: i64, w: i64) -> Region {
        let mut region = Region::new(stride);
        for row in row0..row0 + h {
            for col in col0..col0 + w {
                region.insert_rc(row, col);
            }
        }
        region
    }

    #[test]
    fn test_descriptors_of_block() {
        let region = filled_block(20, 2, 3, 4, 5);
        let d = shape_descriptors(&region, &DescriptorParams::default());
        assert_eq!(d.area, 20);
        assert_eq!(d.width, 5);
        assert_eq!(d.height, 4);
        assert_eq!(d.perimeter, 14);
        assert_eq!(d.perimeter_length, 18);
        assert!(d.circularity > 0.0 && d.circularity <= 1.0);
        assert!((d.rectangularity - 1.0).abs() < 0.15);
    }

    #[test]
    fn test_descriptors_via_algorithm_trait() {
        let region = filled_block(20, 2, 3, 4, 5);
        let direct = shape_descriptors(&region, &DescriptorParams::default());
        let via_trait = Descriptors.execute_default(region).unwrap();
        assert_eq!(via_trait, direct);
    }

    #[test]
    fn test_descriptors_serialize() {
        let region = filled_block(20, 0, 0, 2, 2);
        let d = shape_descriptors(&region, &DescriptorParams::default());
        let json = serde_json::to_string(&d).unwrap();
        let back: ShapeDescriptors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_empty_region_extent_is_zero() {
        let d = shape_descriptors(&Region::new(10), &DescriptorParams::default());
        assert_eq!(d.area, 0);
        assert_eq!(d.width, 0);
        assert_eq!(d.height, 0);
        assert!(d.circularity.is_nan());
        assert!(d.rectangularity.is_nan());
    }
}
