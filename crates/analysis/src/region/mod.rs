//! Stride-bound pixel regions
//!
//! A [`Region`] is a [`PixelSet`] of scalar row-major indices bound to one
//! raster stride. Analytics are split by concern:
//!
//! - **shape**: area, width/height, perimeter variants, circularity,
//!   rectangularity
//! - **contour**: inner/outer contour predicates and extraction under 4-
//!   and 8-connectivity
//! - **hull**: gift-wrapping convex hull with interpolation-based fill
//! - **relations**: intersection, adjacency, and distance queries between
//!   regions
//! - **transform**: translation and rotation
//! - **topology**: endpoints, neighbor degrees, connectivity checks,
//!   coordinate correlation
//!
//! Every analytic operation constructs and returns a new value; no
//! operation mutates its receiver.

pub mod contour;
pub mod hull;
pub mod relations;
pub mod shape;
pub mod topology;
pub mod transform;

use regionkit_core::coord;

use crate::pixelset::{Extremes, PixelSet};

/// A set of scalar row-major pixel indices interpreted against one stride.
///
/// Invariant: every member decodes against the same stride, and every
/// derived-region operation copies the originating stride into its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pixels: PixelSet<i64>,
    stride: i64,
}

impl Region {
    /// Create an empty region for the given stride
    pub fn new(stride: i64) -> Self {
        Self {
            pixels: PixelSet::new(),
            stride,
        }
    }

    /// Create an empty region with reserved capacity
    pub fn with_capacity(stride: i64, capacity: usize) -> Self {
        Self {
            pixels: PixelSet::with_capacity(capacity),
            stride,
        }
    }

    /// Create a region from scalar members
    pub fn from_members(stride: i64, members: impl IntoIterator<Item = i64>) -> Self {
        Self {
            pixels: members.into_iter().collect(),
            stride,
        }
    }

    /// Columns per row used to decode members
    #[inline]
    pub fn stride(&self) -> i64 {
        self.stride
    }

    /// The underlying pixel set (statistical aggregation lives there)
    pub fn pixels(&self) -> &PixelSet<i64> {
        &self.pixels
    }

    /// Decode a scalar index into (row, col) under this region's stride
    #[inline]
    pub fn decode(&self, index: i64) -> (i64, i64) {
        coord::decode(index, self.stride)
    }

    /// Encode (row, col) into a scalar index under this region's stride
    #[inline]
    pub fn encode(&self, row: i64, col: i64) -> i64 {
        coord::encode(row, col, self.stride)
    }

    /// Insert a member, returning `true` if it was not already present
    pub fn insert(&mut self, index: i64) -> bool {
        self.pixels.insert(index)
    }

    /// Insert a member the caller guarantees is not already present
    pub fn insert_unchecked(&mut self, index: i64) {
        self.pixels.insert_unchecked(index);
    }

    /// Insert the member at (row, col)
    pub fn insert_rc(&mut self, row: i64, col: i64) -> bool {
        self.pixels.insert(self.encode(row, col))
    }

    /// Remove a member, returning `true` if it was present
    pub fn remove(&mut self, index: i64) -> bool {
        self.pixels.remove(index)
    }

    /// Test scalar membership
    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        self.pixels.contains(index)
    }

    /// Test membership of the decoded position (row, col).
    ///
    /// Positions outside the representable grid (negative row or column,
    /// or column beyond the stride) are never members.
    #[inline]
    pub fn contains_rc(&self, row: i64, col: i64) -> bool {
        if row < 0 || col < 0 || col >= self.stride {
            return false;
        }
        self.pixels.contains(coord::encode(row, col, self.stride))
    }

    /// Number of members
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the region has no members
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate scalar members in insertion order
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.pixels.iter().copied()
    }

    /// Scalar members as a contiguous slice
    #[inline]
    pub fn members(&self) -> &[i64] {
        self.pixels.as_slice()
    }

    /// Iterate decoded (row, col) members
    pub fn iter_rc(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let stride = self.stride;
        self.pixels.iter().map(move |&n| coord::decode(n, stride))
    }

    // Cached extremes (explicit recompute, see PixelSet)

    /// Recompute scalar extremes and the bounding box in one scan
    pub fn compute_min_max(&mut self) {
        let stride = self.stride;
        self.pixels.compute_min_max(|n| coord::decode(n, stride));
    }

    /// Recompute scalar min/max only
    pub fn compute_min_max_only(&mut self) {
        self.pixels.compute_min_max_only();
    }

    /// Recompute the bounding box only
    pub fn compute_min_max_xy(&mut self) {
        let stride = self.stride;
        self.pixels.compute_min_max_xy(|n| coord::decode(n, stride));
    }

    /// Cached extremes; valid only after an explicit recompute
    pub fn extremes(&self) -> &Extremes {
        self.pixels.extremes()
    }

    /// Cached bounding box size as (width, height)
    pub fn bounding_box_size(&self) -> (i64, i64) {
        self.pixels.bounding_box_size()
    }

    /// Center of gravity as (row, col) means. NaN components for an
    /// empty region.
    pub fn center_of_gravity(&self) -> (f64, f64) {
        let mut row_sum = 0.0;
        let mut col_sum = 0.0;
        for (row, col) in self.iter_rc() {
            row_sum += row as f64;
            col_sum += col as f64;
        }
        let n = self.len() as f64;
        (row_sum / n, col_sum / n)
    }

    // Region algebra (stride copied into each result)

    /// New region holding members of `self` or `other`
    pub fn union(&self, other: &Region) -> Region {
        Region {
            pixels: self.pixels.union(&other.pixels),
            stride: self.stride,
        }
    }

    /// New region holding members of both `self` and `other`
    pub fn intersection(&self, other: &Region) -> Region {
        Region {
            pixels: self.pixels.intersection(&other.pixels),
            stride: self.stride,
        }
    }

    /// New region holding members of `self` not in `other`
    pub fn difference(&self, other: &Region) -> Region {
        Region {
            pixels: self.pixels.difference(&other.pixels),
            stride: self.stride,
        }
    }
}
