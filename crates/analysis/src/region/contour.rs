//! Inner and outer contour predicates and extraction
//!
//! A member pixel is an inner contour pixel when at least one neighbor
//! (under the chosen connectivity) is missing; a non-member pixel is an
//! outer contour pixel when at least one neighbor is a member. Both
//! predicates run against either a region's own membership or an external
//! binary raster, unified by the [`Occupancy`] trait.
//!
//! Extraction uses two construction strategies that agree for equivalent
//! connectivity: the 4-connected contours are built member-driven (insert
//! missing/present axis neighbors), the 8-connected contours by scanning
//! the coordinate space against the predicate.

use regionkit_core::raster::{Connectivity, Raster, RasterElement, OFFSETS_4};

use super::Region;

/// A binary occupancy source: a region's membership or a raster's
/// nonzero cells.
pub trait Occupancy {
    /// Whether the cell at (row, col) is set. Out-of-range positions
    /// are not set.
    fn occupied(&self, row: i64, col: i64) -> bool;
}

impl Occupancy for Region {
    #[inline]
    fn occupied(&self, row: i64, col: i64) -> bool {
        self.contains_rc(row, col)
    }
}

impl<E: RasterElement> Occupancy for Raster<E> {
    #[inline]
    fn occupied(&self, row: i64, col: i64) -> bool {
        if row < 0 || col < 0 || row >= self.rows() as i64 || col >= self.cols() as i64 {
            return false;
        }
        self.at(row as usize * self.cols() + col as usize).is_set()
    }
}

/// Whether (row, col) is set and has a missing neighbor under `conn`
pub fn is_inner_contour(src: &impl Occupancy, row: i64, col: i64, conn: Connectivity) -> bool {
    src.occupied(row, col)
        && conn
            .offsets()
            .iter()
            .any(|&(dr, dc)| !src.occupied(row + dr, col + dc))
}

/// Whether (row, col) is unset and has a set neighbor under `conn`
pub fn is_outer_contour(src: &impl Occupancy, row: i64, col: i64, conn: Connectivity) -> bool {
    !src.occupied(row, col)
        && conn
            .offsets()
            .iter()
            .any(|&(dr, dc)| src.occupied(row + dr, col + dc))
}

impl Region {
    /// Whether the pixel at scalar `index` is a member with a missing
    /// 4-neighbor
    pub fn is_inner_contour4(&self, index: i64) -> bool {
        let (row, col) = self.decode(index);
        is_inner_contour(self, row, col, Connectivity::Four)
    }

    /// Whether the pixel at scalar `index` is a member with a missing
    /// 8-neighbor
    pub fn is_inner_contour8(&self, index: i64) -> bool {
        let (row, col) = self.decode(index);
        is_inner_contour(self, row, col, Connectivity::Eight)
    }

    /// Whether the pixel at scalar `index` is a non-member with a member
    /// 4-neighbor
    pub fn is_outer_contour4(&self, index: i64) -> bool {
        let (row, col) = self.decode(index);
        is_outer_contour(self, row, col, Connectivity::Four)
    }

    /// Whether the pixel at scalar `index` is a non-member with a member
    /// 8-neighbor
    pub fn is_outer_contour8(&self, index: i64) -> bool {
        let (row, col) = self.decode(index);
        is_outer_contour(self, row, col, Connectivity::Eight)
    }

    /// Members with at least one missing 4-neighbor, as a new region.
    ///
    /// Member-driven construction: each member is visited once and
    /// inserted without a duplicate probe when a missing axis neighbor
    /// turns up.
    pub fn inner_contour4(&self) -> Region {
        let mut out = Region::new(self.stride());
        for &n in self.members() {
            let (row, col) = self.decode(n);
            if OFFSETS_4
                .iter()
                .any(|&(dr, dc)| !self.contains_rc(row + dr, col + dc))
            {
                out.insert_unchecked(n);
            }
        }
        out
    }

    /// Non-member cells 4-adjacent to a member, as a new region.
    ///
    /// Member-driven construction: every missing axis neighbor of every
    /// member is inserted (deduplicated). Cells outside the representable
    /// grid cannot be members of a region and are skipped.
    pub fn outer_contour4(&self) -> Region {
        let mut out = Region::new(self.stride());
        for (row, col) in self.iter_rc() {
            for (dr, dc) in OFFSETS_4 {
                let (nr, nc) = (row + dr, col + dc);
                if nr < 0 || nc < 0 || nc >= self.stride() {
                    continue;
                }
                if !self.contains_rc(nr, nc) {
                    out.insert(self.encode(nr, nc));
                }
            }
        }
        out
    }

    /// Members with at least one missing 8-neighbor, as a new region.
    ///
    /// Scan construction: every bounding-box position is tested against
    /// the inner-contour predicate.
    pub fn inner_contour8(&self) -> Region {
        let mut out = Region::new(self.stride());
        let Some((min_row, min_col, max_row, max_col)) = self.scan_bounds() else {
            return out;
        };
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if is_inner_contour(self, row, col, Connectivity::Eight) {
                    out.insert_unchecked(self.encode(row, col));
                }
            }
        }
        out
    }

    /// Non-member cells 8-adjacent to a member, as a new region.
    ///
    /// Scan construction over the bounding box expanded by one ring,
    /// clipped to the representable grid.
    pub fn outer_contour8(&self) -> Region {
        let mut out = Region::new(self.stride());
        let Some((min_row, min_col, max_row, max_col)) = self.scan_bounds() else {
            return out;
        };
        for row in (min_row - 1).max(0)..=max_row + 1 {
            for col in (min_col - 1).max(0)..=(max_col + 1).min(self.stride() - 1) {
                if is_outer_contour(self, row, col, Connectivity::Eight) {
                    out.insert_unchecked(self.encode(row, col));
                }
            }
        }
        out
    }

    /// Fresh bounding box from a member scan, independent of the cached
    /// extremes. None for an empty region.
    pub(crate) fn scan_bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let mut it = self.iter_rc();
        let (mut min_row, mut min_col) = it.next()?;
        let (mut max_row, mut max_col) = (min_row, min_col);
        for (row, col) in it {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }
        Some((min_row, min_col, max_row, max_col))
    }
}
