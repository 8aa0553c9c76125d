//! Affine transforms: translation along a direction, rotation about a pivot
//!
//! Both transforms truncate the resulting floating-point coordinates
//! toward zero rather than rounding; the resulting bias toward the origin
//! is a preserved behavior that downstream descriptor outputs are
//! calibrated against. Members whose transformed coordinates leave the
//! representable grid (negative row or column, or column beyond the
//! stride) are dropped from the result.

use super::Region;

impl Region {
    /// Move every member along the unit vector of (dr, dc) scaled to
    /// `distance`, as a new region.
    ///
    /// A zero direction vector has no unit vector; the NaN coordinates it
    /// produces truncate to 0 silently, per the no-error hot-path policy.
    pub fn translate(&self, dr: f64, dc: f64, distance: f64) -> Region {
        let norm = (dr * dr + dc * dc).sqrt();
        let step_r = dr / norm * distance;
        let step_c = dc / norm * distance;

        let mut out = Region::new(self.stride());
        for (row, col) in self.iter_rc() {
            let nr = (row as f64 + step_r) as i64;
            let nc = (col as f64 + step_c) as i64;
            if nr < 0 || nc < 0 || nc >= self.stride() {
                continue;
            }
            out.insert(self.encode(nr, nc));
        }
        out
    }

    /// Rotate every member about (pivot_row, pivot_col) by `angle`
    /// radians, as a new region.
    ///
    /// Positive angles rotate from the column axis toward the row axis.
    /// Distinct members may truncate onto the same cell; the result
    /// deduplicates them.
    pub fn rotate(&self, pivot_row: f64, pivot_col: f64, angle: f64) -> Region {
        let (sin, cos) = angle.sin_cos();

        let mut out = Region::new(self.stride());
        for (row, col) in self.iter_rc() {
            let dr = row as f64 - pivot_row;
            let dc = col as f64 - pivot_col;
            let nr = (pivot_row + dc * sin + dr * cos) as i64;
            let nc = (pivot_col + dc * cos - dr * sin) as i64;
            if nr < 0 || nc < 0 || nc >= self.stride() {
                continue;
            }
            out.insert(self.encode(nr, nc));
        }
        out
    }
}
