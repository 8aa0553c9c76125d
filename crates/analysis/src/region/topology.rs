//! Topology helpers: endpoints, neighbor degrees, connectivity checks,
//! coordinate correlation
//!
//! These are the cheap, approximate primitives used by line-following and
//! branch-pruning passes: endpoint detection by 8-neighbor degree, a
//! necessary-but-insufficient connectivity predicate, raster-driven
//! neighbor histograms, and Pearson correlation of member coordinates.

use regionkit_core::raster::{Raster, RasterElement, OFFSETS_4, OFFSETS_8};

use super::Region;

impl Region {
    /// 8-neighbor degree of an arbitrary coordinate against this region.
    ///
    /// The coordinate itself does not have to be a member and is not
    /// counted.
    pub fn number_of_neighbors(&self, row: i64, col: i64) -> usize {
        OFFSETS_8
            .iter()
            .filter(|&&(dr, dc)| self.contains_rc(row + dr, col + dc))
            .count()
    }

    /// Coordinates of members whose 8-neighbor degree within the region
    /// is exactly 1
    pub fn end_point_coordinates(&self) -> Vec<(i64, i64)> {
        self.iter_rc()
            .filter(|&(row, col)| self.number_of_neighbors(row, col) == 1)
            .collect()
    }

    /// Cheap "no dangling branch" check: every member not listed in
    /// `endpoints` must have 8-neighbor degree of at least 2.
    ///
    /// Necessary but not sufficient for connectivity; two separate closed
    /// loops also pass. Isolated pixels and unlisted branch tips fail.
    pub fn is_connective(&self, endpoints: &[(i64, i64)]) -> bool {
        for (row, col) in self.iter_rc() {
            if endpoints.contains(&(row, col)) {
                continue;
            }
            if self.number_of_neighbors(row, col) < 2 {
                return false;
            }
        }
        true
    }

    /// Number of members with exactly `k` nonzero 4-neighbors in `raster`
    pub fn count_pixels_with_neighbors<E: RasterElement>(
        &self,
        raster: &Raster<E>,
        k: usize,
    ) -> usize {
        self.iter_rc()
            .filter(|&(row, col)| raster_degree4(raster, row, col) == k)
            .count()
    }

    /// Number of members with three or more nonzero 4-neighbors in
    /// `raster` (junction candidates)
    pub fn count_crossing_pixels<E: RasterElement>(&self, raster: &Raster<E>) -> usize {
        self.iter_rc()
            .filter(|&(row, col)| raster_degree4(raster, row, col) >= 3)
            .count()
    }

    /// Number of members whose own cell is nonzero in `raster`
    pub fn count_covered_pixels<E: RasterElement>(&self, raster: &Raster<E>) -> usize {
        self.iter_rc()
            .filter(|&(row, col)| raster_is_set(raster, row, col))
            .count()
    }

    /// Pearson correlation of member rows against member columns.
    ///
    /// Returns 1 as the degenerate "perfectly correlated" sentinel when
    /// either coordinate's standard deviation is 0 (a perfectly straight
    /// horizontal or vertical run).
    pub fn correlation(&self) -> f64 {
        correlation_of(self.iter_rc())
    }

    /// Pearson row/column correlation over members within `radius` of
    /// (row, col)
    pub fn correlation_near_end_point(&self, row: i64, col: i64, radius: f64) -> f64 {
        correlation_of(self.members_within(row, col, radius))
    }

    /// Unit direction (dr, dc) from (row, col) toward the farthest member
    /// within `radius`.
    ///
    /// (0, 0) when no member other than the endpoint itself is in range.
    pub fn drdc_near_end_point(&self, row: i64, col: i64, radius: f64) -> (f64, f64) {
        let mut best: Option<((i64, i64), f64)> = None;
        for p in self.members_within(row, col, radius) {
            let dr = (p.0 - row) as f64;
            let dc = (p.1 - col) as f64;
            let d = (dr * dr + dc * dc).sqrt();
            match best {
                Some((_, bd)) if d <= bd => {}
                _ => best = Some((p, d)),
            }
        }
        match best {
            Some(((fr, fc), d)) if d > 0.0 => (((fr - row) as f64) / d, ((fc - col) as f64) / d),
            _ => (0.0, 0.0),
        }
    }

    fn members_within(
        &self,
        row: i64,
        col: i64,
        radius: f64,
    ) -> impl Iterator<Item = (i64, i64)> + '_ {
        let r_sq = radius * radius;
        self.iter_rc().filter(move |&(pr, pc)| {
            let dr = (pr - row) as f64;
            let dc = (pc - col) as f64;
            dr * dr + dc * dc <= r_sq
        })
    }
}

fn correlation_of(points: impl Iterator<Item = (i64, i64)>) -> f64 {
    let mut n = 0.0;
    let mut sum_r = 0.0;
    let mut sum_c = 0.0;
    let mut sum_rr = 0.0;
    let mut sum_cc = 0.0;
    let mut sum_rc = 0.0;
    for (row, col) in points {
        let (r, c) = (row as f64, col as f64);
        n += 1.0;
        sum_r += r;
        sum_c += c;
        sum_rr += r * r;
        sum_cc += c * c;
        sum_rc += r * c;
    }

    let mean_r = sum_r / n;
    let mean_c = sum_c / n;
    let var_r = sum_rr / n - mean_r * mean_r;
    let var_c = sum_cc / n - mean_c * mean_c;
    if var_r <= 0.0 || var_c <= 0.0 {
        return 1.0;
    }
    let cov = sum_rc / n - mean_r * mean_c;
    cov / (var_r * var_c).sqrt()
}

fn raster_is_set<E: RasterElement>(raster: &Raster<E>, row: i64, col: i64) -> bool {
    if row < 0 || col < 0 || row >= raster.rows() as i64 || col >= raster.cols() as i64 {
        return false;
    }
    raster.at(row as usize * raster.cols() + col as usize).is_set()
}

fn raster_degree4<E: RasterElement>(raster: &Raster<E>, row: i64, col: i64) -> usize {
    OFFSETS_4
        .iter()
        .filter(|&&(dr, dc)| raster_is_set(raster, row + dr, col + dc))
        .count()
}
