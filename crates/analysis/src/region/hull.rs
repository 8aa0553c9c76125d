//! Convex hull via gift wrapping, with interpolation-based fill
//!
//! The hull is marched with the Jarvis gift-wrapping scan over decoded
//! (row, col) coordinates. The resulting vertex ring is then densified
//! twice: linear interpolation along cyclic-successive hull edges, then
//! the same interpolation over all pairs of densified boundary points.
//! The second, quadratic pass stands in for a polygon rasterizer and is
//! what shape descriptors such as rectangularity are calibrated against.

use regionkit_core::set::UniqueSet;

use super::Region;

/// Default subdivisions per interpolated segment
pub const DEFAULT_HULL_RESOLUTION: usize = 100;

/// Turn direction of the path a → b → c
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    CounterClockwise,
    Clockwise,
}

/// Cross-product orientation test over (row, col) points
pub fn orientation(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> Orientation {
    // z-component of (b - a) × (c - a), with col as x and row as y
    let cross = (b.1 - a.1) * (c.0 - a.0) - (b.0 - a.0) * (c.1 - a.1);
    match cross.cmp(&0) {
        std::cmp::Ordering::Equal => Orientation::Collinear,
        std::cmp::Ordering::Less => Orientation::CounterClockwise,
        std::cmp::Ordering::Greater => Orientation::Clockwise,
    }
}

#[inline]
fn dist_sq(a: (i64, i64), b: (i64, i64)) -> i64 {
    let dr = a.0 - b.0;
    let dc = a.1 - b.1;
    dr * dr + dc * dc
}

/// Truncating linear interpolation between two points, inserting every
/// sample into `out`
fn interpolate_segment(
    a: (i64, i64),
    b: (i64, i64),
    subdivisions: usize,
    out: &mut UniqueSet<(i64, i64)>,
) {
    let (ar, ac) = (a.0 as f64, a.1 as f64);
    let (dr, dc) = ((b.0 - a.0) as f64, (b.1 - a.1) as f64);
    for k in 0..=subdivisions {
        let t = k as f64 / subdivisions as f64;
        let row = (ar + t * dr) as i64;
        let col = (ac + t * dc) as i64;
        out.insert((row, col));
    }
}

impl Region {
    /// Ordered hull vertices from the gift-wrapping march.
    ///
    /// Fewer than 3 members: the members themselves, in insertion order.
    /// Otherwise the march starts at the leftmost member (minimum column,
    /// first occurrence wins ties) and advances to the candidate with no
    /// member strictly clockwise of the current directed edge; collinear
    /// candidates defer to the farthest, which keeps the march finite on
    /// degenerate (straight-line) regions.
    pub fn convex_hull_vertices(&self) -> Vec<(i64, i64)> {
        let points: Vec<(i64, i64)> = self.iter_rc().collect();
        if points.len() < 3 {
            return points;
        }

        let mut start = 0_usize;
        for (i, p) in points.iter().enumerate() {
            if p.1 < points[start].1 {
                start = i;
            }
        }

        let mut hull = Vec::new();
        let mut p = start;
        loop {
            hull.push(points[p]);
            let mut q = (p + 1) % points.len();
            for (r, &candidate) in points.iter().enumerate() {
                if r == p {
                    continue;
                }
                match orientation(points[p], points[q], candidate) {
                    Orientation::CounterClockwise => q = r,
                    Orientation::Collinear => {
                        if dist_sq(points[p], candidate) > dist_sq(points[p], points[q]) {
                            q = r;
                        }
                    }
                    Orientation::Clockwise => {}
                }
            }
            p = q;
            if p == start {
                break;
            }
        }
        hull
    }

    /// Densified convex hull at the default resolution, as a new region
    pub fn convex_hull(&self) -> Region {
        self.convex_hull_with_resolution(DEFAULT_HULL_RESOLUTION)
    }

    /// Densified convex hull, as a new region.
    ///
    /// Regions with fewer than 3 members are their own hull. Otherwise
    /// the vertex ring is interpolated edge by edge, deduplicated, and
    /// the same interpolation is repeated over all pairs of boundary
    /// points (quadratic in boundary size) to fill the interior.
    pub fn convex_hull_with_resolution(&self, subdivisions: usize) -> Region {
        if self.len() < 3 {
            return self.clone();
        }

        let vertices = self.convex_hull_vertices();

        let mut boundary: UniqueSet<(i64, i64)> = UniqueSet::new();
        for (i, &a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            interpolate_segment(a, b, subdivisions, &mut boundary);
        }

        let mut filled: UniqueSet<(i64, i64)> = UniqueSet::new();
        let points = boundary.as_slice();
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                interpolate_segment(points[i], points[j], subdivisions, &mut filled);
            }
        }

        let mut out = Region::with_capacity(self.stride(), filled.len());
        for &(row, col) in filled.iter() {
            out.insert_unchecked(self.encode(row, col));
        }
        out
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
    fn test_orientation() {
        assert_eq!(
            orientation((0, 0), (0, 1), (1, 1)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation((1, 1), (0, 1), (0, 0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation((0, 0), (1, 1), (2, 2)),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_hull_vertices_of_rectangle_are_corners() {
        let region = filled_block(20, 2, 3, 5, 7);
        let hull = region.convex_hull_vertices();
        for corner in [(2, 3), (2, 9), (6, 3), (6, 9)] {
            assert!(hull.contains(&corner), "missing corner {:?}", corner);
        }
        // Every hull vertex is a member
        for &(row, col) in &hull {
            assert!(region.contains_rc(row, col));
        }
    }

    #[test]
    fn test_hull_of_small_region_is_itself() {
        let region = Region::from_members(10, [3, 27]);
        let hull = region.convex_hull();
        assert_eq!(hull, region);
        assert_eq!(hull.stride(), 10);
    }

    #[test]
    fn test_hull_of_straight_line_terminates() {
        let region = Region::from_members(10, [11, 12, 13, 14]);
        let hull = region.convex_hull_vertices();
        assert!(hull.contains(&(1, 1)));
        assert!(hull.contains(&(1, 4)));
        assert!(hull.len() <= 4);
    }

    #[test]
    fn test_filled_hull_covers_rectangle() {
        let region = filled_block(20, 2, 3, 4, 5);
        let hull = region.convex_hull();
        // The fill recovers at least the member cells of a convex region
        for n in region.iter() {
            assert!(hull.contains(n), "hull missing member {}", n);
        }
        // And stays within the bounding box
        for (row, col) in hull.iter_rc() {
            assert!((2..6).contains(&row) && (3..8).contains(&col));
        }
    }

    #[test]
    fn test_hull_of_triangle_fills_interior() {
        let mut region = Region::new(30);
        for &(row, col) in &[(0, 0), (0, 20), (14, 0)] {
            region.insert_rc(row, col);
        }
        let hull = region.convex_hull();
        // Centroid-ish interior cell must be present
        assert!(hull.contains_rc(4, 6));
        // Cells clearly outside the triangle must not be
        assert!(!hull.contains_rc(14, 20));
    }
}
