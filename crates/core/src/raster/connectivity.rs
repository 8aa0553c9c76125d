//! Pixel connectivity for neighbor-based analysis

use serde::{Deserialize, Serialize};

/// Offsets of the 4 axis-aligned neighbors, as (dr, dc)
pub const OFFSETS_4: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Offsets of the 8 axis-plus-diagonal neighbors, as (dr, dc)
pub const OFFSETS_8: [(i64, i64); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Neighbor relation between grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Axis-aligned neighbors only
    Four,
    /// Axis-aligned plus diagonal neighbors
    Eight,
}

impl Connectivity {
    /// (dr, dc) offsets of the neighbors under this relation
    pub fn offsets(&self) -> &'static [(i64, i64)] {
        match self {
            Connectivity::Four => &OFFSETS_4,
            Connectivity::Eight => &OFFSETS_8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Connectivity::Four.offsets().len(), 4);
        assert_eq!(Connectivity::Eight.offsets().len(), 8);
        // 8-connectivity extends 4-connectivity
        for off in Connectivity::Four.offsets() {
            assert!(Connectivity::Eight.offsets().contains(off));
        }
    }
}
