//! Row-major coordinate model
//!
//! A pixel's identity is a scalar row-major index interpreted against a
//! raster stride (columns per row). Decoding uses truncating integer
//! division. All coordinate arithmetic is signed; positions outside the
//! grid decode to values that never match a member.

/// Decode a scalar row-major index into (row, col) for the given stride.
///
/// Truncating division: `row = index / stride`, `col = index % stride`.
#[inline]
pub fn decode(index: i64, stride: i64) -> (i64, i64) {
    (index / stride, index % stride)
}

/// Encode (row, col) into a scalar row-major index for the given stride.
#[inline]
pub fn encode(row: i64, col: i64, stride: i64) -> i64 {
    row * stride + col
}

/// Row component of a scalar index.
#[inline]
pub fn row_of(index: i64, stride: i64) -> i64 {
    index / stride
}

/// Column component of a scalar index.
#[inline]
pub fn col_of(index: i64, stride: i64) -> i64 {
    index % stride
}

/// Euclidean distance between two decoded scalar indices.
#[inline]
pub fn distance(a: i64, b: i64, stride: i64) -> f64 {
    let (ar, ac) = decode(a, stride);
    let (br, bc) = decode(b, stride);
    let dr = (ar - br) as f64;
    let dc = (ac - bc) as f64;
    (dr * dr + dc * dc).sqrt()
}
