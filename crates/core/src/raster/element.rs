//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// This trait bounds the types that can be used as raster values,
/// ensuring they support the conversions the aggregation paths need.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }

    /// Whether this cell participates in a boolean-like support mask
    /// (nonzero = included)
    fn is_set(self) -> bool {
        self > Self::zero()
    }
}

macro_rules! impl_raster_element {
    ($($t:ty),*) => {
        $(impl RasterElement for $t {})*
    };
}

impl_raster_element!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(42u8.to_f64(), Some(42.0));
        assert_eq!((-3i32).to_f64(), Some(-3.0));
        assert_eq!(1.5f32.to_f64(), Some(1.5));
    }

    #[test]
    fn test_is_set() {
        assert!(1u8.is_set());
        assert!(!0u8.is_set());
        assert!(0.5f64.is_set());
        assert!(!(-1i32).is_set());
    }
}
