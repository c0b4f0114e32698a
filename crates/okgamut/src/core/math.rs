use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

// ----------------------------------------------------------------------------------------------------------

/// Linearly interpolate between the two numbers.
///
/// The result is exactly `from` for `t = 0` and exactly `to` for `t = 1`.
#[inline]
pub(crate) fn lerp(t: Float, from: Float, to: Float) -> Float {
    from.mul_add(1.0 - t, to * t)
}

/// Round down to the given number of digits after the decimal.
#[inline]
pub(crate) fn floor_to(value: Float, digits: i32) -> Float {
    let factor = (10.0 as Float).powi(digits);
    (value * factor).floor() / factor
}

/// Round up to the given number of digits after the decimal.
#[inline]
pub(crate) fn ceil_to(value: Float, digits: i32) -> Float {
    let factor = (10.0 as Float).powi(digits);
    (value * factor).ceil() / factor
}

#[cfg(test)]
mod test {
    use super::{ceil_to, floor_to, lerp};
    use crate::assert_close_enough;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 0.3, 0.7), 0.3);
        assert_eq!(lerp(1.0, 0.3, 0.7), 0.7);
        assert_close_enough!(lerp(0.5, 0.3, 0.7), 0.5);
        assert_close_enough!(lerp(0.25, 1.0, -1.0), 0.5);
    }

    #[test]
    fn test_rounding_to_digits() {
        assert_close_enough!(floor_to(0.62795, 4), 0.6279);
        assert_close_enough!(ceil_to(0.62791, 4), 0.628);
        assert_close_enough!(floor_to(0.25768, 3), 0.257);
        assert_close_enough!(ceil_to(-0.0005, 3), 0.0);
        assert_close_enough!(floor_to(2.0, 3), 2.0);
    }
}
