use super::ColorSpace;
use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping
/// the sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of
/// subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the
/// same color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, clamping lightness and chroma,
/// scaling the hue of LCh, reducing resolution, and dropping the sign of
/// negative zeros before comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function ensures that coordinates are well-formed. In particular, it
/// replaces not-a-number coordinates with zero. For the CIELAB variations,
/// it also ensures that lightness is in `0..=100` and, for LCh, that chroma
/// is in `0..`. For semantic consistency, if the hue in LCh is
/// not-a-number, it also replaces chroma with zero.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [mut c1, mut c2, mut c3] = *coordinates;

    if c1.is_nan() {
        c1 = 0.0;
    }
    if c2.is_nan() {
        c2 = 0.0;
    }
    if c3.is_nan() {
        c3 = 0.0;
        if space.is_polar() {
            c2 = 0.0;
        }
    }

    if space.is_lab() {
        c1 = c1.clamp(0.0, 100.0);
        if space.is_polar() {
            c2 = c2.max(0.0);
        }
    }

    [c1, c2, c3]
}

/// Normalize the hue into the range 0º, inclusive, to 360º, exclusive.
///
/// This function removes all full rotations from the given hue. It handles
/// negative hues correctly, i.e., the result is never negative and never
/// reaches 360º. It leaves not-a-number hues in place.
///
/// ```
/// # use huechord::{assert_close_enough, normalize_hue};
/// assert_close_enough!(normalize_hue(0.0), 0.0);
/// assert_close_enough!(normalize_hue(400.0), 40.0);
/// assert_close_enough!(normalize_hue(-30.0), 330.0);
/// assert_close_enough!(normalize_hue(-750.0), 330.0);
/// ```
#[inline]
pub fn normalize_hue(hue: Float) -> Float {
    // For tiny negative hues, rem_euclid rounds to 360.0 exactly. The
    // trailing modulo folds that boundary value back to zero.
    hue.rem_euclid(360.0) % 360.0
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    // Zero out not-a-numbers and clamp lightness and chroma.
    let [mut c1, mut c2, mut c3] = normalize(space, coordinates);

    // Normalize rotation and scale to unit range.
    if space.is_polar() {
        c3 = normalize_hue(c3) / 360.0;
    }

    // Reduce precision.
    let factor = <Float as FloatExt>::ROUNDING_FACTOR;
    c1 = (c1 * factor).round();
    c2 = (c2 * factor).round();
    c3 = (c3 * factor).round();

    // Prevent too much negativity.
    if c1 == -0.0 {
        c1 = 0.0;
    }
    if c2 == -0.0 {
        c2 = 0.0
    }
    if c3 == -0.0 {
        c3 = 0.0
    }

    [c1.to_bits(), c2.to_bits(), c3.to_bits()]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after
/// the decimal, and drops the sign of negative zero and returns the result
/// as a bit string. It is only public because the [`assert_close_enough`]
/// test macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::{normalize, normalize_hue, to_eq_coordinates};
    use crate::core::ColorSpace;
    use crate::Float;

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(359.5), 359.5);
        assert_eq!(normalize_hue(360.0), 0.0);

        // Adding full rotations must not change the normalized hue.
        for hue in [0.0, 10.0, 63.5, 190.0, 271.25, 359.0] {
            for rotations in -3_i32..=3 {
                let rotated = (360.0 * rotations as Float) + hue;
                assert!((normalize_hue(rotated) - hue).abs() < 1e-9);
            }
        }

        // The result never is negative, never reaches 360º. Tiny negative
        // hues are the critical case: their Euclidean remainder rounds to
        // 360.0 exactly and must fold back to zero.
        for hue in [
            -1e-14,
            -1e-300,
            -1.0,
            -180.0,
            -360.0,
            -361.0,
            -1234.5,
            720.0,
            1234.5,
        ] {
            let normal = normalize_hue(hue);
            assert!((0.0..360.0).contains(&normal), "{} not in [0, 360)", normal);
        }
        assert_eq!(normalize_hue(-1e-14), 0.0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(ColorSpace::Lch, &[Float::NAN, 40.0, 90.0]),
            [0.0, 40.0, 90.0]
        );
        assert_eq!(
            normalize(ColorSpace::Lch, &[50.0, 40.0, Float::NAN]),
            [50.0, 0.0, 0.0]
        );
        assert_eq!(
            normalize(ColorSpace::Lch, &[120.0, -3.0, 90.0]),
            [100.0, 0.0, 90.0]
        );
        // Lab's a/b coordinates may be negative, only lightness is clamped.
        assert_eq!(
            normalize(ColorSpace::Lab, &[-2.0, -40.0, -50.0]),
            [0.0, -40.0, -50.0]
        );
        // RGB and XYZ coordinates only lose their not-a-numbers.
        assert_eq!(
            normalize(ColorSpace::Srgb, &[Float::NAN, 2.0, -1.0]),
            [0.0, 2.0, -1.0]
        );
    }

    #[test]
    fn test_eq_coordinates() {
        // Hues that differ by full rotations compare equal.
        assert_eq!(
            to_eq_coordinates(ColorSpace::Lch, &[50.0, 40.0, 30.0]),
            to_eq_coordinates(ColorSpace::Lch, &[50.0, 40.0, 750.0]),
        );
        // Not-a-number hues are powerless, hence chroma is ignored.
        assert_eq!(
            to_eq_coordinates(ColorSpace::Lch, &[50.0, 40.0, Float::NAN]),
            to_eq_coordinates(ColorSpace::Lch, &[50.0, 0.0, 0.0]),
        );
        // A tiny negative hue folds to 0º, not 360º.
        assert_eq!(
            to_eq_coordinates(ColorSpace::Lch, &[50.0, 40.0, -1e-14]),
            to_eq_coordinates(ColorSpace::Lch, &[50.0, 40.0, 0.0]),
        );
    }
}
