/// A trait extension to improve floating point ergonomics.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal. Since CIELAB
    /// lightness and hue coordinates span two to three orders of magnitude
    /// beyond unit range, the factors are smaller than they would be for
    /// unit coordinates.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e8;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e3;
}
