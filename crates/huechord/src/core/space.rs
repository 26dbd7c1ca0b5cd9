/// The enumeration of supported color spaces.
///
/// This crate's color spaces cover the conversion path from display-encoded
/// sRGB to the cylindrical CIE LCh space that palette generation and
/// discovery operate in:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB) in its gamma-corrected and
///     linear forms, with in-gamut coordinates ranging from 0 to 1,
///     inclusive.
///   * [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) as the
///     foundational color space connecting the RGB and Lab branches. Since
///     sRGB uses the [D65 standard
///     illuminant](https://en.wikipedia.org/wiki/Standard_illuminant), this
///     crate uses XYZ with D65 as its root. XYZ with the print-oriented D50
///     illuminant is available, too, because CIELAB is defined relative to
///     it. Chromatic adaptation between the two uses the (linear) Bradford
///     method.
///   * [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) with its
///     Cartesian a/b colorness coordinates, and CIELCh, the same color space
///     in polar coordinates—with C expressing chroma and hº expressing hue.
///     Lightness L ranges from 0 to 100. Because Lab uses Cartesian
///     coordinates, color difference in Lab simply is the Euclidian
///     distance, also known as ΔE*ab. Meanwhile, LCh's polar coordinates
///     make it well-suited to synthesizing and rotating hues, which is
///     exactly what harmony templates do.
///
/// Valid LCh coordinates observe the following invariants:
///
///   * The lightness is limited to `0..=100`.
///   * The chroma must be non-negative and in practice stays below 132 for
///     colors within the sRGB gamut.
///   * The hue may be not-a-number, which indicates a powerless component,
///     i.e., gray tone. In that case, the chroma must necessarily be zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Xyz,
    XyzD50,
    Lab,
    Lch,
}

impl ColorSpace {
    /// Determine whether this color space is an RGB color space.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is one of the CIELAB variations,
    /// i.e., Lab or LCh.
    pub const fn is_lab(&self) -> bool {
        matches!(*self, Self::Lab | Self::Lch)
    }

    /// Determine whether this color space uses polar coordinates, i.e., is
    /// LCh.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Lch)
    }
}

#[cfg(test)]
mod test {
    use super::ColorSpace;

    #[test]
    fn test_predicates() {
        assert!(ColorSpace::Srgb.is_rgb());
        assert!(ColorSpace::LinearSrgb.is_rgb());
        assert!(!ColorSpace::Lch.is_rgb());
        assert!(ColorSpace::Lab.is_lab());
        assert!(ColorSpace::Lch.is_lab());
        assert!(!ColorSpace::Xyz.is_lab());
        assert!(ColorSpace::Lch.is_polar());
        assert!(!ColorSpace::Lab.is_polar());
    }
}
