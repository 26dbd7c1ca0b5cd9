use crate::core::{
    convert, delta_e_lch, format, from_24bit, normalize, parse, to_24bit, to_eq_coordinates,
    ColorSpace,
};

use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
///
/// Rust currently does not allow floating point operations in const functions.
/// That makes it impossible to write a const function that constructs a new
/// high-resolution color object from integer coordinates. However, Rust does
/// currently allow floating point operations in const expressions, notably as
/// arguments to a const function such as a constructor. Hence, a macro can
/// convert the integer coordinates before passing them to the const function.
/// That's just what this macro does.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A high-resolution color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
///
/// # Color Coordinates
///
/// For RGB color spaces, the coordinates of in-gamut colors have unit range.
/// For the other color spaces, there are no gamut bounds.
///
/// However, the coordinates of colors in CIELAB and CIELCh still need to meet
/// the following constraints to be well-formed. The lightness must be
/// `0.0..=100.0` and chroma must be `0.0..`. There are no a-priori limits on
/// a/b or upper limit on chroma. The hue may have any magnitude, though
/// `0..360` are preferred.
///
/// A coordinate may be not-a-number because it is a [powerless
/// component](https://www.w3.org/TR/css-color-4/#powerless), such as the hue
/// in CIELCh when chroma is zero.
///
/// ## Normalization
///
/// While coordinates may be not-a-number, that representation of powerless
/// components can easily render any computation on colors useless. For that
/// reason, this class automatically normalizes colors with
/// [`Color::normalize`] if necessary. Normalization replaces not-a-numbers
/// with zero and also ensures that lightness and chroma have meaningful
/// quantities.
///
/// ## Equality Testing and Hashing
///
/// Normalization isn't sufficient for equality testing and hashing, which have
/// the additional requirement that equal colors also have equal hashes. Hence
/// this class performs the following steps to prepare coordinates for either
/// operation:
///
///   * To turn coordinates into comparable entities, replace not-a-numbers
///     with positive zero;
///   * To preserve not-a-number semantics for hues, also zero out chroma for
///     not-a-number hues in CIELCh;
///   * To preserve rotation semantics for hues, remove all full rotations;
///   * To prepare for rounding, scale down hues to unit range;
///   * To allow for floating point error, multiply by 1e8/1e3 and then round,
///     which drops the least significant digits;
///   * To make zeros comparable, replace negative zero with positive zero (but
///     only after rounding, which may produce zeros);
///   * To convince Rust that coordinates are comparable, convert to bits.
///
/// While rounding isn't strictly necessary for correctness, it makes for a
/// more robust comparison without meaningfully reducing precision.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Lch, [78.0, 25.0, 0.0]);
    /// assert_eq!(pink.space(), ColorSpace::Lch);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: lch(78 25 0);"></div>
    /// </div>
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let fire_brick = Color::srgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick.space(), ColorSpace::Srgb);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: rgb(177 31 36);"></div>
    /// </div>
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new CIELAB color with the given lightness L, a, and b
    /// coordinates.
    pub fn lab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lab, [l.into(), a.into(), b.into()])
    }

    /// Instantiate a new CIELCh color with the given lightness L, chroma C,
    /// and hue h coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let amber = Color::lch(76.0, 65.0, 80.0);
    /// assert_eq!(amber.space(), ColorSpace::Lch);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: lch(76 65 80);"></div>
    /// </div>
    pub fn lch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lch, [l.into(), c.into(), h.into()])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// This function returns a new sRGB color with the given red, green, and
    /// blue coordinates scaled by 1/255.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x3a);
    /// assert_eq!(tangerine, Color::srgb(1, 0.5764705882352941, 0.22745098039215686));
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ff933a;"></div>
    /// </div>
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let aqua = Color::lch(87.0, 40.0, 230.0);
    /// assert_eq!(aqua.space(), ColorSpace::Lch);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: lch(87 40 230);"></div>
    /// </div>
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Normalize this color.
    ///
    /// This method replaces not-a-number coordinates with zero. For the CIELAB
    /// variations, it also replaces a not-a-number hue as well as the
    /// corresponding chroma with zero. Furthermore, it clamps lightness to
    /// `0..=100` and chroma to `0..`.
    ///
    /// Many methods automatically normalize colors. A statement to that effect
    /// is included in their documentation. Methods that do *not* normalize
    /// their colors include [`Color::distance`].
    #[inline]
    pub fn normalize(&self) -> Self {
        Self::new(self.space, normalize(self.space, &self.coordinates))
    }

    /// Convert this color to the target color space.
    ///
    /// This method normalizes the color before conversion.
    ///
    /// # Approach
    ///
    /// A color space is usually defined through a conversion from and to
    /// another color space. The color module includes handwritten functions
    /// that implement just those single-hop conversions. The single-hop
    /// conversions form a tree rooted in XYZ D65, which suggests a divide and
    /// conquer approach towards the most general conversions: Split the path
    /// into two, from the source color space to XYZ and from XYZ to the target
    /// color space. Conversions within the RGB branch or the Lab branch do not
    /// go through XYZ and are handled upfront, by matching on the pair of
    /// color spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let apricot = Color::from_24bit(0xff, 0xb9, 0x7a);
    /// assert_eq!(apricot.to(ColorSpace::Lch), Color::new(
    ///     ColorSpace::Lch,
    ///     [80.85476944559504, 47.25956445072016, 63.48856188825429]
    /// ));
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ffb97a;"></div>
    /// </div>
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine the perceptual distance between the two colors.
    ///
    /// This method computes the 1976 CIE color difference ΔE*ab between the
    /// two colors after converting both to CIELCh. The lightness and chroma
    /// terms are plain differences, while the hue term is the chord spanned by
    /// the two hue angles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::Color;
    /// let apricot = Color::from_24bit(0xff, 0xb9, 0x7a);
    /// let violet = Color::from_24bit(0x33, 0x00, 0x6b);
    /// assert_eq!(apricot.distance(&apricot), 0.0);
    /// assert!((apricot.distance(&violet) - 115.84160442781864).abs() < 1e-9);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ffb97a;"></div>
    /// <div style="background-color: #33006b;"></div>
    /// </div>
    pub fn distance(&self, other: &Self) -> Float {
        delta_e_lch(
            &self.to(ColorSpace::Lch).coordinates,
            &other.to(ColorSpace::Lch).coordinates,
        )
    }

    /// Find the index position of the candidate color closest to this color.
    ///
    /// This method delegates to [`Color::find_closest`] using the ΔE*ab
    /// metric over CIELCh coordinates.
    ///
    /// Since this method converts every color to CIELCh, it also normalizes
    /// every color before use.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::Color;
    /// let colors = [
    ///     &Color::from_24bit(0xff, 0xb9, 0x7a),
    ///     &Color::from_24bit(0x33, 0x00, 0x6b),
    /// ];
    /// let claret = Color::from_24bit(0x6a, 0x00, 0x76);
    /// assert_eq!(claret.find_closest_lch(colors), Some(1));
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ffb97a;"></div>
    /// <div style="background-color: #33006b;"></div>
    /// <div style="background-color: #6a0076;"></div>
    /// </div>
    pub fn find_closest_lch<'c, C>(&self, candidates: C) -> Option<usize>
    where
        C: IntoIterator<Item = &'c Self>,
    {
        self.find_closest(candidates, ColorSpace::Lch, delta_e_lch)
    }

    /// Find the index position of the candidate color closest to this color.
    ///
    /// This method compares this color to every candidate color by computing
    /// the distance with the given function and returns the index position of
    /// the candidate with smallest distance. If there are no candidates, it
    /// returns `None`. The distance metric is declared `mut` to allow for
    /// stateful comparisons.
    ///
    /// Since this method converts every color to the given color space, it
    /// also normalizes every color before use.
    pub fn find_closest<'c, C, F>(
        &self,
        candidates: C,
        space: ColorSpace,
        mut compute_distance: F,
    ) -> Option<usize>
    where
        C: IntoIterator<Item = &'c Color>,
        F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
    {
        let origin = self.to(space);
        let mut min_distance = Float::INFINITY;
        let mut min_index = None;

        for (index, candidate) in candidates.into_iter().enumerate() {
            let candidate = candidate.to(space);
            let distance = compute_distance(&origin.coordinates, &candidate.coordinates);
            if distance < min_distance {
                min_distance = distance;
                min_index = Some(index);
            }
        }

        min_index
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to sRGB before converting each
    /// coordinate to a `u8`, clamping out-of-gamut values to `0x00..=0xff`.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(ColorSpace::Srgb, self.to(ColorSpace::Srgb).as_ref())
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal
    /// representation.
    ///
    /// Like [`Color::to_24bit`], this method converts the color to sRGB before
    /// formatting its coordinates in hashed hexadecimal notation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let apricot = Color::from_24bit(0xff, 0xb9, 0x7a);
    /// assert_eq!(apricot.to(ColorSpace::Lch).to_hex_format(), "#ffb97a");
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ffb97a;"></div>
    /// </div>
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Color {
    /// Create an instance of the default color.
    ///
    /// The chosen default for high-resolution colors is the origin in XYZ,
    /// i.e., pitch black.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace, Float};
    /// let default = Color::default();
    /// assert_eq!(default.space(), ColorSpace::Xyz);
    /// assert_eq!(default.as_ref(), &[0.0 as Float, 0.0, 0.0]);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(xyz 0 0 0);"></div>
    /// </div>
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl std::str::FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// This method recognizes the hashed hexadecimal notation familiar from
    /// the web, with three or six hexadecimal digits, e.g., `#123` or
    /// `#cafe00`. Note that the three digit version is a short form of the six
    /// digit version with every digit repeated. In other words, the red
    /// coordinate in `#123` is not 0x1/0xf but 0x11/0xff.
    ///
    /// This method also recognizes a subset of the *CSS color syntax*. In
    /// particular, it recognizes the `color()`, `lab()`, and `lch()` CSS
    /// functions. For `color()`, the color space right after the opening
    /// parenthesis may be `srgb`, `--linear-srgb`, `xyz-d65`, or `xyz-d50`.
    /// As indicated by the leading double-dashes, linear sRGB is not included
    /// in [CSS 4 Color](https://www.w3.org/TR/css-color-4/). Coordinates must
    /// be space-separated and unitless (i.e., no `%` or `deg`).
    ///
    /// By implementing the `FromStr` trait, `str::parse` works just the same
    /// for parsing color formats—that is, as long as type inference can
    /// determine what type to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// # use huechord::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::srgb(
    ///     0.00392156862745098,
    ///     0.0784313725490196,
    ///     0.5019607843137255,
    /// ));
    ///
    /// let teal: Color = str::parse("lch(60 30 200)")?;
    /// assert_eq!(teal, Color::lch(60.0, 30.0, 200.0));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #011480;"></div>
    /// <div style="background-color: lch(60 30 200);"></div>
    /// </div>
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates)| Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use std::str::FromStr;
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::try_from(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace};
    /// let purple = Color::srgb(0.5, 0.4, 0.75);
    /// assert_eq!(purple[2], 0.75);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(srgb 0.5 0.4 0.75);"></div>
    /// </div>
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// A key requirement for data structures that implement the `Eq` and
    /// `Hash` traits is that [`Self::hash`](struct.Color.html#method.hash)
    /// produces the same results for colors that are [`Color::eq`]. [`Color`]
    /// enforces that invariant by normalizing coordinates and turning them
    /// into bit strings before equality testing or hashing, as described in
    /// the [struct documentation](Color#equality-testing-and-hashing).
    ///
    /// # Examples
    ///
    /// The following example code illustrates how equality testing handles
    /// not-a-numbers, numbers with very small differences, and hues:
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace, Float};
    /// assert_eq!(
    ///     Color::srgb(Float::NAN, 1e-10, 0.12),
    ///     Color::srgb(0,          0.0,   0.12)
    /// );
    ///
    /// assert_eq!(Color::lch(50.0, 40.0, 665.0), Color::lch(50.0, 40.0, 305.0));
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: color(srgb 0 0 0.12);"></div>
    /// <div style="background-color: lch(50 40 305);"></div>
    /// </div>
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in CSS format using either a `color()`,
    /// `lab()`, or `lch()` CSS function and three space-separated coordinates.
    /// It respects the formatter's precision, defaulting to 5 digits past the
    /// decimal. Since degrees for CIELCh hues are up to two orders of
    /// magnitude larger than other coordinates, this method uses a precision
    /// smaller by 2 for degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::{Color, ColorSpace::*};
    /// # use huechord::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let apricot = Color::from_str("#ffb97a")?;
    /// assert_eq!(format!("{}", apricot), "color(srgb 1 0.72549 0.47843)");
    /// assert_eq!(format!("{}", apricot.to(Lch)), "lch(80.85477 47.25956 63.489)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #ffb97a;"></div>
    /// <div style="background-color: color(srgb 1 0.72549 0.47843);"></div>
    /// <div style="background-color: lch(80.85477 47.25956 63.489);"></div>
    /// </div>
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::core::ColorSpace;
    use crate::Float;

    #[test]
    fn test_color() {
        let apricot = Color::from_24bit(0xff, 0xb9, 0x7a);
        assert_eq!(apricot.space(), ColorSpace::Srgb);
        assert_eq!(apricot.to_24bit(), [0xff_u8, 0xb9, 0x7a]);
        assert_eq!(apricot.to_hex_format(), "#ffb97a");

        let lch = apricot.to(ColorSpace::Lch);
        assert_eq!(
            lch,
            Color::lch(80.85476944559504, 47.25956445072016, 63.48856188825429)
        );

        // Round trip through LCh preserves the 24-bit coordinates.
        assert_eq!(lch.to_hex_format(), "#ffb97a");
    }

    #[test]
    fn test_macro() {
        const VIOLET: Color = rgb!(0x33, 0x00, 0x6b);
        assert_eq!(VIOLET, Color::from_24bit(0x33, 0x00, 0x6b));
        assert_eq!(VIOLET.to_hex_format(), "#33006b");
    }

    #[test]
    fn test_equivalence() {
        // Hues differing by full rotations compare equal, as do powerless
        // hues regardless of chroma.
        assert_eq!(Color::lch(50.0, 40.0, 30.0), Color::lch(50.0, 40.0, 750.0));
        assert_eq!(
            Color::lch(50.0, 40.0, Float::NAN),
            Color::lch(50.0, 0.0, 0.0)
        );
        assert_ne!(Color::lch(50.0, 40.0, 30.0), Color::lab(50.0, 40.0, 30.0));
    }

    #[test]
    fn test_distance() {
        let apricot = Color::from_24bit(0xff, 0xb9, 0x7a);
        let violet = Color::from_24bit(0x33, 0x00, 0x6b);

        assert_eq!(apricot.distance(&apricot), 0.0);
        assert_eq!(apricot.distance(&violet), violet.distance(&apricot));
        assert!((apricot.distance(&violet) - 115.84160442781864).abs() < 1e-9);
    }

    #[test]
    fn test_find_closest() {
        let pool = [
            Color::from_24bit(0xff, 0xb9, 0x7a),
            Color::from_24bit(0xff, 0x72, 0x7f),
            Color::from_24bit(0x33, 0x00, 0x6b),
        ];

        let claret = Color::from_24bit(0x6a, 0x00, 0x76);
        assert_eq!(claret.find_closest_lch(&pool), Some(2));

        let empty: [Color; 0] = [];
        assert_eq!(claret.find_closest_lch(&empty), None);
    }
}
