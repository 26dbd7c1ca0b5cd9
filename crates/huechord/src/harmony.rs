//! Harmony patterns and the palette templates they generate.

use crate::core::{normalize_hue, ColorSpace};
use crate::{Color, Float};

/// A color harmony pattern.
///
/// Each pattern is a set of hue offsets, in degrees, relative to some base
/// hue. A pattern turns into a concrete [`PaletteTemplate`] by rotating the
/// hue of a base color by every offset while keeping the base color's
/// lightness and chroma.
///
/// The patterns are ordered because their templates and matched palettes are
/// stored in arrays indexed by pattern.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HarmonyPattern {
    #[default]
    Analogous,
    Triadic,
    Tetradic,
    Complementary,
    SplitComplementary,
}

/// The number of harmony patterns.
pub const PATTERN_COUNT: usize = 5;

impl HarmonyPattern {
    /// Get an iterator over all harmony patterns in order.
    pub fn all() -> HarmonyPatternIterator {
        HarmonyPatternIterator::new()
    }

    /// Get this pattern's hue offsets in degrees.
    ///
    /// The first offset always is zero, i.e., every pattern includes the base
    /// hue itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huechord::HarmonyPattern;
    /// assert_eq!(HarmonyPattern::Triadic.offsets(), &[0.0, 120.0, 240.0]);
    /// assert_eq!(HarmonyPattern::Complementary.offsets(), &[0.0, 180.0]);
    /// ```
    pub const fn offsets(&self) -> &'static [Float] {
        use HarmonyPattern::*;

        match self {
            Analogous => &[0.0, 30.0, 60.0],
            Triadic => &[0.0, 120.0, 240.0],
            Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Complementary => &[0.0, 180.0],
            SplitComplementary => &[0.0, 150.0, 210.0],
        }
    }

    /// Get the number of target colors for this pattern.
    ///
    /// The count equals the number of hue offsets and hence the number of
    /// candidate colors that greedy matching consumes for this pattern.
    #[inline]
    pub const fn target_count(&self) -> usize {
        self.offsets().len()
    }

    /// Get this harmony pattern's name.
    ///
    /// This method returns the human-readable name, e.g., `"split
    /// complementary"` for [`HarmonyPattern::SplitComplementary`].
    pub const fn name(&self) -> &'static str {
        use HarmonyPattern::*;

        match self {
            Analogous => "analogous",
            Triadic => "triadic",
            Tetradic => "tetradic",
            Complementary => "complementary",
            SplitComplementary => "split complementary",
        }
    }
}

impl std::fmt::Display for HarmonyPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over harmony patterns.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Debug)]
pub struct HarmonyPatternIterator {
    index: usize,
}

const ALL_PATTERNS: [HarmonyPattern; PATTERN_COUNT] = [
    HarmonyPattern::Analogous,
    HarmonyPattern::Triadic,
    HarmonyPattern::Tetradic,
    HarmonyPattern::Complementary,
    HarmonyPattern::SplitComplementary,
];

impl HarmonyPatternIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for HarmonyPatternIterator {
    type Item = HarmonyPattern;

    fn next(&mut self) -> Option<Self::Item> {
        if PATTERN_COUNT <= self.index {
            None
        } else {
            let index = self.index;
            self.index += 1;
            Some(ALL_PATTERNS[index])
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = PATTERN_COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for HarmonyPatternIterator {
    fn len(&self) -> usize {
        PATTERN_COUNT - self.index
    }
}

impl std::iter::FusedIterator for HarmonyPatternIterator {}

// ====================================================================================================================

/// A palette template generated from a base color.
///
/// A template pairs a harmony pattern with its target colors, which all share
/// the base color's lightness and chroma and differ only in hue. Target hues
/// are normalized to `0..360`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteTemplate {
    pattern: HarmonyPattern,
    targets: Vec<Color>,
}

impl PaletteTemplate {
    /// Generate the template for the given pattern and base color.
    ///
    /// This function converts the base color to CIELCh, which also normalizes
    /// it, and then rotates its hue by each of the pattern's offsets.
    pub fn new(pattern: HarmonyPattern, base: &Color) -> Self {
        let [l, c, h] = base.to(ColorSpace::Lch).coordinates();
        let targets = pattern
            .offsets()
            .iter()
            .map(|offset| Color::lch(l, c, normalize_hue(h + offset)))
            .collect();

        Self { pattern, targets }
    }

    /// Access the harmony pattern.
    #[inline]
    pub fn pattern(&self) -> HarmonyPattern {
        self.pattern
    }

    /// Access the target colors.
    ///
    /// The targets appear in offset order, so the first target always carries
    /// the base color's hue.
    #[inline]
    pub fn targets(&self) -> &[Color] {
        &self.targets
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The palette templates for all harmony patterns, generated from one base
/// color.
///
/// A template set is indexed by [`HarmonyPattern`]:
///
/// ```
/// # use huechord::{Color, HarmonyPattern, TemplateSet};
/// let templates = TemplateSet::new(&Color::lch(50.0, 40.0, 10.0));
/// let complementary = &templates[HarmonyPattern::Complementary];
/// assert_eq!(complementary.targets()[1], Color::lch(50.0, 40.0, 190.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateSet {
    templates: [PaletteTemplate; PATTERN_COUNT],
}

impl TemplateSet {
    /// Generate the templates for all harmony patterns from the base color.
    pub fn new(base: &Color) -> Self {
        Self {
            templates: ALL_PATTERNS.map(|pattern| PaletteTemplate::new(pattern, base)),
        }
    }

    /// Get an iterator over the palette templates in pattern order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteTemplate> {
        self.templates.iter()
    }
}

impl std::ops::Index<HarmonyPattern> for TemplateSet {
    type Output = PaletteTemplate;

    #[inline]
    fn index(&self, pattern: HarmonyPattern) -> &Self::Output {
        &self.templates[pattern as usize]
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a PaletteTemplate;
    type IntoIter = std::slice::Iter<'a, PaletteTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

// ====================================================================================================================
