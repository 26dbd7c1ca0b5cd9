//! Greedy discovery of harmonious palettes in a pool of candidate colors.

use crate::core::{delta_e_lch, find_closest, ColorSpace};
use crate::error::InsufficientCandidatesError;
use crate::harmony::{HarmonyPattern, PaletteTemplate, TemplateSet, PATTERN_COUNT};
use crate::{Color, Float};

/// A palette matched against a pool of candidate colors.
///
/// A matched palette fills the targets of one [`PaletteTemplate`] with
/// distinct candidate colors. The colors appear in target order and retain
/// their original color spaces and coordinates. The variance is the sum of
/// the perceptual distances between each target and its match; smaller
/// variances mean closer fits.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedPalette {
    pattern: HarmonyPattern,
    colors: Vec<Color>,
    variance: Float,
}

impl MatchedPalette {
    /// Access the harmony pattern.
    #[inline]
    pub fn pattern(&self) -> HarmonyPattern {
        self.pattern
    }

    /// Access the matched colors in target order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Access the total distance between targets and matched colors.
    #[inline]
    pub fn variance(&self) -> Float {
        self.variance
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The best matched palettes for all harmony patterns.
///
/// Like [`TemplateSet`], discovered palettes are indexed by
/// [`HarmonyPattern`].
#[derive(Clone, Debug, PartialEq)]
pub struct DiscoveredPalettes {
    palettes: [MatchedPalette; PATTERN_COUNT],
}

impl DiscoveredPalettes {
    /// Get an iterator over the matched palettes in pattern order.
    pub fn iter(&self) -> std::slice::Iter<'_, MatchedPalette> {
        self.palettes.iter()
    }
}

impl std::ops::Index<HarmonyPattern> for DiscoveredPalettes {
    type Output = MatchedPalette;

    #[inline]
    fn index(&self, pattern: HarmonyPattern) -> &Self::Output {
        &self.palettes[pattern as usize]
    }
}

impl<'a> IntoIterator for &'a DiscoveredPalettes {
    type Item = &'a MatchedPalette;
    type IntoIter = std::slice::Iter<'a, MatchedPalette>;

    fn into_iter(self) -> Self::IntoIter {
        self.palettes.iter()
    }
}

// ====================================================================================================================

/// A candidate color paired with its CIELCh coordinates.
///
/// Greedy matching measures every distance in CIELCh. Converting each pool
/// color once up front avoids converting it again for every target.
struct Candidate {
    color: Color,
    lch: [Float; 3],
}

impl Candidate {
    fn new(color: &Color) -> Self {
        Self {
            color: color.clone(),
            lch: color.to(ColorSpace::Lch).coordinates(),
        }
    }
}

/// Determine whether the two colors are identical.
///
/// Unlike [`Color::eq`], this comparison does not normalize or round: it
/// requires the same color space and bit-for-bit equal coordinates. Exclusion
/// during greedy matching must not conflate distinct pool colors that merely
/// round to the same coordinates. Since `==` on floats treats not-a-numbers
/// as unequal, colors with not-a-number coordinates are never identical.
fn is_identical(color1: &Color, color2: &Color) -> bool {
    color1.space() == color2.space() && color1.coordinates() == color2.coordinates()
}

/// Greedily match the template's targets against the candidate pool.
///
/// For each target in order, this function picks the closest candidate not
/// identical to an already picked color and adds the distance to the running
/// variance. Ties go to the candidate that appears first in the pool. If a
/// target finds no remaining candidate, matching fails with an
/// [`InsufficientCandidatesError`].
fn match_template(
    template: &PaletteTemplate,
    pool: &[Candidate],
) -> Result<MatchedPalette, InsufficientCandidatesError> {
    let pattern = template.pattern();
    let mut colors: Vec<Color> = Vec::with_capacity(pattern.target_count());
    let mut variance = 0.0;

    for target in template.targets() {
        let available: Vec<usize> = (0..pool.len())
            .filter(|&index| {
                !colors
                    .iter()
                    .any(|picked| is_identical(&pool[index].color, picked))
            })
            .collect();

        let closest = find_closest(
            target.as_ref(),
            available.iter().map(|&index| &pool[index].lch),
            delta_e_lch,
        )
        .ok_or_else(|| InsufficientCandidatesError {
            pattern,
            required: pattern.target_count(),
            available: count_distinct(pool),
        })?;

        let candidate = &pool[available[closest]];
        variance += delta_e_lch(target.as_ref(), &candidate.lch);
        colors.push(candidate.color.clone());
    }

    Ok(MatchedPalette {
        pattern,
        colors,
        variance,
    })
}

/// Count the pool's distinct colors, i.e., the maximum number of targets that
/// greedy matching can fill from this pool.
fn count_distinct(pool: &[Candidate]) -> usize {
    (0..pool.len())
        .filter(|&index| {
            !pool[..index]
                .iter()
                .any(|earlier| is_identical(&earlier.color, &pool[index].color))
        })
        .count()
}

/// Discover the best matching palette for every harmony pattern.
///
/// This function tries every candidate color as the base of a full
/// [`TemplateSet`] and greedily matches each template against the candidate
/// pool. For every harmony pattern, it keeps the matched palette with the
/// smallest variance; when several bases produce the same variance, the base
/// that appears first in the pool wins. The result hence is deterministic for
/// a given pool.
///
/// Matched colors are returned as given, i.e., in their original color spaces
/// with their original coordinates.
///
/// # Errors
///
/// If the pool has fewer distinct colors than a pattern has targets, this
/// function returns an [`InsufficientCandidatesError`] naming that pattern.
///
/// # Examples
///
/// ```
/// # use huechord::{discover, Color, HarmonyPattern};
/// # use huechord::error::InsufficientCandidatesError;
/// let pool = [
///     Color::from_24bit(0xff, 0xb9, 0x7a),
///     Color::from_24bit(0xf0, 0x2f, 0x87),
///     Color::from_24bit(0x9a, 0x00, 0x7f),
///     Color::from_24bit(0x33, 0x00, 0x6b),
/// ];
/// let palettes = discover(&pool)?;
/// let complementary = &palettes[HarmonyPattern::Complementary];
/// assert_eq!(complementary.colors().len(), 2);
/// # Ok::<(), InsufficientCandidatesError>(())
/// ```
pub fn discover(candidates: &[Color]) -> Result<DiscoveredPalettes, InsufficientCandidatesError> {
    let pool: Vec<Candidate> = candidates.iter().map(Candidate::new).collect();

    let templates: Vec<TemplateSet> = pool
        .iter()
        .map(|candidate| TemplateSet::new(&candidate.color))
        .collect();

    let mut palettes: Vec<MatchedPalette> = Vec::with_capacity(PATTERN_COUNT);
    for pattern in HarmonyPattern::all() {
        let mut best: Option<MatchedPalette> = None;

        for set in templates.iter() {
            let palette = match_template(&set[pattern], &pool)?;
            if best
                .as_ref()
                .map_or(true, |best| palette.variance < best.variance)
            {
                best = Some(palette);
            }
        }

        palettes.push(best.ok_or(InsufficientCandidatesError {
            pattern,
            required: pattern.target_count(),
            available: 0,
        })?);
    }

    // The loop pushes exactly one palette per pattern.
    let palettes: [MatchedPalette; PATTERN_COUNT] = palettes
        .try_into()
        .unwrap_or_else(|_| unreachable!("one palette per harmony pattern"));

    Ok(DiscoveredPalettes { palettes })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{discover, match_template, Candidate};
    use crate::error::InsufficientCandidatesError;
    use crate::harmony::{HarmonyPattern, PaletteTemplate};
    use crate::{Color, Float};

    /// A nine-color gradient ramp from apricot to deep violet.
    const RAMP: [[u8; 3]; 9] = [
        [0xff, 0xb9, 0x7a],
        [0xff, 0x95, 0x7c],
        [0xff, 0x72, 0x7f],
        [0xff, 0x50, 0x83],
        [0xf0, 0x2f, 0x87],
        [0xc7, 0x00, 0x84],
        [0x9a, 0x00, 0x7f],
        [0x6a, 0x00, 0x76],
        [0x33, 0x00, 0x6b],
    ];

    fn ramp() -> Vec<Color> {
        RAMP.iter()
            .map(|&[r, g, b]| Color::from_24bit(r, g, b))
            .collect()
    }

    fn assert_palette(
        palettes: &super::DiscoveredPalettes,
        pattern: HarmonyPattern,
        expected_indices: &[usize],
        expected_variance: Float,
    ) {
        let pool = ramp();
        let palette = &palettes[pattern];
        assert_eq!(palette.pattern(), pattern);

        let expected: Vec<Color> = expected_indices.iter().map(|&i| pool[i].clone()).collect();
        assert_eq!(palette.colors(), expected.as_slice());
        assert!(
            (palette.variance() - expected_variance).abs() < 1e-5,
            "variance {} differs from {}",
            palette.variance(),
            expected_variance,
        );
    }

    #[test]
    fn test_discover_ramp() -> Result<(), InsufficientCandidatesError> {
        let palettes = discover(&ramp())?;

        assert_palette(&palettes, HarmonyPattern::Analogous, &[2, 1, 0], 40.800819);
        assert_palette(&palettes, HarmonyPattern::Triadic, &[1, 0, 7], 137.880099);
        assert_palette(
            &palettes,
            HarmonyPattern::Tetradic,
            &[1, 0, 8, 6],
            203.378448,
        );
        assert_palette(
            &palettes,
            HarmonyPattern::Complementary,
            &[0, 8],
            91.054719,
        );
        assert_palette(
            &palettes,
            HarmonyPattern::SplitComplementary,
            &[1, 0, 8],
            169.744569,
        );

        Ok(())
    }

    #[test]
    fn test_exclusivity() -> Result<(), InsufficientCandidatesError> {
        // Within each palette, every pool color appears at most once.
        let palettes = discover(&ramp())?;

        for palette in &palettes {
            let colors = palette.colors();
            assert_eq!(colors.len(), palette.pattern().target_count());
            for (index, color) in colors.iter().enumerate() {
                for other in &colors[index + 1..] {
                    assert!(!super::is_identical(color, other));
                }
            }
        }

        Ok(())
    }

    #[test]
    fn test_determinism() -> Result<(), InsufficientCandidatesError> {
        let pool = ramp();
        assert_eq!(discover(&pool)?, discover(&pool)?);

        Ok(())
    }

    #[test]
    fn test_running_minimum() -> Result<(), InsufficientCandidatesError> {
        // Complementary variances for each pool color as base. The first and
        // last base yield near-identical variances; since only a strictly
        // smaller variance replaces the incumbent, the first base wins.
        const VARIANCES: [Float; 9] = [
            91.054719, 95.381947, 100.416506, 107.014715, 108.048785, 103.403068, 95.663888,
            91.126719, 91.054719,
        ];

        let pool: Vec<Candidate> = ramp().iter().map(Candidate::new).collect();
        let mut minimum = Float::INFINITY;

        for (base, expected) in pool.iter().zip(VARIANCES) {
            let template = PaletteTemplate::new(HarmonyPattern::Complementary, &base.color);
            let palette = match_template(&template, &pool)?;

            assert!((palette.variance() - expected).abs() < 1e-5);
            minimum = minimum.min(palette.variance());
        }

        assert!((minimum - 91.054719).abs() < 1e-5);

        Ok(())
    }

    #[test]
    fn test_insufficient_candidates() {
        // A single candidate cannot fill the three analogous targets.
        let single = [Color::from_24bit(0xff, 0xb9, 0x7a)];
        assert_eq!(
            discover(&single),
            Err(InsufficientCandidatesError {
                pattern: HarmonyPattern::Analogous,
                required: 3,
                available: 1,
            })
        );

        // Three candidates suffice for every pattern but the tetradic one.
        let triple = ramp()[..3].to_vec();
        assert_eq!(
            discover(&triple),
            Err(InsufficientCandidatesError {
                pattern: HarmonyPattern::Tetradic,
                required: 4,
                available: 3,
            })
        );

        // An empty pool fails for the very first pattern.
        assert_eq!(
            discover(&[]),
            Err(InsufficientCandidatesError {
                pattern: HarmonyPattern::Analogous,
                required: 3,
                available: 0,
            })
        );
    }

    #[test]
    fn test_duplicates_excluded_together() {
        // Duplicate pool colors are interchangeable, so picking one excludes
        // all of its copies. Four pool entries with one duplicated color
        // provide only three distinct colors.
        let pool = [
            Color::from_24bit(0xff, 0xb9, 0x7a),
            Color::from_24bit(0xff, 0xb9, 0x7a),
            Color::from_24bit(0xff, 0x50, 0x83),
            Color::from_24bit(0x33, 0x00, 0x6b),
        ];

        assert_eq!(
            discover(&pool),
            Err(InsufficientCandidatesError {
                pattern: HarmonyPattern::Tetradic,
                required: 4,
                available: 3,
            })
        );
    }
}
