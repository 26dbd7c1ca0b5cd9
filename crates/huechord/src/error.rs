//! Utility module with huechord's errors.

use crate::harmony::HarmonyPattern;

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `lab(`, or `lch(`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `color srgb 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `lch(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is using an unknown color space. For example,
    /// `color(unknown 1 1 1)` uses an unknown color space.
    UnknownColorSpace,

    /// A color format that is missing a coordinate. For example, `lch(50 40)`
    /// is missing the third coordinate.
    MissingCoordinate,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `color(srgb 1.0 0..1 0.0)` has a malformed
    /// second coordinate.
    MalformedFloat,

    /// A color format with more than three coordinates. For example,
    /// `lch(1 2 3 4)` has one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should start with `#`, `color()`, `lab()`, or `lch()`")
            }
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => {
                f.write_str("color format should have known color space but does not")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            TooManyCoordinates => f.write_str("color format should have 3 coordinates but has more"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An error indicating that a candidate pool is too small.
///
/// Greedy palette matching consumes one candidate color per target and never
/// reuses a candidate. Hence a pool must have at least as many colors as the
/// largest harmony pattern has targets. This error records the pattern whose
/// targets could not all be filled, the number of colors that pattern
/// requires, and the number of colors the pool actually provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsufficientCandidatesError {
    pub pattern: HarmonyPattern,
    pub required: usize,
    pub available: usize,
}

impl std::fmt::Display for InsufficientCandidatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} palette requires {} distinct candidate colors but only {} are available",
            self.pattern, self.required, self.available
        ))
    }
}

impl std::error::Error for InsufficientCandidatesError {}
