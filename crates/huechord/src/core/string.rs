use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It
/// transparently handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

const COLOR_SPACES: [(&str, ColorSpace); 4] = [
    ("srgb", ColorSpace::Srgb),
    ("--linear-srgb", ColorSpace::LinearSrgb),
    ("xyz-d65", ColorSpace::Xyz),
    ("xyz-d50", ColorSpace::XyzD50),
];

/// Parse a subset of valid CSS color formats. This function recognizes only
/// the `lab()`, `lch()`, and `color()` functions. The color space for the
/// latter must be `srgb`, `xyz-d65`, `xyz-d50`, or the non-standard
/// `--linear-srgb`. Coordinates must not have units including `%`; the
/// keyword `none` denotes a missing coordinate.
fn parse_css(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    use ColorSpace::*;

    // Munge CSS function name
    let (space, rest) = s
        .strip_prefix("lab")
        .map(|r| (Some(Lab), r))
        .or_else(|| s.strip_prefix("lch").map(|r| (Some(Lch), r)))
        .or_else(|| s.strip_prefix("color").map(|r| (None, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let rest = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    let (space, body) = if let Some(s) = space {
        (s, rest) // Pass through
    } else {
        // Munge color space
        let rest = rest.trim_start();
        COLOR_SPACES
            .iter()
            .filter_map(|(p, s)| rest.strip_prefix(p).map(|r| (*s, r)))
            .next() // Take first (and only) result
            .ok_or(ColorFormatError::UnknownColorSpace)?
    };

    #[inline]
    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingCoordinate).and_then(|t| {
            if t == "none" {
                Ok(Float::NAN)
            } else {
                t.parse().map_err(|_| ColorFormatError::MalformedFloat)
            }
        })
    }

    let mut iter = body.split_whitespace();
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok((space, [c1, c2, c3]))
}

/// Parse the given string as a color in hashed hexadecimal or CSS format.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let s = s.trim();
    if s.starts_with('#') {
        let [c1, c2, c3] = parse_hashed(s)?;
        Ok((
            ColorSpace::Srgb,
            [
                c1 as Float / 255.0,
                c2 as Float / 255.0,
                c3 as Float / 255.0,
            ],
        ))
    } else {
        parse_css(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The CSS serialization prefix for the given color space.
fn css_prefix(space: ColorSpace) -> &'static str {
    use ColorSpace::*;

    match space {
        Srgb => "color(srgb ",
        LinearSrgb => "color(--linear-srgb ",
        Xyz => "color(xyz-d65 ",
        XyzD50 => "color(xyz-d50 ",
        Lab => "lab(",
        Lch => "lch(",
    }
}

/// Format the color coordinates in CSS notation.
///
/// This function respects the formatter's precision, defaulting to 5 digits
/// past the decimal. Since degrees for LCh hues are up to two orders of
/// magnitude larger than other coordinates, it uses a precision smaller by 2
/// for degrees.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_fmt(format_args!("{}", css_prefix(space)))?;

    let mut factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if space.is_polar() && index == 2 {
            factor /= 100.0;
        }

        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            // CSS mandates NO trailing zeros whatsoever. But formatting
            // floats with a precision produces trailing zeros. Rounding
            // avoids them, for the most part. If fractional part is zero,
            // we do need an explicit precision---of zero!
            let c = (coordinate * factor).round() / factor;
            if c == c.trunc() {
                f.write_fmt(format_args!("{:.0}", c))?;
            } else {
                f.write_fmt(format_args!("{}", c))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_css, parse_hashed, ColorFormatError};
    use crate::ColorSpace::*;
    use crate::Float;

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#FFB97A")?, [0xff_u8, 0xb9, 0x7a]);
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_parse_css() -> Result<(), ColorFormatError> {
        assert_eq!(parse_css("lch(50 40 120)")?, (Lch, [50.0, 40.0, 120.0]));
        assert_eq!(parse_css("lab(50 -20 30.5)")?, (Lab, [50.0, -20.0, 30.5]));
        assert_eq!(
            parse_css("color(srgb 1 0.5 0)")?,
            (Srgb, [1.0, 0.5, 0.0])
        );
        assert_eq!(
            parse_css("color(xyz-d50 0.3 0.2 0.1)")?,
            (XyzD50, [0.3, 0.2, 0.1])
        );

        let (space, [l, c, h]) = parse_css("lch(100 0 none)")?;
        assert_eq!(space, Lch);
        assert_eq!(l, 100.0);
        assert_eq!(c, 0.0);
        assert!(h.is_nan());

        assert_eq!(
            parse_css("lch 50 40 120)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            parse_css("lch(50 40 120"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_css("color(hsl 50 40 120)"),
            Err(ColorFormatError::UnknownColorSpace)
        );
        assert_eq!(
            parse_css("lch(50 40)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_css("lch(50 40 120 1)"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(
            parse_css("lch(50 forty 120)"),
            Err(ColorFormatError::MalformedFloat)
        );

        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(
            parse("#33006b")?,
            (Srgb, [0.2 as Float, 0.0, 0.4196078431372549 as Float])
        );
        assert_eq!(parse("  lch(50 40 120)  ")?, (Lch, [50.0, 40.0, 120.0]));
        assert_eq!(parse("whatever"), Err(ColorFormatError::UnknownFormat));

        Ok(())
    }
}
