use super::{normalize, normalize_hue, ColorSpace};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function converts the color coordinates to 24-bit representation. It
/// assumes that the color is an in-gamut RGB color, i.e., that its
/// coordinates range `0..=1`. Even if that is not the case, the conversion
/// automatically clamps coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = normalize(space, coordinates);
    [
        (r * 255.0).round().clamp(0.0, 255.0) as u8,
        (g * 255.0).round().clamp(0.0, 255.0) as u8,
        (b * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other,
/// producing a new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0] * vector[0] + row1[1] * vector[1] + row1[2] * vector[2],
        row2[0] * vector[0] + row2[1] * vector[1] + row2[2] * vector[2],
        row3[0] * vector[0] + row3[1] * vector[1] + row3[2] * vector[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            (magnitude.powf(1.0 / 2.4) * 1.055 - 0.055).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct
/// conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/xyz-d50.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: [[Float; 3]; 3] = [
    [  1.0479297925449969,   0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,  0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504, 0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: [[Float; 3]; 3] = [
    [  0.955473421488075,    -0.02309845494876471,  0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,   0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964, 1.330365926242124    ],
];

/// Convert XYZ D65 to XYZ D50 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
fn d65_to_d50(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D65_TO_D50, value)
}

/// Convert XYZ D50 to XYZ D65 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
fn d50_to_d65(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D50_TO_D65, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/lab.js

/// The D50 white point, as used by CIELAB.
#[allow(clippy::excessive_precision)]
const D50_WHITE: [Float; 3] = [
    0.3457 / 0.3585,
    1.0,
    (1.0 - 0.3457 - 0.3585) / 0.3585,
];

const EPSILON: Float = 216.0 / 24389.0;
const KAPPA: Float = 24389.0 / 27.0;

/// Convert coordinates for XYZ D50 to CIELAB. This is a one-hop, direct
/// conversion.
fn xyz_d50_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            (KAPPA * t + 16.0) / 116.0
        }
    }

    let f0 = f(value[0] / D50_WHITE[0]);
    let f1 = f(value[1] / D50_WHITE[1]);
    let f2 = f(value[2] / D50_WHITE[2]);

    [116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2)]
}

/// Convert coordinates for CIELAB to XYZ D50. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn lab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f_inverse(t: Float) -> Float {
        let t3 = t * t * t;
        if t3 > EPSILON {
            t3
        } else {
            (116.0 * t - 16.0) / KAPPA
        }
    }

    let [L, a, b] = *value;
    let f1 = (L + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let x = f_inverse(f0);
    let y = if L > KAPPA * EPSILON {
        let t = (L + 16.0) / 116.0;
        t * t * t
    } else {
        L / KAPPA
    };
    let z = f_inverse(f2);

    [x * D50_WHITE[0], y * D50_WHITE[1], z * D50_WHITE[2]]
}

// --------------------------------------------------------------------------------------------------------------------

/// The chroma below which a color counts as achromatic and hence has a
/// powerless, not-a-number hue.
const ACHROMATIC_CHROMA: Float = 0.0002;

/// Convert coordinates for LCh to Lab. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;

    if h.is_nan() {
        [L, 0.0, 0.0]
    } else {
        let hue_radian = h.to_radians();
        [L, C * hue_radian.cos(), C * hue_radian.sin()]
    }
}

/// Convert coordinates for Lab to LCh. This is a one-hop, direct conversion.
/// Colors with (near) zero colorness are achromatic and get a not-a-number
/// hue.
#[allow(non_snake_case)]
pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    if a.abs() < ACHROMATIC_CHROMA && b.abs() < ACHROMATIC_CHROMA {
        return [L, 0.0, Float::NAN];
    }

    let C = a.hypot(b);
    let h = normalize_hue(b.atan2(a).to_degrees());

    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from the one color space to the other.
///
/// This function normalizes the coordinates before conversion. All
/// conversions between unrelated color spaces route through the root XYZ
/// D65; conversions within the RGB and Lab branches take the direct hops.
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return srgb_to_linear_srgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_srgb_to_srgb(&coordinates),
        (Lch, Lab) => return lch_to_lab(&coordinates),
        (Lab, Lch) => return lab_to_lch(&coordinates),
        (XyzD50, Lab) => return xyz_d50_to_lab(&coordinates),
        (Lab, XyzD50) => return lab_to_xyz_d50(&coordinates),
        (XyzD50, Lch) => return lab_to_lch(&xyz_d50_to_lab(&coordinates)),
        (Lch, XyzD50) => return lab_to_xyz_d50(&lch_to_lab(&coordinates)),
        _ => (),
    };

    // 3a. Convert from source color space to root XYZ
    let intermediate = match from_space {
        Srgb => linear_srgb_to_xyz(&srgb_to_linear_srgb(&coordinates)),
        LinearSrgb => linear_srgb_to_xyz(&coordinates),
        Xyz => coordinates,
        XyzD50 => d50_to_d65(&coordinates),
        Lab => d50_to_d65(&lab_to_xyz_d50(&coordinates)),
        Lch => d50_to_d65(&lab_to_xyz_d50(&lch_to_lab(&coordinates))),
    };

    // 3b. Convert from root XYZ to target color space on different branch
    match to_space {
        Srgb => linear_srgb_to_srgb(&xyz_to_linear_srgb(&intermediate)),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Xyz => intermediate,
        XyzD50 => d65_to_d50(&intermediate),
        Lab => xyz_d50_to_lab(&d65_to_d50(&intermediate)),
        Lch => lab_to_lch(&xyz_d50_to_lab(&d65_to_d50(&intermediate))),
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::{convert, from_24bit, to_24bit};
    use crate::core::{assert_same_coordinates, ColorSpace::*};
    use crate::Float;

    struct Representations {
        srgb: [Float; 3],
        linear_srgb: [Float; 3],
        xyz: [Float; 3],
        xyz_d50: [Float; 3],
        lab: [Float; 3],
        lch: [Float; 3],
    }

    const APRICOT: Representations = Representations {
        // #ffb97a
        srgb: [1.0, 0.7254901960784313, 0.47843137254901963],
        linear_srgb: [1.0, 0.4851499400560704, 0.1946178304415758],
        xyz: [0.6209975995581875, 0.5736529592957261, 0.2621486642237417],
        xyz_d50: [0.6507675903410644, 0.5820885644044033, 0.1999993876378334],
        lab: [80.85476944559504, 21.09555719357853, 42.28999762076406],
        lch: [80.85476944559504, 47.25956445072016, 63.48856188825429],
    };

    const VIOLET: Representations = Representations {
        // #33006b
        srgb: [0.2, 0.0, 0.4196078431372549],
        linear_srgb: [0.033104766570885055, 0.0, 0.14702726649759498],
        xyz: [0.04018769811973284, 0.01765360344286242, 0.14039408630454714],
        xyz_d50: [0.035472283742100603, 0.016278349621615826, 0.10545302461011923],
        lab: [13.39869909980385, 39.57026241260536, -50.055230501672995],
        lch: [13.39869909980385, 63.80698839451728, 308.32749952036437],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        srgb: [1.0, 1.0, 1.0],
        linear_srgb: [1.0, 1.0, 1.0],
        xyz: [0.9504559270516717, 1.0, 1.0890577507598784],
        xyz_d50: [0.9642956764295678, 1.0, 0.8251046025104604],
        lab: [100.0, 0.0, 0.0],
        lch: [100.0, 0.0, Float::NAN],
    };

    #[test]
    fn test_conversions() {
        for color in [&APRICOT, &VIOLET, &WHITE] {
            // Forward, hop by hop.
            assert_same_coordinates!(
                LinearSrgb,
                &convert(Srgb, LinearSrgb, &color.srgb),
                &color.linear_srgb,
            );
            assert_same_coordinates!(Xyz, &convert(LinearSrgb, Xyz, &color.linear_srgb), &color.xyz);
            assert_same_coordinates!(XyzD50, &convert(Xyz, XyzD50, &color.xyz), &color.xyz_d50);
            assert_same_coordinates!(Lab, &convert(XyzD50, Lab, &color.xyz_d50), &color.lab);
            assert_same_coordinates!(Lch, &convert(Lab, Lch, &color.lab), &color.lch);

            // The long way in one step and back again.
            assert_same_coordinates!(Lch, &convert(Srgb, Lch, &color.srgb), &color.lch);
            assert_same_coordinates!(Srgb, &convert(Lch, Srgb, &color.lch), &color.srgb);
        }
    }

    #[test]
    fn test_24bit() {
        assert_eq!(from_24bit(0xff, 0xb9, 0x7a), APRICOT.srgb);
        assert_eq!(to_24bit(Srgb, &APRICOT.srgb), [0xff, 0xb9, 0x7a]);
        assert_eq!(to_24bit(Srgb, &VIOLET.srgb), [0x33, 0x00, 0x6b]);
        assert_eq!(to_24bit(Srgb, &[-0.2, 0.5, 1.7]), [0x00, 0x80, 0xff]);
    }
}
