use crate::Float;

/// Compute Delta-E for CIELCh coordinates.
///
/// This function computes the 1976 CIE color difference ΔE*ab, i.e., the
/// Euclidian distance in Lab, directly from the polar coordinates. The
/// lightness and chroma terms are plain differences; the hue term is the
/// chord 2·√(C₁·C₂)·sin(Δh/2) spanned by the two hue angles. Not-a-number
/// hues are treated as 0º, consistent with coordinate normalization.
#[allow(non_snake_case)]
pub(crate) fn delta_e_lch(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, C1, h1] = *coordinates1;
    let [L2, C2, h2] = *coordinates2;

    let h1 = if h1.is_nan() { 0.0 } else { h1 };
    let h2 = if h2.is_nan() { 0.0 } else { h2 };

    let ΔL = L1 - L2;
    let ΔC = C1 - C2;
    let ΔH = 2.0 * (C1 * C2).max(0.0).sqrt() * ((h1 - h2).to_radians() / 2.0).sin();

    (ΔL * ΔL + ΔC * ΔC + ΔH * ΔH).sqrt()
}

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color—or `None` if there are no candidates. Ties go to
/// the candidate encountered first.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

#[cfg(test)]
mod test {
    use super::{delta_e_lch, find_closest};
    use crate::Float;

    #[test]
    fn test_delta_e_lch() {
        // The metric is zero on the diagonal and symmetric.
        let c1 = [80.85476944559504, 47.25956445072016, 63.48856188825429];
        let c2 = [13.39869909980385, 63.80698839451728, 308.32749952036437];
        assert_eq!(delta_e_lch(&c1, &c1), 0.0);
        assert_eq!(delta_e_lch(&c1, &c2), delta_e_lch(&c2, &c1));
        assert!((delta_e_lch(&c1, &c2) - 115.84160442781864).abs() < 1e-9);

        // Without chroma, the hue is powerless and does not contribute.
        assert_eq!(delta_e_lch(&[50.0, 0.0, 10.0], &[40.0, 0.0, 250.0]), 10.0);

        // Same lightness and chroma, opposite hues: the chord is the
        // diameter 2·C.
        let d = delta_e_lch(&[50.0, 30.0, 90.0], &[50.0, 30.0, 270.0]);
        assert!((d - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_closest() {
        let candidates = [
            [50.0, 60.0, 0.0],
            [50.0, 60.0, 120.0],
            [50.0, 60.0, 240.0],
        ];

        let index = find_closest(&[50.0, 60.0, 110.0], &candidates, delta_e_lch);
        assert_eq!(index, Some(1));

        let empty: [[Float; 3]; 0] = [];
        assert_eq!(find_closest(&[50.0, 60.0, 110.0], &empty, delta_e_lch), None);
    }
}
