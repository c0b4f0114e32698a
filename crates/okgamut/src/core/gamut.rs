//! The geometry of the sRGB gamut in Oklch.
//!
//! For a fixed hue, the sRGB gamut's cross-section in the lightness/chroma
//! plane is roughly a triangle with corners at black, white, and the cusp,
//! i.e., the color with maximum chroma. The lower edge from black to the cusp
//! is exactly straight. The upper edge from the cusp to white is curved. The
//! functions in this module locate the cusp and intersect lines in the plane
//! with the triangle, refining the upper edge with Halley's method.
//!
//! <https://bottosson.github.io/posts/gamutclipping/>

use tracing::{debug, trace, warn};

use super::conversion::{dot, LMS_TO_LINEAR_SRGB, OKLAB_TO_LMS};
use super::{hue_direction, lerp, oklab_to_linear_rgb, oklab_to_rgb, oklch_to_oklab};
use crate::Float;

/// A polynomial fit for the maximum saturation along one linear RGB channel.
struct SaturationFit {
    /// The coefficients of `k0 + k1 a + k2 b + k3 a² + k4 ab`.
    k: [Float; 5],
    /// The channel's row index into the LMS to linear sRGB matrix.
    channel: usize,
}

const RED_FIT: SaturationFit = SaturationFit {
    k: [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
    channel: 0,
};

const GREEN_FIT: SaturationFit = SaturationFit {
    k: [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
    channel: 1,
};

const BLUE_FIT: SaturationFit = SaturationFit {
    k: [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
    channel: 2,
};

/// Select the fit for the channel that first drops below zero when
/// saturation increases along the given hue direction.
fn select_fit(a: Float, b: Float) -> &'static SaturationFit {
    if Float::mul_add(-1.88170328, a, -0.80936493 * b) > 1.0 {
        &RED_FIT
    } else if Float::mul_add(1.81444104, a, -1.19445276 * b) > 1.0 {
        &GREEN_FIT
    } else {
        &BLUE_FIT
    }
}

/// Project the hue direction onto the a/b columns of the Oklab to LMS′ matrix.
/// The result is the rate at which l′, m′, s′ change with chroma.
#[inline]
fn lms_direction(a: Float, b: Float) -> [Float; 3] {
    let row = |index: usize| OKLAB_TO_LMS[index][1].mul_add(a, OKLAB_TO_LMS[index][2] * b);
    [row(0), row(1), row(2)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the maximum saturation `S = C/L` for the hue direction `(a, b)`.
///
/// The direction must be a unit vector. The initial estimate is a polynomial
/// fit, which is corrected by the given number of Halley steps against the
/// exact cubic boundary condition. One step yields an error below 1e-6 except
/// for some blue hues.
pub(crate) fn max_saturation(a: Float, b: Float, steps: usize) -> Float {
    let fit = select_fit(a, b);
    let [k0, k1, k2, k3, k4] = fit.k;

    let mut saturation = k4.mul_add(
        a * b,
        k3.mul_add(a * a, k2.mul_add(b, k1.mul_add(a, k0))),
    );

    let [k_l, k_m, k_s] = lms_direction(a, b);
    let w = &LMS_TO_LINEAR_SRGB[fit.channel];

    for _ in 0..steps {
        let l_ = saturation.mul_add(k_l, 1.0);
        let m_ = saturation.mul_add(k_m, 1.0);
        let s_ = saturation.mul_add(k_s, 1.0);

        let lms = [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_];
        let lms_ds = [3.0 * k_l * l_ * l_, 3.0 * k_m * m_ * m_, 3.0 * k_s * s_ * s_];
        let lms_ds2 = [6.0 * k_l * k_l * l_, 6.0 * k_m * k_m * m_, 6.0 * k_s * k_s * s_];

        let f = dot(w, &lms);
        let f1 = dot(w, &lms_ds);
        let f2 = dot(w, &lms_ds2);

        saturation -= f * f1 / f1.mul_add(f1, -0.5 * f * f2);
    }

    saturation
}

/// Compute the cusp for the hue in degrees.
///
/// This function returns the lightness and chroma of the cusp. It scales the
/// maximally saturated color with lightness one so that its largest linear
/// RGB channel becomes one.
pub(crate) fn cusp(hue: Float, steps: usize) -> [Float; 2] {
    let [a, b] = hue_direction(hue);
    let saturation = max_saturation(a, b, steps);

    let [r, g, b_] = oklab_to_linear_rgb(&[1.0, saturation * a, saturation * b]);
    let lightness = (1.0 / r.max(g).max(b_)).cbrt();

    [lightness, lightness * saturation]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the Oklch coordinates are inside the sRGB gamut after
/// rounding to 24-bit RGB. Coordinates that are not finite are out of gamut.
pub(crate) fn in_gamut(lch: &[Float; 3]) -> bool {
    lch.iter().all(|c| c.is_finite())
        && oklab_to_rgb(&oklch_to_oklab(lch))
            .iter()
            .all(|c| (0..=255).contains(c))
}

/// Compute one Halley step for the channel with the given row of the LMS to
/// linear sRGB matrix. The step is infinite if it would move in the wrong
/// direction.
#[inline]
fn halley_step(
    row: &[Float; 3],
    lms: &[Float; 3],
    lms_dt: &[Float; 3],
    lms_dt2: &[Float; 3],
) -> Float {
    let excess = dot(row, lms) - 1.0;
    let d1 = dot(row, lms_dt);
    let d2 = dot(row, lms_dt2);

    let u = d1 / d1.mul_add(d1, -0.5 * excess * d2);
    if 0.0 <= u {
        -excess * u
    } else {
        Float::INFINITY
    }
}

/// The resolution of the binary search along a line, in units of `t`.
const EPSILON: Float = 1e-9;

/// A line in the lightness/chroma plane for a fixed hue, running from the
/// anchor `(l0, 0)` through `(l1, c1)`.
#[derive(Clone, Copy, Debug)]
struct Line {
    l0: Float,
    l1: Float,
    c1: Float,
    hue: Float,
}

impl Line {
    /// Get the Oklch coordinates for the parameter value.
    #[inline]
    fn at(&self, t: Float) -> [Float; 3] {
        [lerp(t, self.l0, self.l1), t * self.c1, self.hue]
    }

    /// Refine the parameter value for the upper half with Halley steps until
    /// the point is in gamut or the budget is exhausted.
    fn refine(&self, mut t: Float, max_refinements: usize) -> Float {
        let [a, b] = hue_direction(self.hue);
        let [k_l, k_m, k_s] = lms_direction(a, b);
        let dl = self.l1 - self.l0;
        let c1 = self.c1;
        let lms_dt = [c1.mul_add(k_l, dl), c1.mul_add(k_m, dl), c1.mul_add(k_s, dl)];

        let mut refinements = 0;
        while !in_gamut(&self.at(t)) {
            if refinements == max_refinements {
                warn!(line = ?self, t, "gamut intersection did not converge");
                break;
            }
            refinements += 1;

            let lightness = lerp(t, self.l0, self.l1);
            let chroma = t * c1;

            let l_ = chroma.mul_add(k_l, lightness);
            let m_ = chroma.mul_add(k_m, lightness);
            let s_ = chroma.mul_add(k_s, lightness);

            let lms = [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_];
            let lms_d1 = [
                3.0 * lms_dt[0] * l_ * l_,
                3.0 * lms_dt[1] * m_ * m_,
                3.0 * lms_dt[2] * s_ * s_,
            ];
            let lms_d2 = [
                6.0 * lms_dt[0] * lms_dt[0] * l_,
                6.0 * lms_dt[1] * lms_dt[1] * m_,
                6.0 * lms_dt[2] * lms_dt[2] * s_,
            ];

            let step = LMS_TO_LINEAR_SRGB
                .iter()
                .map(|row| halley_step(row, &lms, &lms_d1, &lms_d2))
                .fold(Float::INFINITY, Float::min);

            if !step.is_finite() {
                warn!(line = ?self, t, "gamut intersection has no valid step");
                break;
            }

            t += step;
            trace!(refinements, t, "refined gamut intersection");
        }

        t
    }

    /// Binary search for the largest in-gamut parameter value in `0..=t`. The
    /// anchor must be in gamut. A parameter value that is not finite yields
    /// the anchor.
    fn bisect(&self, t: Float) -> Float {
        let mut min = 0.0;
        let mut max = if t.is_finite() { t } else { 0.0 };

        while EPSILON < max - min {
            let middle = (min + max) / 2.0;
            if in_gamut(&self.at(middle)) {
                min = middle;
            } else {
                max = middle;
            }
        }

        min
    }
}

/// Find the intersection of a line with the gamut boundary.
///
/// The line runs from `(l0, 0)` to `(l1, c1)` in the lightness/chroma plane
/// for the given hue. It is parameterized as `L = l0 (1 − t) + t l1` and
/// `C = t c1`. The given cusp determines the triangle approximation. Below the
/// cusp, the closed-form solution is exact. Above the cusp, this function
/// refines the triangle intersection with at most `max_refinements` Halley
/// steps until the candidate is in gamut.
///
/// If the result still is out of gamut, e.g., because the cusp is off for
/// the hue or rounding pushes a channel below zero, and the anchor is in
/// gamut, this function falls back on binary search along the line.
///
/// This function returns Oklch coordinates.
pub(crate) fn intersect(
    l1: Float,
    c1: Float,
    hue: Float,
    l0: Float,
    cusp: [Float; 2],
    max_refinements: usize,
) -> [Float; 3] {
    let [cusp_l, cusp_c] = cusp;
    let line = Line { l0, l1, c1, hue };

    let t = if (l1 - l0).mul_add(cusp_c, -((cusp_l - l0) * c1)) <= 0.0 {
        // Lower half: The edge to black is straight.
        cusp_c * l0 / c1.mul_add(cusp_l, cusp_c * (l0 - l1))
    } else {
        // Upper half: Start with the triangle's edge to white.
        let t = cusp_c * (l0 - 1.0) / c1.mul_add(cusp_l - 1.0, cusp_c * (l0 - l1));
        line.refine(t, max_refinements)
    };

    let candidate = line.at(t);
    if in_gamut(&candidate) || !in_gamut(&line.at(0.0)) {
        return candidate;
    }

    debug!(?line, t, "searching for gamut intersection");
    line.at(line.bisect(t))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{cusp, in_gamut, intersect, max_saturation};
    use crate::assert_close_enough;
    use crate::core::{hue_direction, oklab_to_oklch, oklab_to_rgb, oklch_to_oklab, rgb_to_oklab};

    #[test]
    fn test_cusp_is_on_boundary() {
        for degree in 0..360 {
            let hue = degree as f64;
            if (hue - 264.0).abs() < 1.0 {
                continue;
            }

            let [l, c] = cusp(hue, 1);
            let rgb = oklab_to_rgb(&oklch_to_oklab(&[l, c, hue]));
            let max = rgb.iter().copied().max();
            let min = rgb.iter().copied().min();

            assert_eq!(max, Some(255), "cusp {:?} for hue {}", rgb, hue);
            assert!(
                min.is_some_and(|min| -1 <= min),
                "cusp {:?} for hue {}",
                rgb,
                hue
            );
        }
    }

    #[test]
    fn test_cusp_of_red() {
        let [l, c] = cusp(29.2339, 1);
        let rgb = oklab_to_rgb(&oklch_to_oklab(&[l, c, 29.2339]));
        assert_eq!(rgb[0], 255);
        assert!(rgb[1] <= 1 && rgb[2] <= 1, "cusp of red is {:?}", rgb);
        assert!((l - 0.628).abs() < 1e-3, "cusp lightness of red is {}", l);
    }

    #[test]
    fn test_more_steps_do_not_hurt() {
        for degree in (0..360).step_by(15) {
            let [a, b] = hue_direction(degree as f64);
            let once = max_saturation(a, b, 1);
            let thrice = max_saturation(a, b, 3);
            assert!(
                (once - thrice).abs() < 2e-3,
                "saturation for hue {} is {} vs {}",
                degree,
                once,
                thrice
            );
        }
    }

    #[test]
    fn test_lower_half_is_exact() {
        let cusp30 = cusp(30.0, 1);
        let [l, c, h] = intersect(0.5, 10.0, 30.0, 0.5, cusp30, 64);
        assert_close_enough!(l, 0.5);
        assert_eq!(h, 30.0);
        assert!(0.0 < c && c < cusp30[1], "clipped chroma {}", c);
        assert!(in_gamut(&[l, c, h]));
    }

    #[test]
    fn test_upper_half_converges() {
        for degree in (0..360).step_by(5) {
            let hue = degree as f64;
            let cusp_h = cusp(hue, 1);
            let lch = intersect(0.95, 0.4, hue, 0.95, cusp_h, 64);
            assert!(in_gamut(&lch), "{:?} is out of gamut", lch);
            assert!(0.0 <= lch[1] && lch[1] < 0.4, "{:?} has odd chroma", lch);
        }
    }

    #[test]
    fn test_lower_half_falls_back_on_search() {
        // Rounding pushes green below zero on the straight edge near red.
        let hue = 29.206481674246056;
        let l = 0.6108963866144682;
        let lch = intersect(l, 0.46617672505639085, hue, l, cusp(hue, 1), 64);
        assert!(in_gamut(&lch), "{:?} is out of gamut", lch);
        assert_close_enough!(lch[0], l);
        assert!(0.24 < lch[1], "{:?} has too little chroma", lch);
    }

    #[test]
    fn test_blue_band_falls_back_on_search() {
        let [l, c, _] = oklab_to_oklch(&rgb_to_oklab(&[2, 59, 251]));
        for hue in [263.1, 263.45, 264.0, 264.5, 264.9] {
            let lch = intersect(0.4927, 0.387, hue, 0.5, [l, c], 64);
            assert!(in_gamut(&lch), "{:?} is out of gamut", lch);
        }
    }

    #[test]
    fn test_degenerate_line() {
        let lch = intersect(1.0, 0.0, 120.0, 1.0, cusp(120.0, 1), 64);
        assert!(in_gamut(&lch), "{:?} is out of gamut", lch);
        assert_close_enough!(lch[0], 1.0);
        assert_close_enough!(lch[1], 0.0);
    }
}
