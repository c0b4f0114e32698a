use tracing::trace;

use crate::core::{cusp, intersect, max_saturation as saturation_along};
use crate::{ColorModel, Float, Oklch};

/// The anchor of a line used for gamut clipping.
///
/// Clipping moves an out-of-gamut color along the line from the anchor
/// `(L0, 0)` on the gray axis to the color in the lightness/chroma plane for
/// the color's hue, stopping at the gamut boundary. The anchor determines how
/// much lightness the clip trades for chroma.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    /// Anchor at the cusp's lightness for the hue.
    HueDependent,
    /// Anchor at a lightness of 0.5 regardless of hue.
    HueIndependent,
    /// Anchor at the color's lightness, clamped to `0..=1`, so that the line
    /// is horizontal and the clip only reduces chroma.
    PreserveLightness,
    /// Anchor at the given lightness.
    Manual(Float),
}

/// A gamut boundary solver.
///
/// The solver is a configuration value for the numerical methods locating the
/// gamut boundary. `saturation_steps` is the number of Halley steps correcting
/// the polynomial estimate for the maximum saturation, and `max_refinements`
/// bounds the number of Halley steps refining an intersection with the curved
/// upper edge of the gamut. The free functions of the same names use
/// [`Solver::default`], which takes one saturation step and up to 64
/// refinements.
///
/// ```
/// # use okgamut::{Anchor, ColorModel, Solver};
/// let solver = Solver::default().with_saturation_steps(2);
/// let color = solver.find_gamut_intersection(0.9, 0.3, 140.0, Anchor::PreserveLightness);
/// assert!(color.is_in_gamut());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solver {
    saturation_steps: usize,
    max_refinements: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(1, 64)
    }
}

impl Solver {
    /// Create a new solver.
    pub const fn new(saturation_steps: usize, max_refinements: usize) -> Self {
        Self {
            saturation_steps,
            max_refinements,
        }
    }

    /// Update the number of saturation steps.
    #[must_use = "method returns a new solver and does not mutate original value"]
    pub const fn with_saturation_steps(self, saturation_steps: usize) -> Self {
        Self {
            saturation_steps,
            ..self
        }
    }

    /// Update the maximum number of refinements.
    #[must_use = "method returns a new solver and does not mutate original value"]
    pub const fn with_max_refinements(self, max_refinements: usize) -> Self {
        Self {
            max_refinements,
            ..self
        }
    }

    /// Get the number of saturation steps.
    pub const fn saturation_steps(&self) -> usize {
        self.saturation_steps
    }

    /// Get the maximum number of refinements.
    pub const fn max_refinements(&self) -> usize {
        self.max_refinements
    }

    /// Compute the maximum saturation `S = C/L` for the unit hue direction
    /// `(a, b)`.
    pub fn max_saturation(&self, a: Float, b: Float) -> Float {
        saturation_along(a, b, self.saturation_steps)
    }

    /// Find the cusp for the hue, i.e., the in-gamut color with maximum
    /// chroma.
    pub fn find_cusp(&self, hue: Float) -> Oklch {
        let [l, c] = cusp(hue, self.saturation_steps);
        Oklch::new(l, c, hue)
    }

    /// Find the cusp used for intersecting lines with the gamut boundary.
    ///
    /// Within one degree of 264°, the analytic cusp is too far off for the
    /// refinement to converge. This method substitutes the cusp of `#023BFB`
    /// for those hues. Only the intersection uses the substitute; the
    /// straight edges of the chroma maximum and lightness bounds run towards
    /// the analytic cusp of the actual hue.
    fn boundary_cusp(&self, hue: Float) -> [Float; 2] {
        if (hue - 264.0).abs() < 1.0 {
            trace!(hue, "substituting cusp of #023BFB");
            let blue = crate::Rgb::new(0x02, 0x3b, 0xfb).to_oklch();
            [blue.l(), blue.c()]
        } else {
            cusp(hue, self.saturation_steps)
        }
    }

    /// Find the intersection of the line from the anchor to `(l1, c1)` with
    /// the gamut boundary for the hue.
    ///
    /// The result is in gamut unless the anchor itself is out of gamut.
    pub fn find_gamut_intersection(
        &self,
        l1: Float,
        c1: Float,
        hue: Float,
        anchor: Anchor,
    ) -> Oklch {
        let cusp = self.boundary_cusp(hue);
        let l0 = match anchor {
            Anchor::HueDependent => cusp[0],
            Anchor::HueIndependent => 0.5,
            Anchor::PreserveLightness => l1.clamp(0.0, 1.0),
            Anchor::Manual(l0) => l0,
        };

        Oklch::from(intersect(l1, c1, hue, l0, cusp, self.max_refinements))
    }

    /// Find the intersection of the line from the anchor to the color with
    /// the gamut boundary.
    pub fn find_gamut_intersection_for<C: ColorModel + ?Sized>(
        &self,
        color: &C,
        anchor: Anchor,
    ) -> Oklch {
        let [l, c, h] = color.to_oklch().coordinates();
        self.find_gamut_intersection(l, c, h, anchor)
    }

    /// Find the maximum in-gamut chroma for the color's lightness and hue.
    ///
    /// Below the cusp, the result follows from the straight edge to black.
    /// Above the cusp, the triangle's edge to white yields an estimate, which
    /// is then intersected with the curved boundary. Colors with lightness
    /// outside `0..1` have no chroma.
    pub fn find_chroma_max(&self, color: &Oklch) -> Float {
        let [l, _, h] = color.coordinates();
        if l <= 0.0 || 1.0 <= l {
            return 0.0;
        }

        let [cusp_l, cusp_c] = cusp(h, self.saturation_steps);
        if l <= cusp_l {
            cusp_c * l / cusp_l
        } else {
            let estimate = cusp_c * (1.0 - l) / (1.0 - cusp_l);
            self.find_gamut_intersection(l, estimate, h, Anchor::PreserveLightness)
                .c()
        }
    }

    /// Find the lowest and highest lightness at which the color's chroma and
    /// hue are in gamut.
    ///
    /// The lower bound lies on the straight edge to black. The upper bound
    /// starts out on the triangle's edge to white and is then corrected along
    /// an almost horizontal line, anchored far below black.
    pub fn find_lightness_bounds(&self, color: &Oklch) -> (Float, Float) {
        let [_, c, h] = color.coordinates();
        let [cusp_l, cusp_c] = cusp(h, self.saturation_steps);
        let ratio = c / cusp_c;

        let lower = cusp_l * ratio;
        let upper = (1.0 - cusp_l).mul_add(-ratio, 1.0);
        let upper = self
            .find_gamut_intersection(upper, c, h, Anchor::Manual(-1000.0))
            .l();

        (lower, upper)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the maximum saturation for the unit hue direction `(a, b)` with
/// the default solver.
pub fn max_saturation(a: Float, b: Float) -> Float {
    Solver::default().max_saturation(a, b)
}

/// Find the cusp for the hue with the default solver.
///
/// ```
/// # use okgamut::{find_cusp, ColorModel};
/// let cusp = find_cusp(29.23);
/// let [r, g, b] = cusp.to_rgb().channels();
/// assert_eq!(r, 255);
/// assert!(g <= 1 && b <= 1);
/// ```
pub fn find_cusp(hue: Float) -> Oklch {
    Solver::default().find_cusp(hue)
}

/// Find the intersection of the line from the anchor to `(l1, c1)` with the
/// gamut boundary with the default solver.
pub fn find_gamut_intersection(l1: Float, c1: Float, hue: Float, anchor: Anchor) -> Oklch {
    Solver::default().find_gamut_intersection(l1, c1, hue, anchor)
}

/// Find the intersection of the line from the anchor to the color with the
/// gamut boundary with the default solver.
pub fn find_gamut_intersection_for<C: ColorModel + ?Sized>(color: &C, anchor: Anchor) -> Oklch {
    Solver::default().find_gamut_intersection_for(color, anchor)
}

/// Find the maximum in-gamut chroma with the default solver.
pub fn find_chroma_max(color: &Oklch) -> Float {
    Solver::default().find_chroma_max(color)
}

/// Find the lightness bounds with the default solver.
pub fn find_lightness_bounds(color: &Oklch) -> (Float, Float) {
    Solver::default().find_lightness_bounds(color)
}

// ====================================================================================================================
