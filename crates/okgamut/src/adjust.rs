//! Gamut-aware color manipulation.
//!
//! The functions in this module change a color's chroma or lightness,
//! interpolate between two colors, and clip out-of-gamut colors. They all
//! operate in Oklch and use the gamut boundary [`Solver`] to stay inside the
//! sRGB gamut.
//!
//! Chroma and lightness adjustments take a factor `t` and an
//! [`AdjustMethod`]. A relative adjustment interpolates from the color's
//! current value towards the extremum, with negative `t` moving towards the
//! opposite extremum, and hence accepts `-1..=1`. An absolute adjustment
//! interpolates between the two extrema, ignoring the current value, and
//! accepts `0..=1`. Either adjustment clips a result that rounding pushed out
//! of gamut while preserving lightness.

use tracing::debug;

use crate::core::{lerp, oklab_to_oklch, prepare_hue_interpolation};
use crate::error::{AdjustError, UnknownMethodError};
use crate::{Anchor, Color, ColorModel, Float, HuePath, Oklch, Solver};

/// The method for adjusting chroma or lightness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdjustMethod {
    /// Interpolate between the current value and an extremum.
    #[default]
    Relative,
    /// Interpolate between the two extrema.
    Absolute,
}

impl AdjustMethod {
    /// The names of all adjustment methods.
    pub const NAMES: &'static [&'static str] = &["relative", "absolute"];

    /// Get this method's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }

    /// Get the range of valid factors for this method.
    pub const fn range(&self) -> std::ops::RangeInclusive<Float> {
        match *self {
            Self::Relative => -1.0..=1.0,
            Self::Absolute => 0.0..=1.0,
        }
    }

    /// Ensure that the factor is valid for this method.
    fn check(&self, t: Float) -> Result<(), AdjustError> {
        let expected = self.range();
        if expected.contains(&t) {
            Ok(())
        } else {
            Err(AdjustError::FactorOutOfRange {
                factor: t,
                expected,
                method: self.name(),
            })
        }
    }
}

impl std::str::FromStr for AdjustMethod {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            _ => Err(UnknownMethodError::new(s, Self::NAMES)),
        }
    }
}

impl std::fmt::Display for AdjustMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The target of a chroma adjustment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ChromaTarget {
    /// Adjust the chroma of the given color.
    Color(Color),
    /// Adjust the chroma for the given hue and lightness. Since there is no
    /// current chroma, this target requires [`AdjustMethod::Absolute`].
    Hue { hue: Float, lightness: Float },
}

impl ChromaTarget {
    fn resolve(&self, method: AdjustMethod) -> Result<Oklch, AdjustError> {
        match *self {
            Self::Color(color) => Ok(color.to_oklch()),
            Self::Hue { hue, lightness } => {
                if method != AdjustMethod::Absolute {
                    return Err(AdjustError::HueRequiresAbsolute);
                }
                Ok(Oklch::new(lightness, 0.0, hue))
            }
        }
    }
}

/// The target of a lightness adjustment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightnessTarget {
    /// Adjust the lightness of the given color.
    Color(Color),
    /// Adjust the lightness for the given hue and chroma. Since there is no
    /// current lightness, this target requires [`AdjustMethod::Absolute`].
    Hue { hue: Float, chroma: Float },
}

impl LightnessTarget {
    fn resolve(&self, method: AdjustMethod) -> Result<Oklch, AdjustError> {
        match *self {
            Self::Color(color) => Ok(color.to_oklch()),
            Self::Hue { hue, chroma } => {
                if method != AdjustMethod::Absolute {
                    return Err(AdjustError::HueRequiresAbsolute);
                }
                Ok(Oklch::new(0.5, chroma, hue))
            }
        }
    }
}

/// Implement `From` for the targets for all color representations.
macro_rules! from_color {
    ($($target:ident),+) => {
        $(
            impl From<Color> for $target {
                fn from(value: Color) -> Self {
                    Self::Color(value)
                }
            }

            impl From<crate::Rgb> for $target {
                fn from(value: crate::Rgb) -> Self {
                    Self::Color(value.into())
                }
            }

            impl From<crate::Hex> for $target {
                fn from(value: crate::Hex) -> Self {
                    Self::Color(value.into())
                }
            }

            impl From<crate::Oklab> for $target {
                fn from(value: crate::Oklab) -> Self {
                    Self::Color(value.into())
                }
            }

            impl From<Oklch> for $target {
                fn from(value: Oklch) -> Self {
                    Self::Color(value.into())
                }
            }
        )+
    };
}

from_color!(ChromaTarget, LightnessTarget);

/// Clip the result of an adjustment if it is out of gamut.
fn settle(color: Oklch, operation: &'static str) -> Oklch {
    if color.is_in_gamut() {
        color
    } else {
        debug!(%color, operation, "clipping out-of-gamut result");
        Solver::default().find_gamut_intersection_for(&color, Anchor::PreserveLightness)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Adjust the chroma.
///
/// With [`AdjustMethod::Relative`], a positive factor interpolates between
/// the current chroma and the maximum in-gamut chroma for the lightness and
/// hue, whereas a negative factor interpolates towards zero chroma. With
/// [`AdjustMethod::Absolute`], the factor interpolates between zero and the
/// maximum chroma.
///
/// ```
/// # use okgamut::{ColorModel, Hex};
/// # use okgamut::adjust::{chromatize, AdjustMethod, ChromaTarget};
/// # use okgamut::error::AdjustError;
/// # fn main() -> Result<(), AdjustError> {
/// let gray = Hex::new(0x80, 0x80, 0x80);
/// let colorful = chromatize(1.0, &gray.into(), AdjustMethod::Absolute)?;
///
/// assert!(colorful.is_in_gamut());
/// assert!(0.2 < colorful.c());
///
/// let error = chromatize(1.0, &ChromaTarget::Hue { hue: 30.0, lightness: 0.5 },
///     AdjustMethod::Relative);
/// assert_eq!(error, Err(AdjustError::HueRequiresAbsolute));
/// # Ok(())
/// # }
/// ```
pub fn chromatize(
    t: Float,
    target: &ChromaTarget,
    method: AdjustMethod,
) -> Result<Oklch, AdjustError> {
    method.check(t)?;
    let color = target.resolve(method)?;
    let [l, c, h] = color.coordinates();
    let max = Solver::default().find_chroma_max(&color);

    let chroma = match method {
        AdjustMethod::Relative if 0.0 <= t => lerp(t, c, max),
        AdjustMethod::Relative => lerp(-t, c, 0.0),
        AdjustMethod::Absolute => lerp(t, 0.0, max),
    };

    Ok(settle(Oklch::new(l, chroma, h), "chromatize"))
}

/// Adjust the chroma in the opposite direction of [`chromatize`].
///
/// A relative dechromatization by `t` is a chromatization by `-t`, and an
/// absolute dechromatization by `t` is a chromatization by `1 - t`.
pub fn dechromatize(
    t: Float,
    target: &ChromaTarget,
    method: AdjustMethod,
) -> Result<Oklch, AdjustError> {
    method.check(t)?;
    match method {
        AdjustMethod::Relative => chromatize(-t, target, method),
        AdjustMethod::Absolute => chromatize(1.0 - t, target, method),
    }
}

/// Increase the tone, which is the same as [`chromatize`].
pub fn detone(t: Float, target: &ChromaTarget, method: AdjustMethod) -> Result<Oklch, AdjustError> {
    chromatize(t, target, method)
}

/// Decrease the tone, which is the same as [`dechromatize`].
pub fn tone(t: Float, target: &ChromaTarget, method: AdjustMethod) -> Result<Oklch, AdjustError> {
    dechromatize(t, target, method)
}

/// Adjust the lightness.
///
/// With [`AdjustMethod::Relative`], a positive factor interpolates between
/// the current lightness and the highest in-gamut lightness for the chroma
/// and hue, whereas a negative factor interpolates towards the lowest such
/// lightness. With [`AdjustMethod::Absolute`], the factor interpolates
/// between the lowest and highest lightness.
pub fn lighten(
    t: Float,
    target: &LightnessTarget,
    method: AdjustMethod,
) -> Result<Oklch, AdjustError> {
    method.check(t)?;
    let color = target.resolve(method)?;
    let [l, c, h] = color.coordinates();
    let (lower, upper) = Solver::default().find_lightness_bounds(&color);

    let lightness = match method {
        AdjustMethod::Relative if 0.0 <= t => lerp(t, l, upper),
        AdjustMethod::Relative => lerp(-t, l, lower),
        AdjustMethod::Absolute => lerp(t, lower, upper),
    };

    Ok(settle(Oklch::new(lightness, c, h), "lighten"))
}

/// Adjust the lightness in the opposite direction of [`lighten`].
pub fn darken(
    t: Float,
    target: &LightnessTarget,
    method: AdjustMethod,
) -> Result<Oklch, AdjustError> {
    method.check(t)?;
    match method {
        AdjustMethod::Relative => lighten(-t, target, method),
        AdjustMethod::Absolute => lighten(1.0 - t, target, method),
    }
}

/// Interpolate between two colors.
///
/// This function interpolates lightness and chroma linearly. The hue follows
/// the given path, except for [`HuePath::Oklab`], which interpolates a and b
/// instead. An out-of-gamut result is clipped while preserving lightness.
///
/// ```
/// # use okgamut::{adjust::interpolate, ColorModel, Hex, HuePath};
/// let red = Hex::new(0xff, 0, 0);
/// let blue = Hex::new(0, 0, 0xff);
///
/// // The shortest path from red to blue passes through purple, not green.
/// let purple = interpolate(0.5, &red, &blue, HuePath::Shortest);
/// assert!(270.0 < purple.h() && purple.h() < 360.0);
/// assert!(purple.is_in_gamut());
/// ```
pub fn interpolate<C1, C2>(t: Float, color1: &C1, color2: &C2, path: HuePath) -> Oklch
where
    C1: ColorModel + ?Sized,
    C2: ColorModel + ?Sized,
{
    let [l1, c1, h1] = color1.to_oklch().coordinates();
    let [l2, c2, h2] = color2.to_oklch().coordinates();
    let l = lerp(t, l1, l2);

    let color = if path == HuePath::Oklab {
        let [_, a1, b1] = color1.to_oklab().coordinates();
        let [_, a2, b2] = color2.to_oklab().coordinates();
        Oklch::from(oklab_to_oklch(&[l, lerp(t, a1, a2), lerp(t, b1, b2)]))
    } else {
        let [h1, h2] = prepare_hue_interpolation(path, h1, h2);
        Oklch::new(l, lerp(t, c1, c2), lerp(t, h1, h2))
    };

    settle(color, "interpolate")
}

// --------------------------------------------------------------------------------------------------------------------

fn clip<C: ColorModel + ?Sized>(color: &C, anchor: Anchor) -> Color {
    if color.is_in_gamut() {
        color.to_color()
    } else {
        Color::Oklch(Solver::default().find_gamut_intersection_for(color, anchor))
    }
}

/// Clip the color to the gamut, moving towards the cusp's lightness.
///
/// An in-gamut color is returned unchanged. Otherwise, the result is an Oklch
/// color.
pub fn gamut_clip_hue_dependent<C: ColorModel + ?Sized>(color: &C) -> Color {
    clip(color, Anchor::HueDependent)
}

/// Clip the color to the gamut, moving towards a lightness of 0.5.
///
/// An in-gamut color is returned unchanged. Otherwise, the result is an Oklch
/// color. The anchor does not depend on the hue, which sets this clip apart
/// from the `oklch` Python tools, whose clip of the same name anchors at the
/// cusp like [`gamut_clip_hue_dependent`].
pub fn gamut_clip_hue_independent<C: ColorModel + ?Sized>(color: &C) -> Color {
    clip(color, Anchor::HueIndependent)
}

/// Clip the color to the gamut, reducing chroma only.
///
/// An in-gamut color is returned unchanged. Otherwise, the result is an Oklch
/// color with the same lightness, clamped to `0..=1`, and hue.
///
/// ```
/// # use okgamut::{adjust::gamut_clip_preserve_lightness, ColorModel, Oklch};
/// let clipped = gamut_clip_preserve_lightness(&Oklch::new(0.5, 10.0, 30.0));
/// let clipped = clipped.to_oklch();
/// assert!(clipped.is_in_gamut());
/// assert!((clipped.l() - 0.5).abs() < 1e-9);
/// assert!(clipped.c() < 0.25);
/// ```
pub fn gamut_clip_preserve_lightness<C: ColorModel + ?Sized>(color: &C) -> Color {
    clip(color, Anchor::PreserveLightness)
}

// --------------------------------------------------------------------------------------------------------------------

impl Color {
    /// Adjust this color's chroma. See [`chromatize`].
    pub fn chromatize(&self, t: Float, method: AdjustMethod) -> Result<Oklch, AdjustError> {
        chromatize(t, &ChromaTarget::Color(*self), method)
    }

    /// Adjust this color's chroma. See [`dechromatize`].
    pub fn dechromatize(&self, t: Float, method: AdjustMethod) -> Result<Oklch, AdjustError> {
        dechromatize(t, &ChromaTarget::Color(*self), method)
    }

    /// Adjust this color's lightness. See [`lighten`].
    pub fn lighten(&self, t: Float, method: AdjustMethod) -> Result<Oklch, AdjustError> {
        lighten(t, &LightnessTarget::Color(*self), method)
    }

    /// Adjust this color's lightness. See [`darken`].
    pub fn darken(&self, t: Float, method: AdjustMethod) -> Result<Oklch, AdjustError> {
        darken(t, &LightnessTarget::Color(*self), method)
    }

    /// Interpolate between this and the other color. See [`interpolate`].
    pub fn interpolate<C: ColorModel + ?Sized>(
        &self,
        t: Float,
        other: &C,
        path: HuePath,
    ) -> Oklch {
        interpolate(t, self, other, path)
    }

    /// Clip this color. See [`gamut_clip_hue_dependent`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn gamut_clip_hue_dependent(&self) -> Color {
        gamut_clip_hue_dependent(self)
    }

    /// Clip this color. See [`gamut_clip_hue_independent`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn gamut_clip_hue_independent(&self) -> Color {
        gamut_clip_hue_independent(self)
    }

    /// Clip this color. See [`gamut_clip_preserve_lightness`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn gamut_clip_preserve_lightness(&self) -> Color {
        gamut_clip_preserve_lightness(self)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::{
        chromatize, darken, dechromatize, detone, gamut_clip_hue_dependent,
        gamut_clip_hue_independent, gamut_clip_preserve_lightness, interpolate, lighten, tone,
        AdjustMethod, ChromaTarget, LightnessTarget,
    };
    use crate::error::AdjustError;
    use crate::{
        assert_close_enough, find_chroma_max, find_lightness_bounds, Color, ColorModel, Hex,
        HuePath, Oklch, Rgb,
    };

    #[test]
    fn test_chromatize_gray() -> Result<(), AdjustError> {
        let gray = Hex::new(0x80, 0x80, 0x80);
        let oklch = gray.to_oklch();
        assert_eq!(oklch.h(), 0.0);

        let colorful = chromatize(1.0, &gray.into(), AdjustMethod::Absolute)?;
        assert!(colorful.is_in_gamut());
        assert_close_enough!(colorful.l(), oklch.l());
        assert_eq!(colorful.h(), 0.0);
        assert!(0.2 < colorful.c(), "{} has too little chroma", colorful);
        assert!(colorful.c() <= find_chroma_max(&oklch) + 1e-9);
        Ok(())
    }

    #[test]
    fn test_chromatize_relative() -> Result<(), AdjustError> {
        let pink = Hex::new(0xdb, 0x70, 0x93);
        let oklch = pink.to_oklch();
        let target = ChromaTarget::from(pink);

        let vivid = chromatize(0.5, &target, AdjustMethod::Relative)?;
        assert!(oklch.c() < vivid.c());
        assert_close_enough!(vivid.l(), oklch.l());

        let same = chromatize(0.0, &target, AdjustMethod::Relative)?;
        assert_eq!(same, oklch);

        let gray = dechromatize(1.0, &target, AdjustMethod::Relative)?;
        assert_close_enough!(gray.c(), 0.0);

        let half = chromatize(-0.5, &target, AdjustMethod::Relative)?;
        assert_close_enough!(half.c(), oklch.c() / 2.0);
        assert_eq!(tone(0.5, &target, AdjustMethod::Relative)?, half);
        assert_eq!(detone(0.5, &target, AdjustMethod::Relative)?, vivid);
        Ok(())
    }

    #[test]
    fn test_dechromatize_absolute() -> Result<(), AdjustError> {
        let target = ChromaTarget::Hue {
            hue: 140.0,
            lightness: 0.7,
        };

        let max = chromatize(1.0, &target, AdjustMethod::Absolute)?;
        assert_eq!(dechromatize(0.0, &target, AdjustMethod::Absolute)?, max);

        let none = dechromatize(1.0, &target, AdjustMethod::Absolute)?;
        assert_close_enough!(none.c(), 0.0);
        assert_close_enough!(none.l(), 0.7);
        Ok(())
    }

    #[test]
    fn test_invalid_factors() {
        let target = ChromaTarget::from(Rgb::new(12, 120, 200));

        assert_eq!(
            chromatize(1.5, &target, AdjustMethod::Relative),
            Err(AdjustError::FactorOutOfRange {
                factor: 1.5,
                expected: -1.0..=1.0,
                method: "relative",
            })
        );
        assert_eq!(
            dechromatize(-0.5, &target, AdjustMethod::Absolute),
            Err(AdjustError::FactorOutOfRange {
                factor: -0.5,
                expected: 0.0..=1.0,
                method: "absolute",
            })
        );
        assert!(matches!(
            chromatize(f64::NAN, &target, AdjustMethod::Relative),
            Err(AdjustError::FactorOutOfRange { .. })
        ));
        assert!(matches!(
            lighten(-0.1, &LightnessTarget::from(Rgb::new(0, 0, 0)), AdjustMethod::Absolute),
            Err(AdjustError::FactorOutOfRange { .. })
        ));
    }

    #[test]
    fn test_hue_requires_absolute() {
        let chroma = ChromaTarget::Hue {
            hue: 30.0,
            lightness: 0.5,
        };
        assert_eq!(
            chromatize(0.5, &chroma, AdjustMethod::Relative),
            Err(AdjustError::HueRequiresAbsolute)
        );

        let lightness = LightnessTarget::Hue {
            hue: 30.0,
            chroma: 0.1,
        };
        assert_eq!(
            darken(0.5, &lightness, AdjustMethod::Relative),
            Err(AdjustError::HueRequiresAbsolute)
        );
    }

    #[test]
    fn test_lighten_and_darken() -> Result<(), AdjustError> {
        let color = Oklch::new(0.5, 0.1, 140.0);
        let (lower, upper) = find_lightness_bounds(&color);
        let target = LightnessTarget::from(color);

        let light = lighten(1.0, &target, AdjustMethod::Absolute)?;
        assert!(light.is_in_gamut());
        assert_close_enough!(light.l(), upper);
        assert_close_enough!(light.c(), 0.1);

        let dark = darken(1.0, &target, AdjustMethod::Relative)?;
        assert!(dark.is_in_gamut());
        assert_close_enough!(dark.l(), lower);

        let same = lighten(0.0, &target, AdjustMethod::Relative)?;
        assert_eq!(same, color);

        let hue = LightnessTarget::Hue {
            hue: 140.0,
            chroma: 0.1,
        };
        let middle = lighten(0.5, &hue, AdjustMethod::Absolute)?;
        assert!(lower < middle.l() && middle.l() < upper);
        assert_eq!(darken(0.5, &hue, AdjustMethod::Absolute)?, middle);
        Ok(())
    }

    #[test]
    fn test_interpolate_shortest_path() {
        let red = Hex::new(0xff, 0, 0);
        let blue = Hex::new(0, 0, 0xff);
        let red_hue = red.to_oklch().h();
        let blue_hue = blue.to_oklch().h();

        let purple = interpolate(0.5, &red, &blue, HuePath::Shortest);
        assert!(purple.is_in_gamut());
        assert!(
            purple.h() < red_hue || blue_hue < purple.h(),
            "{} is on the major arc",
            purple
        );

        let green = interpolate(0.5, &red, &blue, HuePath::Longest);
        assert!(red_hue < green.h() && green.h() < blue_hue);
    }

    #[test]
    fn test_interpolate_end_points() {
        let color1 = Hex::new(0xc7, 0x15, 0x85);
        let color2 = Hex::new(0x20, 0xb2, 0xaa);

        for path in [
            HuePath::Shortest,
            HuePath::Longest,
            HuePath::Increasing,
            HuePath::Decreasing,
            HuePath::Oklab,
        ] {
            let start = interpolate(0.0, &color1, &color2, path);
            assert!(start.is_close(&color1), "{} for {}", start, path);
            let end = interpolate(1.0, &color1, &color2, path);
            assert!(end.is_close(&color2), "{} for {}", end, path);
        }

        // Except for the longest path, interpolating a color with itself is
        // the identity.
        for path in [
            HuePath::Shortest,
            HuePath::Increasing,
            HuePath::Decreasing,
            HuePath::Oklab,
        ] {
            let same = interpolate(0.3, &color1, &color1, path);
            assert!(same.is_close(&color1), "{} for {}", same, path);
        }
    }

    #[test]
    fn test_gamut_clip_with_nan() {
        let color = Oklch::new(f64::NAN, 0.3, 30.0);
        assert!(!color.is_in_gamut());

        for clipped in [
            gamut_clip_hue_dependent(&color),
            gamut_clip_hue_independent(&color),
            gamut_clip_preserve_lightness(&color),
        ] {
            assert!(!clipped.is_in_gamut(), "{} is in gamut", clipped);
        }
    }

    #[test]
    fn test_gamut_clip() {
        let color = Oklch::new(0.5, 10.0, 30.0);

        let Color::Oklch(clipped) = gamut_clip_preserve_lightness(&color) else {
            panic!("clipped color should be Oklch");
        };
        assert!(clipped.is_in_gamut());
        assert_close_enough!(clipped.l(), 0.5);
        assert!(clipped.c() < 0.25);
        assert_eq!(clipped.h(), 30.0);

        for clipped in [
            gamut_clip_hue_dependent(&color),
            gamut_clip_hue_independent(&color),
        ] {
            assert!(clipped.is_in_gamut(), "{} is out of gamut", clipped);
        }

        // Clipping an in-gamut color is the identity.
        let hex = Color::Hex(Hex::new(0x12, 0x34, 0x56));
        assert_eq!(hex.gamut_clip_preserve_lightness(), hex);
        assert_eq!(hex.gamut_clip_hue_dependent(), hex);
        assert_eq!(hex.gamut_clip_hue_independent(), hex);
    }

    #[test]
    fn test_color_methods() -> Result<(), AdjustError> {
        let color = Color::Rgb(Rgb::new(50, 100, 150));
        assert_eq!(
            color.chromatize(0.5, AdjustMethod::Relative)?,
            chromatize(0.5, &color.into(), AdjustMethod::Relative)?
        );
        assert_eq!(
            color.darken(0.5, AdjustMethod::Relative)?,
            darken(0.5, &color.into(), AdjustMethod::Relative)?
        );
        assert_eq!(
            color.interpolate(0.5, &Rgb::new(0, 0, 0), HuePath::Oklab),
            interpolate(0.5, &color, &Rgb::new(0, 0, 0), HuePath::Oklab)
        );
        Ok(())
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("relative".parse::<AdjustMethod>(), Ok(AdjustMethod::Relative));
        assert_eq!("absolute".parse::<AdjustMethod>(), Ok(AdjustMethod::Absolute));
        assert_eq!(AdjustMethod::default().to_string(), "relative");

        let Err(error) = "sideways".parse::<AdjustMethod>() else {
            panic!("sideways should not be an adjustment method");
        };
        assert_eq!(error.name, "sideways");
        assert_eq!(error.expected, AdjustMethod::NAMES);
    }

    proptest! {
        #[test]
        fn test_clips_are_in_gamut(
            l in 0.0_f64..=1.0,
            c in 0.0_f64..0.6,
            h in 0.0_f64..360.0,
        ) {
            let color = Oklch::new(l, c, h);

            let clipped = gamut_clip_preserve_lightness(&color);
            prop_assert!(clipped.is_in_gamut(), "{} clips to {}", color, clipped);
            prop_assert_eq!(gamut_clip_preserve_lightness(&clipped), clipped);

            let clipped = gamut_clip_hue_dependent(&color);
            prop_assert!(clipped.is_in_gamut(), "{} clips to {}", color, clipped);

            let clipped = gamut_clip_hue_independent(&color);
            prop_assert!(clipped.is_in_gamut(), "{} clips to {}", color, clipped);
        }

        #[test]
        fn test_chromatize_is_in_gamut(
            r in 0_i32..=255,
            g in 0_i32..=255,
            b in 0_i32..=255,
            t in -1.0_f64..=1.0,
        ) {
            let color = Rgb::new(r, g, b);
            let result = chromatize(t, &color.into(), AdjustMethod::Relative);
            prop_assert!(result.is_ok_and(|c| c.is_in_gamut()));

            let result = lighten(t, &color.into(), AdjustMethod::Relative);
            prop_assert!(result.is_ok_and(|c| c.is_in_gamut()));
        }
    }
}
