use std::hash::{Hash, Hasher};

use crate::core::{
    ceil_to, delta_e_ok, floor_to, format, normalize_hue, oklab_to_oklch, oklab_to_rgb,
    oklch_to_oklab, parse, parse_hashed, parse_rgb, rgb_to_oklab, to_eq_coordinates,
};
use crate::error::{ColorFormatError, OutOfGamutError};
use crate::{find_cusp, ColorSpace, Float};

/// The capabilities shared by all color representations.
///
/// Every representation converts into every other representation, with the
/// conversion to [`Hex`] failing for out-of-gamut colors. The provided methods
/// build on these conversions to test gamut membership, to compare colors, and
/// to implement Oklab arithmetic. The result of [`ColorModel::midpoint`],
/// [`ColorModel::complement`], and [`ColorModel::difference`] has the same
/// representation as `self`, with one exception: If `self` is a hexadecimal
/// color and the result is out of gamut, the result is an [`Rgb`] color.
///
/// ```
/// # use okgamut::{Color, ColorModel, ColorSpace, Hex};
/// let red = Hex::new(0xff, 0, 0);
/// let blue = Hex::new(0, 0, 0xff);
///
/// let purple = red.midpoint(&blue);
/// assert_eq!(purple.space(), ColorSpace::Hex);
/// assert_eq!(purple.to_string(), "#8C53A2");
///
/// let dark = red.complement();
/// assert_eq!(dark.space(), ColorSpace::Rgb);
/// assert!(!dark.is_in_gamut());
/// ```
pub trait ColorModel {
    /// Get this color's representation.
    fn space(&self) -> ColorSpace;

    /// Convert to integer RGB. The result may be out of gamut.
    fn to_rgb(&self) -> Rgb;

    /// Convert to a hexadecimal code.
    ///
    /// # Errors
    ///
    /// This method fails if the color is out of gamut.
    fn to_hex(&self) -> Result<Hex, OutOfGamutError> {
        Hex::try_from(self.to_rgb())
    }

    /// Convert to Oklab.
    fn to_oklab(&self) -> Oklab;

    /// Convert to Oklch.
    fn to_oklch(&self) -> Oklch;

    /// Wrap this color as a [`Color`] of the same representation.
    fn to_color(&self) -> Color;

    /// Determine whether this color is in gamut, i.e., whether its RGB
    /// channels all are in `0..=255`.
    fn is_in_gamut(&self) -> bool {
        self.to_rgb().is_in_gamut()
    }

    /// Determine whether this color and the other color are the same 24-bit
    /// RGB color after rounding.
    fn is_close<C: ColorModel + ?Sized>(&self, other: &C) -> bool {
        self.to_rgb() == other.to_rgb()
    }

    /// Compute the Euclidean distance in Oklab.
    fn distance<C: ColorModel + ?Sized>(&self, other: &C) -> Float {
        delta_e_ok(
            &self.to_oklab().coordinates(),
            &other.to_oklab().coordinates(),
        )
    }

    /// Compute the midpoint in Oklab.
    #[must_use = "method returns a new color and does not mutate original value"]
    fn midpoint<C: ColorModel + ?Sized>(&self, other: &C) -> Color {
        Color::from_oklab_as(self.space(), self.to_oklab().midpoint_of(&other.to_oklab()))
    }

    /// Compute the complement in Oklab, i.e., `(1 − L, −a, −b)`.
    #[must_use = "method returns a new color and does not mutate original value"]
    fn complement(&self) -> Color {
        Color::from_oklab_as(self.space(), self.to_oklab().complement_of())
    }

    /// Compute the difference in Oklab, i.e., the midpoint between this color
    /// and the other color's complement.
    #[must_use = "method returns a new color and does not mutate original value"]
    fn difference<C: ColorModel + ?Sized>(&self, other: &C) -> Color {
        Color::from_oklab_as(
            self.space(),
            self.to_oklab()
                .midpoint_of(&other.to_oklab().complement_of()),
        )
    }
}

// ====================================================================================================================

/// An integer RGB color.
///
/// Channels in `0..=255` describe in-gamut colors. Channels outside that range
/// are legal and describe out-of-gamut colors, which result from converting
/// Oklab or Oklch colors that sRGB cannot display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    r: i32,
    g: i32,
    b: i32,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Get the red channel.
    pub const fn r(&self) -> i32 {
        self.r
    }

    /// Get the green channel.
    pub const fn g(&self) -> i32 {
        self.g
    }

    /// Get the blue channel.
    pub const fn b(&self) -> i32 {
        self.b
    }

    /// Get all three channels.
    pub const fn channels(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp the channels to `0..=255`.
    pub fn clamped(&self) -> [u8; 3] {
        self.channels().map(|c| c.clamp(0, 255) as u8)
    }
}

impl ColorModel for Rgb {
    fn space(&self) -> ColorSpace {
        ColorSpace::Rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_oklab(&self) -> Oklab {
        Oklab::from(rgb_to_oklab(&self.channels()))
    }

    fn to_oklch(&self) -> Oklch {
        self.to_oklab().to_oklch()
    }

    fn to_color(&self) -> Color {
        Color::Rgb(*self)
    }

    fn is_in_gamut(&self) -> bool {
        self.channels().iter().all(|c| (0..=255).contains(c))
    }
}

impl From<[i32; 3]> for Rgb {
    fn from(value: [i32; 3]) -> Self {
        let [r, g, b] = value;
        Self::new(r, g, b)
    }
}

impl From<Hex> for Rgb {
    fn from(value: Hex) -> Self {
        value.to_rgb()
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse `rgb(r, g, b)` with integer channels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(parse_rgb(&s.trim().to_ascii_lowercase())?))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("rgb({}, {}, {})", self.r, self.g, self.b))
    }
}

// ====================================================================================================================

/// A hexadecimal color code.
///
/// A hexadecimal code can only represent in-gamut colors. Parsing accepts
/// three or six digits in either case with or without a leading `#`. Display
/// always produces `#RRGGBB` with uppercase digits.
///
/// ```
/// # use okgamut::Hex;
/// let hex: Hex = "c71585".parse().expect("valid hex code");
/// assert_eq!(hex.to_string(), "#C71585");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex([u8; 3]);

impl Hex {
    /// Create a new hexadecimal color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Get the three channels.
    pub const fn channels(&self) -> [u8; 3] {
        self.0
    }
}

impl ColorModel for Hex {
    fn space(&self) -> ColorSpace {
        ColorSpace::Hex
    }

    fn to_rgb(&self) -> Rgb {
        let [r, g, b] = self.0;
        Rgb::new(r as i32, g as i32, b as i32)
    }

    fn to_hex(&self) -> Result<Hex, OutOfGamutError> {
        Ok(*self)
    }

    fn to_oklab(&self) -> Oklab {
        self.to_rgb().to_oklab()
    }

    fn to_oklch(&self) -> Oklch {
        self.to_rgb().to_oklch()
    }

    fn to_color(&self) -> Color {
        Color::Hex(*self)
    }

    fn is_in_gamut(&self) -> bool {
        true
    }
}

impl TryFrom<Rgb> for Hex {
    type Error = OutOfGamutError;

    fn try_from(value: Rgb) -> Result<Self, Self::Error> {
        let [r, g, b] = value.channels();
        match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(OutOfGamutError::new(value)),
        }
    }
}

impl std::str::FromStr for Hex {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s.trim()).map(Self)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

// ====================================================================================================================

/// An Oklab color.
///
/// Oklab uses Cartesian coordinates, with L for lightness, a for the red/green
/// axis, and b for the blue/yellow axis. Equality and hashing reduce the
/// coordinates' resolution to 12 digits after the decimal.
#[derive(Copy, Clone, Debug)]
pub struct Oklab {
    l: Float,
    a: Float,
    b: Float,
}

impl Oklab {
    /// Create a new Oklab color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    /// Get the lightness.
    pub const fn l(&self) -> Float {
        self.l
    }

    /// Get the red/green coordinate.
    pub const fn a(&self) -> Float {
        self.a
    }

    /// Get the blue/yellow coordinate.
    pub const fn b(&self) -> Float {
        self.b
    }

    /// Get all three coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }

    fn midpoint_of(&self, other: &Self) -> Self {
        Self::new(
            (self.l + other.l) / 2.0,
            (self.a + other.a) / 2.0,
            (self.b + other.b) / 2.0,
        )
    }

    fn complement_of(&self) -> Self {
        Self::new(1.0 - self.l, -self.a, -self.b)
    }
}

impl ColorModel for Oklab {
    fn space(&self) -> ColorSpace {
        ColorSpace::Oklab
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(oklab_to_rgb(&self.coordinates()))
    }

    fn to_oklab(&self) -> Oklab {
        *self
    }

    fn to_oklch(&self) -> Oklch {
        Oklch::from(oklab_to_oklch(&self.coordinates()))
    }

    fn to_color(&self) -> Color {
        Color::Oklab(*self)
    }

    fn is_in_gamut(&self) -> bool {
        self.coordinates().iter().all(|c| c.is_finite()) && self.to_rgb().is_in_gamut()
    }
}

impl From<[Float; 3]> for Oklab {
    fn from(value: [Float; 3]) -> Self {
        let [l, a, b] = value;
        Self::new(l, a, b)
    }
}

impl PartialEq for Oklab {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(ColorSpace::Oklab, &self.coordinates())
            == to_eq_coordinates(ColorSpace::Oklab, &other.coordinates())
    }
}

impl Eq for Oklab {}

impl Hash for Oklab {
    fn hash<H: Hasher>(&self, state: &mut H) {
        to_eq_coordinates(ColorSpace::Oklab, &self.coordinates()).hash(state);
    }
}

impl std::fmt::Display for Oklab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(ColorSpace::Oklab, &self.coordinates(), f)
    }
}

// ====================================================================================================================

/// An Oklch color.
///
/// Oklch uses polar coordinates, with L for lightness, C for chroma, and h for
/// the hue in degrees. The constructor normalizes the hue to `0..360`.
/// Equality and hashing reduce the coordinates' resolution to 12 digits after
/// the decimal.
#[derive(Copy, Clone, Debug)]
pub struct Oklch {
    l: Float,
    c: Float,
    h: Float,
}

impl Oklch {
    /// Create a new Oklch color.
    pub fn new(l: Float, c: Float, h: Float) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    /// Get the lightness.
    pub const fn l(&self) -> Float {
        self.l
    }

    /// Get the chroma.
    pub const fn c(&self) -> Float {
        self.c
    }

    /// Get the hue in degrees.
    pub const fn h(&self) -> Float {
        self.h
    }

    /// Get all three coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.c, self.h]
    }

    /// Format this color with CSS's `oklch()` function.
    ///
    /// The lightness is a percentage with two digits after the decimal, the
    /// chroma has three digits, and the hue has two digits. Lightness is
    /// rounded down above the cusp and rounded up below the cusp, whereas
    /// chroma always is rounded down. As a result, rounding never pushes an
    /// in-gamut color out of gamut.
    ///
    /// ```
    /// # use okgamut::{ColorModel, Hex};
    /// let red = Hex::new(0xff, 0, 0).to_oklch();
    /// assert_eq!(red.to_css_string(), "oklch(62.79% 0.257 29.23)");
    /// ```
    pub fn to_css_string(&self) -> String {
        let cusp = find_cusp(self.h);
        let l = if cusp.l() < self.l {
            floor_to(self.l, 4)
        } else {
            ceil_to(self.l, 4)
        };
        let c = floor_to(self.c, 3);

        format!("oklch({:.2}% {:.3} {:.2})", l * 100.0, c, self.h)
    }
}

impl ColorModel for Oklch {
    fn space(&self) -> ColorSpace {
        ColorSpace::Oklch
    }

    fn to_rgb(&self) -> Rgb {
        self.to_oklab().to_rgb()
    }

    fn to_oklab(&self) -> Oklab {
        Oklab::from(oklch_to_oklab(&self.coordinates()))
    }

    fn to_oklch(&self) -> Oklch {
        *self
    }

    fn to_color(&self) -> Color {
        Color::Oklch(*self)
    }

    fn is_in_gamut(&self) -> bool {
        self.coordinates().iter().all(|c| c.is_finite()) && self.to_rgb().is_in_gamut()
    }
}

impl From<[Float; 3]> for Oklch {
    fn from(value: [Float; 3]) -> Self {
        let [l, c, h] = value;
        Self::new(l, c, h)
    }
}

impl PartialEq for Oklch {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(ColorSpace::Oklch, &self.coordinates())
            == to_eq_coordinates(ColorSpace::Oklch, &other.coordinates())
    }
}

impl Eq for Oklch {}

impl Hash for Oklch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        to_eq_coordinates(ColorSpace::Oklch, &self.coordinates()).hash(state);
    }
}

impl std::fmt::Display for Oklch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(ColorSpace::Oklch, &self.coordinates(), f)
    }
}

// ====================================================================================================================

/// A color in any one of the four representations.
///
/// Colors parse from hexadecimal codes, `rgb()`, `oklab()`, and `oklch()`
/// notation:
///
/// ```
/// # use okgamut::{Color, ColorModel, ColorSpace};
/// # use okgamut::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let color: Color = "oklch(62.8% 0.2577 29.23)".parse()?;
/// assert_eq!(color.space(), ColorSpace::Oklch);
/// assert_eq!(color.to_rgb().channels(), [255, 0, 0]);
///
/// let color: Color = "#f00".parse()?;
/// assert_eq!(color.to_string(), "#FF0000");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(Rgb),
    Hex(Hex),
    Oklab(Oklab),
    Oklch(Oklch),
}

impl Color {
    /// Convert the Oklab color into the given representation. If that
    /// representation is hexadecimal but the color is out of gamut, the
    /// result is an RGB color.
    pub fn from_oklab_as(space: ColorSpace, color: Oklab) -> Self {
        match space {
            ColorSpace::Rgb => Self::Rgb(color.to_rgb()),
            ColorSpace::Hex => match color.to_hex() {
                Ok(hex) => Self::Hex(hex),
                Err(error) => Self::Rgb(error.rgb()),
            },
            ColorSpace::Oklab => Self::Oklab(color),
            ColorSpace::Oklch => Self::Oklch(color.to_oklch()),
        }
    }
}

/// Forward a method call to the color wrapped by a [`Color`].
macro_rules! delegate {
    ($color:expr, $method:ident) => {
        match *$color {
            Color::Rgb(ref color) => color.$method(),
            Color::Hex(ref color) => color.$method(),
            Color::Oklab(ref color) => color.$method(),
            Color::Oklch(ref color) => color.$method(),
        }
    };
}

impl ColorModel for Color {
    fn space(&self) -> ColorSpace {
        delegate!(self, space)
    }

    fn to_rgb(&self) -> Rgb {
        delegate!(self, to_rgb)
    }

    fn to_hex(&self) -> Result<Hex, OutOfGamutError> {
        delegate!(self, to_hex)
    }

    fn to_oklab(&self) -> Oklab {
        delegate!(self, to_oklab)
    }

    fn to_oklch(&self) -> Oklch {
        delegate!(self, to_oklch)
    }

    fn to_color(&self) -> Color {
        *self
    }

    fn is_in_gamut(&self) -> bool {
        delegate!(self, is_in_gamut)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Self::Hex(value)
    }
}

impl From<Oklab> for Color {
    fn from(value: Oklab) -> Self {
        Self::Oklab(value)
    }
}

impl From<Oklch> for Color {
    fn from(value: Oklch) -> Self {
        Self::Oklch(value)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (space, [c1, c2, c3]) = parse(s)?;
        Ok(match space {
            ColorSpace::Rgb => Self::Rgb(Rgb::new(c1 as i32, c2 as i32, c3 as i32)),
            ColorSpace::Hex => Self::Hex(Hex::new(c1 as u8, c2 as u8, c3 as u8)),
            ColorSpace::Oklab => Self::Oklab(Oklab::new(c1, c2, c3)),
            ColorSpace::Oklch => Self::Oklch(Oklch::new(c1, c2, c3)),
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Rgb(ref color) => std::fmt::Display::fmt(color, f),
            Self::Hex(ref color) => std::fmt::Display::fmt(color, f),
            Self::Oklab(ref color) => std::fmt::Display::fmt(color, f),
            Self::Oklch(ref color) => std::fmt::Display::fmt(color, f),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, ColorModel, Hex, Oklab, Oklch, Rgb};
    use crate::error::{ColorFormatError, OutOfGamutError};
    use crate::core::assert_same_coordinates;
    use crate::{assert_close_enough, ColorSpace, Float};

    #[test]
    fn test_hex_to_rgb() -> Result<(), ColorFormatError> {
        let red: Hex = "#FF0000".parse()?;
        assert_eq!(red.to_rgb(), Rgb::new(255, 0, 0));

        let red: Hex = "ff0000".parse()?;
        assert_eq!(red.to_string(), "#FF0000");
        assert_eq!(red, Hex::new(0xff, 0, 0));
        Ok(())
    }

    #[test]
    fn test_rgb_to_oklch() {
        let red = Rgb::new(255, 0, 0).to_oklch();
        assert!((red.l() - 0.6280).abs() < 5e-4, "lightness {}", red.l());
        assert!((red.c() - 0.2577).abs() < 5e-4, "chroma {}", red.c());
        assert!((red.h() - 29.23).abs() < 5e-3, "hue {}", red.h());
    }

    #[test]
    fn test_hex_requires_gamut() {
        let rgb = Rgb::new(256, 12, 0);
        assert!(!rgb.is_in_gamut());
        assert_eq!(rgb.to_hex(), Err(OutOfGamutError::new(rgb)));
        assert_eq!(Hex::try_from(Rgb::new(0, 128, 255)), Ok(Hex::new(0, 128, 255)));
    }

    #[test]
    fn test_gamut_predicate_is_consistent() {
        let colors = [
            Color::from(Rgb::new(12, 250, 99)),
            Color::from(Rgb::new(-3, 0, 0)),
            Color::from(Hex::new(0, 0, 0)),
            Color::from(Oklab::new(0.7, 0.1, -0.1)),
            Color::from(Oklch::new(0.5, 10.0, 30.0)),
            Color::from(Oklch::new(0.9, 0.02, 200.0)),
        ];

        for color in colors {
            assert_eq!(
                color.is_in_gamut(),
                color.to_rgb().is_in_gamut(),
                "{}",
                color
            );
        }
    }

    #[test]
    fn test_non_finite_is_out_of_gamut() {
        let nan = Oklch::new(Float::NAN, 0.3, 30.0);
        assert_eq!(nan.to_rgb(), Rgb::new(0, 0, 0));
        assert!(!nan.is_in_gamut());
        assert!(!Color::from(nan).is_in_gamut());
        assert!(!Oklab::new(0.5, Float::INFINITY, 0.0).is_in_gamut());
    }

    #[test]
    fn test_oklch_normalizes_hue() {
        let color = Oklch::new(0.5, 0.1, -30.0);
        assert_close_enough!(color.h(), 330.0);
        assert_eq!(color, Oklch::new(0.5, 0.1, 690.0));
        assert_eq!(Oklch::new(0.5, 0.1, 360.0).h(), 0.0);
        assert_same_coordinates!(ColorSpace::Oklch, &color.coordinates(), &[0.5, 0.1, -30.0]);
    }

    #[test]
    fn test_is_close() {
        let red = Hex::new(0xff, 0, 0);
        let almost = Oklch::new(red.to_oklch().l() + 1e-6, red.to_oklch().c(), 29.2339);
        assert!(red.is_close(&almost));
        assert!(!red.is_close(&Hex::new(0xfe, 0, 0)));
    }

    #[test]
    fn test_arithmetic_laws() {
        let a = Oklab::new(0.3, 0.1, -0.05);
        let b = Oklab::new(0.8, -0.02, 0.12);

        assert_eq!(a.midpoint(&b), b.midpoint(&a));
        assert_eq!(a.complement().complement(), Color::Oklab(a));
        assert_close_enough!(a.distance(&b), b.distance(&a));
        assert_close_enough!(a.distance(&a), 0.0);
        assert!(0.0 < a.distance(&b));

        // Difference is the midpoint with the complement.
        let Color::Oklab(complement) = b.complement() else {
            panic!("complement of Oklab should be Oklab");
        };
        assert_eq!(a.difference(&b), a.midpoint(&complement));
    }

    #[test]
    fn test_result_space_follows_first_operand() {
        let red = Hex::new(0xff, 0, 0);
        let blue = Rgb::new(0, 0, 255);

        assert_eq!(red.midpoint(&blue).space(), ColorSpace::Hex);
        assert_eq!(blue.midpoint(&red).space(), ColorSpace::Rgb);
        assert_eq!(red.to_oklch().midpoint(&blue).space(), ColorSpace::Oklch);

        // White's complement is black, which stays hexadecimal.
        let white = Hex::new(0xff, 0xff, 0xff);
        assert_eq!(white.complement(), Color::Hex(Hex::new(0, 0, 0)));

        // Red's complement is out of gamut and hence falls back on RGB.
        let complement = red.complement();
        assert_eq!(complement.space(), ColorSpace::Rgb);
        assert!(!complement.is_in_gamut());
    }

    #[test]
    fn test_parse_and_display() -> Result<(), ColorFormatError> {
        assert_eq!("rgb(1, 2, 3)".parse::<Color>()?, Color::Rgb(Rgb::new(1, 2, 3)));
        assert_eq!("#123".parse::<Color>()?, Color::Hex(Hex::new(0x11, 0x22, 0x33)));
        assert_eq!(
            "oklab(0.5 0.1 -0.1)".parse::<Color>()?,
            Color::Oklab(Oklab::new(0.5, 0.1, -0.1))
        );
        assert_eq!(Rgb::new(300, -20, 40).to_string(), "rgb(300, -20, 40)");
        assert_eq!("rgb(300, -20, 40)".parse::<Rgb>()?, Rgb::new(300, -20, 40));
        assert_eq!(Oklab::new(0.5, 0.1, -0.1).to_string(), "oklab(0.5 0.1 -0.1)");
        assert_eq!(
            format!("{:.3}", Oklch::new(0.62796, 0.25768, 29.2339)),
            "oklch(0.628 0.258 29.2)"
        );
        Ok(())
    }

    #[test]
    fn test_css_string() {
        let red = Rgb::new(255, 0, 0).to_oklch();
        assert_eq!(red.to_css_string(), "oklch(62.79% 0.257 29.23)");

        let white = Rgb::new(255, 255, 255).to_oklch();
        assert_eq!(white.to_css_string(), "oklch(99.99% 0.000 0.00)");
    }
}
