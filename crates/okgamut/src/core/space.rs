/// The enumeration of color representations.
///
/// Okgamut represents colors in one of four ways:
///
///   * [`Rgb`](crate::Rgb) uses three integer channels. Channels in `0..=255`
///     are in gamut. Channels outside that range are legal and describe
///     out-of-gamut colors.
///   * [`Hex`](crate::Hex) uses the familiar `#RRGGBB` notation and hence
///     can only represent in-gamut colors.
///   * [`Oklab`](crate::Oklab) uses Cartesian coordinates L, a, b in the
///     perceptually uniform Oklab color space. L typically ranges `0..=1`,
///     whereas a and b are unbounded.
///   * [`Oklch`](crate::Oklch) uses polar coordinates L, C, h for the same
///     space. Chroma C is non-negative and hue h is measured in degrees and
///     normalized to `0..360`.
///
/// The perceptual arithmetic and the distance between colors are computed in
/// Oklab, whereas the gamut-aware manipulations are computed in Oklch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hex,
    Oklab,
    Oklch,
}

impl ColorSpace {
    /// Determine whether this color space is Oklab or Oklch.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Determine whether this color space uses polar coordinates.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Oklch)
    }

    /// Determine whether this color space uses integer channels.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Rgb | Self::Hex)
    }

    /// Get this color space's human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "RGB",
            Self::Hex => "Hex",
            Self::Oklab => "Oklab",
            Self::Oklch => "Oklch",
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
