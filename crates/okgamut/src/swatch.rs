//! Previewing colors in the terminal.
//!
//! A [`Swatch`] displays as a single space with the color as 24-bit
//! background, followed by a reset. Out-of-gamut colors are clamped for
//! display, so a swatch always renders.
//!
//! ```
//! # use okgamut::{swatch::Swatch, Hex, Oklch};
//! let red = Swatch::new(&Hex::new(0xff, 0, 0));
//! assert_eq!(red.to_string(), "\x1b[48;2;255;0;0m \x1b[0m");
//!
//! let row = Swatch::row(&[Oklch::new(0.0, 0.0, 0.0), Oklch::new(1.0, 0.0, 0.0)]);
//! assert_eq!(row, "\x1b[48;2;0;0;0m \x1b[0m\x1b[48;2;255;255;255m \x1b[0m");
//! ```

use crate::ColorModel;

/// A color swatch for 24-bit terminals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Swatch {
    rgb: [u8; 3],
}

impl Swatch {
    /// Create a new swatch for the color.
    pub fn new<C: ColorModel + ?Sized>(color: &C) -> Self {
        Self {
            rgb: color.to_rgb().clamped(),
        }
    }

    /// Get the displayed channels.
    pub const fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Render the colors as one line of adjacent swatches, without newline.
    pub fn row<C: ColorModel>(colors: &[C]) -> String {
        colors.iter().map(|c| Self::new(c).to_string()).collect()
    }
}

impl std::fmt::Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "\x1b[48;2;{};{};{}m \x1b[0m", r, g, b)
    }
}

#[cfg(test)]
mod test {
    use super::Swatch;
    use crate::{Color, Oklch, Rgb};

    #[test]
    fn test_swatch() {
        let swatch = Swatch::new(&Rgb::new(12, 34, 56));
        assert_eq!(swatch.rgb(), [12, 34, 56]);
        assert_eq!(format!("{}", swatch), "\x1b[48;2;12;34;56m \x1b[0m");

        let clamped = Swatch::new(&Rgb::new(300, -20, 40));
        assert_eq!(clamped.rgb(), [255, 0, 40]);

        let unruly = Swatch::new(&Color::Oklch(Oklch::new(0.5, 10.0, 30.0)));
        assert!(unruly.to_string().starts_with("\x1b[48;2;255;0;0m"));
        assert_eq!(Swatch::row::<Rgb>(&[]), "");
    }
}
