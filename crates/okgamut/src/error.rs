//! Utility module with okgamut's errors.

use crate::{Float, Rgb};

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb(`, `oklab(`, or `oklch(`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `oklch 0.5 0.1 30)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is missing a coordinate. For example, `rgb(1, 2)`
    /// is missing the third coordinate.
    MissingCoordinate,

    /// A color format that has a malformed hexadecimal number. For example,
    /// `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format that has a malformed integer as coordinate. For
    /// example, `rgb(1, 2.5, 3)` has a malformed second coordinate.
    MalformedInteger,

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `oklab(1.0 0..1 0.0)` has a malformed second
    /// coordinate.
    MalformedFloat,

    /// A color format with more than three coordinates. For example,
    /// `rgb(1, 2, 3, 4)` has one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `rgb()`, `oklab()`, or `oklch()`",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedInteger => {
                f.write_str("color format coordinates should be decimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An out-of-gamut error.
///
/// This error indicates an attempt to convert an RGB color with channels
/// outside `0..=255` into a [`Hex`](crate::Hex) code. The error retains the
/// offending color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfGamutError {
    rgb: Rgb,
}

impl OutOfGamutError {
    /// Create a new out-of-gamut error.
    pub const fn new(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// Get the out-of-gamut color.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }
}

impl std::fmt::Display for OutOfGamutError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} is out of gamut and has no hexadecimal code",
            self.rgb
        ))
    }
}

impl std::error::Error for OutOfGamutError {}

// ====================================================================================================================

/// An unknown method name.
///
/// This error indicates a string that does not name any of the variants of
/// [`AdjustMethod`](crate::adjust::AdjustMethod) or
/// [`HuePath`](crate::HuePath).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMethodError {
    pub name: String,
    pub expected: &'static [&'static str],
}

impl UnknownMethodError {
    /// Create a new unknown method error.
    pub fn new(name: &str, expected: &'static [&'static str]) -> Self {
        Self {
            name: name.to_owned(),
            expected,
        }
    }
}

impl std::fmt::Display for UnknownMethodError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("unknown method '{}'; valid methods are ", self.name))?;
        for (index, name) in self.expected.iter().enumerate() {
            if 0 < index {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("'{}'", name))?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownMethodError {}

// ====================================================================================================================

/// An invalid adjustment.
///
/// This error indicates a chroma or lightness adjustment whose arguments do
/// not fit together.
#[derive(Clone, Debug, PartialEq)]
pub enum AdjustError {
    /// A factor outside the range valid for the adjustment method, that is,
    /// `-1..=1` for relative and `0..=1` for absolute adjustments. Not-a-number
    /// is never valid.
    FactorOutOfRange {
        factor: Float,
        expected: std::ops::RangeInclusive<Float>,
        method: &'static str,
    },

    /// An explicit hue target for a relative adjustment. A hue target lacks
    /// the current value that a relative adjustment starts from.
    HueRequiresAbsolute,
}

impl std::fmt::Display for AdjustError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FactorOutOfRange {
                factor,
                expected,
                method,
            } => f.write_fmt(format_args!(
                "t should be in the range [{},{}] for method '{}' but is {}",
                expected.start(),
                expected.end(),
                method,
                factor
            )),
            Self::HueRequiresAbsolute => {
                f.write_str("explicit hue can only be specified with method 'absolute'")
            }
        }
    }
}

impl std::error::Error for AdjustError {}
