use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes. It transparently handles
/// a missing leading `#` as well as single-digit coordinates.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 3 && s.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
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

/// Strip the function name and parentheses from a functional notation such as
/// `rgb(1, 2, 3)`, returning the arguments.
fn strip_function<'a>(s: &'a str, name: &str) -> Result<&'a str, ColorFormatError> {
    s.strip_prefix(name)
        .ok_or(ColorFormatError::UnknownFormat)?
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)?
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)
}

/// Split the arguments of a functional notation into exactly three
/// coordinates. Coordinates may be separated by commas, white space, or both.
fn split_coordinates(body: &str) -> Result<[&str; 3], ColorFormatError> {
    let mut iter = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let c1 = iter.next().ok_or(ColorFormatError::MissingCoordinate)?;
    let c2 = iter.next().ok_or(ColorFormatError::MissingCoordinate)?;
    let c3 = iter.next().ok_or(ColorFormatError::MissingCoordinate)?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3])
}

/// Parse a color in `rgb(r, g, b)` format. Channels are decimal integers and
/// may fall outside `0..=255`.
pub(crate) fn parse_rgb(s: &str) -> Result<[i32; 3], ColorFormatError> {
    let [c1, c2, c3] = split_coordinates(strip_function(s, "rgb")?)?;

    #[inline]
    fn parse_coordinate(s: &str) -> Result<i32, ColorFormatError> {
        s.parse().map_err(|_| ColorFormatError::MalformedInteger)
    }

    Ok([
        parse_coordinate(c1)?,
        parse_coordinate(c2)?,
        parse_coordinate(c3)?,
    ])
}

/// Parse a color in `oklab()` or `oklch()` format. Lightness may be given as a
/// percentage, which is how [`Oklch::to_css_string`](crate::Oklch::to_css_string)
/// writes it.
fn parse_ok(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let (space, name) = if s.starts_with("oklab") {
        (ColorSpace::Oklab, "oklab")
    } else if s.starts_with("oklch") {
        (ColorSpace::Oklch, "oklch")
    } else {
        return Err(ColorFormatError::UnknownFormat);
    };

    let [c1, c2, c3] = split_coordinates(strip_function(s, name)?)?;

    #[inline]
    fn parse_coordinate(s: &str) -> Result<Float, ColorFormatError> {
        s.parse().map_err(|_| ColorFormatError::MalformedFloat)
    }

    let lightness = match c1.strip_suffix('%') {
        Some(percent) => parse_coordinate(percent)? / 100.0,
        None => parse_coordinate(c1)?,
    };

    Ok((
        space,
        [lightness, parse_coordinate(c2)?, parse_coordinate(c3)?],
    ))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes hexadecimal codes with three or six digits,
/// `rgb()` with integer channels, and the `oklab()` and `oklch()` functions
/// with comma- or space-separated coordinates. Before parsing, it trims
/// leading and trailing white space and converts ASCII letters to lowercase.
/// A bare string of three or six hexadecimal digits is a hexadecimal code.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') || ((s.len() == 3 || s.len() == 6) && s.is_ascii()) {
        let [c1, c2, c3] = parse_hashed(s)?;
        Ok((
            ColorSpace::Hex,
            [c1 as Float, c2 as Float, c3 as Float],
        ))
    } else if s.starts_with("rgb") {
        let [c1, c2, c3] = parse_rgb(s)?;
        Ok((
            ColorSpace::Rgb,
            [c1 as Float, c2 as Float, c3 as Float],
        ))
    } else {
        parse_ok(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format Oklab or Oklch coordinates.
///
/// This function formats the given coordinates with the `oklab()` or `oklch()`
/// function and space-separated arguments. It respects the formatter's
/// precision, defaulting to 5 digits past the decimal. Since degrees are up to
/// two orders of magnitude larger than the other coordinates, this function
/// uses a precision smaller by 2 for hues. It also omits trailing zeros.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(if space.is_polar() { "oklch(" } else { "oklab(" })?;

    let mut factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if space.is_polar() && index == 2 {
            factor = (factor / 100.0).max(1.0);
        }

        let c = (coordinate * factor).round() / factor;
        if c == c.trunc() {
            f.write_fmt(format_args!("{:.0}", c))?;
        } else {
            f.write_fmt(format_args!("{}", c))?;
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================
