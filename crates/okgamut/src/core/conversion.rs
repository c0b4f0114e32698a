use crate::Float;

/// The chroma below which a color is treated as achromatic. Grays converted
/// from RGB have a residual chroma of roughly 4e-8 with a meaningless hue.
const ACHROMATIC_THRESHOLD: Float = 1e-6;

/// Compute the dot product of the matrix row and the vector.
#[inline]
pub(crate) fn dot(row: &[Float; 3], vector: &[Float; 3]) -> Float {
    row[0].mul_add(vector[0], row[1].mul_add(vector[1], row[2] * vector[2]))
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;
    [dot(row1, vector), dot(row2, vector), dot(row3, vector)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-corrected sRGB coordinate in `0..=1` to linear sRGB.
#[inline]
fn srgb_to_linear(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear sRGB coordinate to gamma-corrected sRGB.
#[inline]
fn linear_to_srgb(value: Float) -> Float {
    if value < 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

/// Round half up, i.e., towards positive infinity, and convert to a channel
/// value. Out-of-range values are preserved, not clamped.
#[inline]
fn to_channel(value: Float) -> i32 {
    (value * 255.0 + 0.5).floor() as i32
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: [[Float; 3]; 3] = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const OKLAB_TO_LMS: [[Float; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

/// Convert 24-bit RGB to Oklab. Channels need not be in range.
pub(crate) fn rgb_to_oklab(rgb: &[i32; 3]) -> [Float; 3] {
    let linear = rgb.map(|c| srgb_to_linear(c as Float / 255.0));
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_LMS, &linear);
    multiply(&LMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert Oklab to linear sRGB without applying the transfer function.
pub(crate) fn oklab_to_linear_rgb(lab: &[Float; 3]) -> [Float; 3] {
    let lms = multiply(&OKLAB_TO_LMS, lab).map(|c| c * c * c);
    multiply(&LMS_TO_LINEAR_SRGB, &lms)
}

/// Convert Oklab to 24-bit RGB. The result is not clamped.
pub(crate) fn oklab_to_rgb(lab: &[Float; 3]) -> [i32; 3] {
    oklab_to_linear_rgb(lab).map(|c| to_channel(linear_to_srgb(c)))
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the hue to `0..360`. Not-a-number becomes zero.
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid returns 360.0 for tiny negative inputs.
    if hue.is_nan() || 360.0 <= hue {
        0.0
    } else {
        hue
    }
}

/// Determine the unit vector in the a/b plane for the hue in degrees.
#[inline]
pub(crate) fn hue_direction(hue: Float) -> [Float; 2] {
    let (sin, cos) = hue.to_radians().sin_cos();
    [cos, sin]
}

/// Convert Oklab to Oklch. Achromatic colors have hue zero.
pub(crate) fn oklab_to_oklch(lab: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *lab;
    let c = a.hypot(b);
    let h = if c < ACHROMATIC_THRESHOLD {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    [l, c, h]
}

/// Convert Oklch to Oklab.
pub(crate) fn oklch_to_oklab(lch: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *lch;
    let [a, b] = hue_direction(h);
    [l, c * a, c * b]
}

// ====================================================================================================================
