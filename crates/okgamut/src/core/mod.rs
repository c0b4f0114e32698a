mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{
    hue_direction, normalize_hue, oklab_to_linear_rgb, oklab_to_oklch, oklab_to_rgb,
    oklch_to_oklab, rgb_to_oklab,
};

// difference
pub use difference::HuePath;
pub(crate) use difference::{delta_e_ok, find_closest, prepare_hue_interpolation};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// gamut
pub(crate) use gamut::{cusp, intersect, max_saturation};

// math
pub(crate) use math::{ceil_to, floor_to, lerp, FloatExt};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse, parse_hashed, parse_rgb};
