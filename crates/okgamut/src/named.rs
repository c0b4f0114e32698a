//! The web colors.
//!
//! This module provides the 140 named colors of CSS and HTML, including the
//! aliases `Aqua`/`Cyan` and `Fuchsia`/`Magenta`. The table groups colors by
//! family. Names are in camel case, but lookup by name ignores case.

use crate::core::{delta_e_ok, find_closest};
use crate::{ColorModel, Hex};

/// The web colors by name.
pub static NAMED_COLORS: &[(&str, Hex)] = &[
    ("MediumVioletRed", Hex::new(0xc7, 0x15, 0x85)),
    ("DeepPink", Hex::new(0xff, 0x14, 0x93)),
    ("PaleVioletRed", Hex::new(0xdb, 0x70, 0x93)),
    ("HotPink", Hex::new(0xff, 0x69, 0xb4)),
    ("LightPink", Hex::new(0xff, 0xb6, 0xc1)),
    ("Pink", Hex::new(0xff, 0xc0, 0xcb)),
    ("DarkRed", Hex::new(0x8b, 0x00, 0x00)),
    ("Red", Hex::new(0xff, 0x00, 0x00)),
    ("Firebrick", Hex::new(0xb2, 0x22, 0x22)),
    ("Crimson", Hex::new(0xdc, 0x14, 0x3c)),
    ("IndianRed", Hex::new(0xcd, 0x5c, 0x5c)),
    ("LightCoral", Hex::new(0xf0, 0x80, 0x80)),
    ("Salmon", Hex::new(0xfa, 0x80, 0x72)),
    ("DarkSalmon", Hex::new(0xe9, 0x96, 0x7a)),
    ("LightSalmon", Hex::new(0xff, 0xa0, 0x7a)),
    ("OrangeRed", Hex::new(0xff, 0x45, 0x00)),
    ("Tomato", Hex::new(0xff, 0x63, 0x47)),
    ("DarkOrange", Hex::new(0xff, 0x8c, 0x00)),
    ("Coral", Hex::new(0xff, 0x7f, 0x50)),
    ("Orange", Hex::new(0xff, 0xa5, 0x00)),
    ("DarkKhaki", Hex::new(0xbd, 0xb7, 0x6b)),
    ("Gold", Hex::new(0xff, 0xd7, 0x00)),
    ("Khaki", Hex::new(0xf0, 0xe6, 0x8c)),
    ("PeachPuff", Hex::new(0xff, 0xda, 0xb9)),
    ("Yellow", Hex::new(0xff, 0xff, 0x00)),
    ("PaleGoldenrod", Hex::new(0xee, 0xe8, 0xaa)),
    ("Moccasin", Hex::new(0xff, 0xe4, 0xb5)),
    ("PapayaWhip", Hex::new(0xff, 0xef, 0xd5)),
    ("LightGoldenrodYellow", Hex::new(0xfa, 0xfa, 0xd2)),
    ("LemonChiffon", Hex::new(0xff, 0xfa, 0xcd)),
    ("LightYellow", Hex::new(0xff, 0xff, 0xe0)),
    ("Maroon", Hex::new(0x80, 0x00, 0x00)),
    ("Brown", Hex::new(0xa5, 0x2a, 0x2a)),
    ("SaddleBrown", Hex::new(0x8b, 0x45, 0x13)),
    ("Sienna", Hex::new(0xa0, 0x52, 0x2d)),
    ("Chocolate", Hex::new(0xd2, 0x69, 0x1e)),
    ("DarkGoldenrod", Hex::new(0xb8, 0x86, 0x0b)),
    ("Peru", Hex::new(0xcd, 0x85, 0x3f)),
    ("RosyBrown", Hex::new(0xbc, 0x8f, 0x8f)),
    ("Goldenrod", Hex::new(0xda, 0xa5, 0x20)),
    ("SandyBrown", Hex::new(0xf4, 0xa4, 0x60)),
    ("Tan", Hex::new(0xd2, 0xb4, 0x8c)),
    ("Burlywood", Hex::new(0xde, 0xb8, 0x87)),
    ("Wheat", Hex::new(0xf5, 0xde, 0xb3)),
    ("NavajoWhite", Hex::new(0xff, 0xde, 0xad)),
    ("Bisque", Hex::new(0xff, 0xe4, 0xc4)),
    ("BlanchedAlmond", Hex::new(0xff, 0xeb, 0xcd)),
    ("Cornsilk", Hex::new(0xff, 0xf8, 0xdc)),
    ("Indigo", Hex::new(0x4b, 0x00, 0x82)),
    ("Purple", Hex::new(0x80, 0x00, 0x80)),
    ("DarkMagenta", Hex::new(0x8b, 0x00, 0x8b)),
    ("DarkViolet", Hex::new(0x94, 0x00, 0xd3)),
    ("DarkSlateBlue", Hex::new(0x48, 0x3d, 0x8b)),
    ("BlueViolet", Hex::new(0x8a, 0x2b, 0xe2)),
    ("DarkOrchid", Hex::new(0x99, 0x32, 0xcc)),
    ("Fuchsia", Hex::new(0xff, 0x00, 0xff)),
    ("Magenta", Hex::new(0xff, 0x00, 0xff)),
    ("SlateBlue", Hex::new(0x6a, 0x5a, 0xcd)),
    ("MediumSlateBlue", Hex::new(0x7b, 0x68, 0xee)),
    ("MediumOrchid", Hex::new(0xba, 0x55, 0xd3)),
    ("MediumPurple", Hex::new(0x93, 0x70, 0xdb)),
    ("Orchid", Hex::new(0xda, 0x70, 0xd6)),
    ("Violet", Hex::new(0xee, 0x82, 0xee)),
    ("Plum", Hex::new(0xdd, 0xa0, 0xdd)),
    ("Thistle", Hex::new(0xd8, 0xbf, 0xd8)),
    ("Lavender", Hex::new(0xe6, 0xe6, 0xfa)),
    ("MidnightBlue", Hex::new(0x19, 0x19, 0x70)),
    ("Navy", Hex::new(0x00, 0x00, 0x80)),
    ("DarkBlue", Hex::new(0x00, 0x00, 0x8b)),
    ("MediumBlue", Hex::new(0x00, 0x00, 0xcd)),
    ("Blue", Hex::new(0x00, 0x00, 0xff)),
    ("RoyalBlue", Hex::new(0x41, 0x69, 0xe1)),
    ("SteelBlue", Hex::new(0x46, 0x82, 0xb4)),
    ("DodgerBlue", Hex::new(0x1e, 0x90, 0xff)),
    ("DeepSkyBlue", Hex::new(0x00, 0xbf, 0xff)),
    ("CornflowerBlue", Hex::new(0x64, 0x95, 0xed)),
    ("SkyBlue", Hex::new(0x87, 0xce, 0xeb)),
    ("LightSkyBlue", Hex::new(0x87, 0xce, 0xfa)),
    ("LightSteelBlue", Hex::new(0xb0, 0xc4, 0xde)),
    ("LightBlue", Hex::new(0xad, 0xd8, 0xe6)),
    ("PowderBlue", Hex::new(0xb0, 0xe0, 0xe6)),
    ("Teal", Hex::new(0x00, 0x80, 0x80)),
    ("DarkCyan", Hex::new(0x00, 0x8b, 0x8b)),
    ("LightSeaGreen", Hex::new(0x20, 0xb2, 0xaa)),
    ("CadetBlue", Hex::new(0x5f, 0x9e, 0xa0)),
    ("DarkTurquoise", Hex::new(0x00, 0xce, 0xd1)),
    ("MediumTurquoise", Hex::new(0x48, 0xd1, 0xcc)),
    ("Turquoise", Hex::new(0x40, 0xe0, 0xd0)),
    ("Aqua", Hex::new(0x00, 0xff, 0xff)),
    ("Cyan", Hex::new(0x00, 0xff, 0xff)),
    ("Aquamarine", Hex::new(0x7f, 0xff, 0xd4)),
    ("PaleTurquoise", Hex::new(0xaf, 0xee, 0xee)),
    ("LightCyan", Hex::new(0xe0, 0xff, 0xff)),
    ("DarkGreen", Hex::new(0x00, 0x64, 0x00)),
    ("Green", Hex::new(0x00, 0x80, 0x00)),
    ("DarkOliveGreen", Hex::new(0x55, 0x6b, 0x2f)),
    ("ForestGreen", Hex::new(0x22, 0x8b, 0x22)),
    ("SeaGreen", Hex::new(0x2e, 0x8b, 0x57)),
    ("Olive", Hex::new(0x80, 0x80, 0x00)),
    ("OliveDrab", Hex::new(0x6b, 0x8e, 0x23)),
    ("MediumSeaGreen", Hex::new(0x3c, 0xb3, 0x71)),
    ("LimeGreen", Hex::new(0x32, 0xcd, 0x32)),
    ("Lime", Hex::new(0x00, 0xff, 0x00)),
    ("SpringGreen", Hex::new(0x00, 0xff, 0x7f)),
    ("MediumSpringGreen", Hex::new(0x00, 0xfa, 0x9a)),
    ("DarkSeaGreen", Hex::new(0x8f, 0xbc, 0x8f)),
    ("MediumAquamarine", Hex::new(0x66, 0xcd, 0xaa)),
    ("YellowGreen", Hex::new(0x9a, 0xcd, 0x32)),
    ("LawnGreen", Hex::new(0x7c, 0xfc, 0x00)),
    ("Chartreuse", Hex::new(0x7f, 0xff, 0x00)),
    ("LightGreen", Hex::new(0x90, 0xee, 0x90)),
    ("GreenYellow", Hex::new(0xad, 0xff, 0x2f)),
    ("PaleGreen", Hex::new(0x98, 0xfb, 0x98)),
    ("MistyRose", Hex::new(0xff, 0xe4, 0xe1)),
    ("AntiqueWhite", Hex::new(0xfa, 0xeb, 0xd7)),
    ("Linen", Hex::new(0xfa, 0xf0, 0xe6)),
    ("Beige", Hex::new(0xf5, 0xf5, 0xdc)),
    ("WhiteSmoke", Hex::new(0xf5, 0xf5, 0xf5)),
    ("LavenderBlush", Hex::new(0xff, 0xf0, 0xf5)),
    ("OldLace", Hex::new(0xfd, 0xf5, 0xe6)),
    ("AliceBlue", Hex::new(0xf0, 0xf8, 0xff)),
    ("Seashell", Hex::new(0xff, 0xf5, 0xee)),
    ("GhostWhite", Hex::new(0xf8, 0xf8, 0xff)),
    ("Honeydew", Hex::new(0xf0, 0xff, 0xf0)),
    ("FloralWhite", Hex::new(0xff, 0xfa, 0xf0)),
    ("Azure", Hex::new(0xf0, 0xff, 0xff)),
    ("MintCream", Hex::new(0xf5, 0xff, 0xfa)),
    ("Snow", Hex::new(0xff, 0xfa, 0xfa)),
    ("Ivory", Hex::new(0xff, 0xff, 0xf0)),
    ("White", Hex::new(0xff, 0xff, 0xff)),
    ("Black", Hex::new(0x00, 0x00, 0x00)),
    ("DarkSlateGray", Hex::new(0x2f, 0x4f, 0x4f)),
    ("DimGray", Hex::new(0x69, 0x69, 0x69)),
    ("SlateGray", Hex::new(0x70, 0x80, 0x90)),
    ("Gray", Hex::new(0x80, 0x80, 0x80)),
    ("LightSlateGray", Hex::new(0x77, 0x88, 0x99)),
    ("DarkGray", Hex::new(0xa9, 0xa9, 0xa9)),
    ("Silver", Hex::new(0xc0, 0xc0, 0xc0)),
    ("LightGray", Hex::new(0xd3, 0xd3, 0xd3)),
    ("Gainsboro", Hex::new(0xdc, 0xdc, 0xdc)),
];

/// Look up the web color with the given name, ignoring case.
///
/// ```
/// # use okgamut::{named::find_named, Hex};
/// assert_eq!(find_named("papayawhip"), Some(Hex::new(0xff, 0xef, 0xd5)));
/// assert_eq!(find_named("octarine"), None);
/// ```
pub fn find_named(name: &str) -> Option<Hex> {
    NAMED_COLORS
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

/// Find the web color closest to the given color.
///
/// This function measures the Euclidean distance in Oklab. For aliases with
/// the same code, it returns the first name in table order.
pub fn closest_named<C: ColorModel + ?Sized>(color: &C) -> (&'static str, Hex) {
    let origin = color.to_oklab().coordinates();
    let index = find_closest(
        &origin,
        NAMED_COLORS
            .iter()
            .map(|(_, hex)| hex.to_oklab().coordinates()),
        delta_e_ok,
    )
    .unwrap_or(0);

    NAMED_COLORS[index]
}

/// Pick a web color at random.
#[cfg(feature = "rand")]
pub fn random_named<R: rand::Rng + ?Sized>(rng: &mut R) -> (&'static str, Hex) {
    NAMED_COLORS[rng.random_range(0..NAMED_COLORS.len())]
}

// ====================================================================================================================
