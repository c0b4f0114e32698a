use crate::error::UnknownMethodError;
use crate::Float;

/// Compute Delta-E for Oklab, i.e., the Euclidean distance.
#[allow(non_snake_case)]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color—or `None` if there are no candidates.
pub(crate) fn find_closest<C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, &candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

// --------------------------------------------------------------------------------------------------------------------

/// A choice of path for interpolating between two colors.
///
/// This enum is used by [`interpolate`](crate::adjust::interpolate).
///
/// Since hues are expressed as angles, the same perceptual hue has an infinite
/// number of representations modulo 360. Furthermore, there are two ways of
/// interpolating between two hues, clockwise and counter-clockwise. The first
/// four variants select the way based either on the distance between hues,
/// [`HuePath::Shortest`] and [`HuePath::Longest`], or on the direction,
/// [`HuePath::Increasing`] and [`HuePath::Decreasing`]. The last variant,
/// [`HuePath::Oklab`], sidesteps hues altogether and interpolates along the
/// straight line in Oklab, which passes closer to gray.
///
/// The textual names accepted by [`FromStr`](std::str::FromStr) are
/// `shortest`, `longest`, `increasing`, `decreasing`, and `use_OKLAB`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HuePath {
    /// Take the shorter arc between the two hue angles.
    #[default]
    Shortest,
    /// Take the longer arc between the two hue angles.
    Longest,
    /// Keep increasing hue angles.
    Increasing,
    /// Keep decreasing hue angles.
    Decreasing,
    /// Interpolate a and b in Oklab instead of hue.
    Oklab,
}

impl HuePath {
    /// The names of all hue paths.
    pub const NAMES: &'static [&'static str] =
        &["shortest", "longest", "increasing", "decreasing", "use_OKLAB"];

    /// Get this hue path's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Shortest => "shortest",
            Self::Longest => "longest",
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Oklab => "use_OKLAB",
        }
    }
}

impl std::str::FromStr for HuePath {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortest" => Ok(Self::Shortest),
            "longest" => Ok(Self::Longest),
            "increasing" => Ok(Self::Increasing),
            "decreasing" => Ok(Self::Decreasing),
            "use_OKLAB" | "oklab" => Ok(Self::Oklab),
            _ => Err(UnknownMethodError::new(s, Self::NAMES)),
        }
    }
}

impl std::fmt::Display for HuePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Adjust the pair of hues based on the interpolation path.
///
/// For [`HuePath::Oklab`], hues are irrelevant and pass through unchanged.
pub(crate) fn prepare_hue_interpolation(path: HuePath, h1: Float, h2: Float) -> [Float; 2] {
    let delta = h2 - h1;
    match path {
        HuePath::Shortest => {
            if 180.0 < delta {
                return [h1 + 360.0, h2];
            } else if delta < -180.0 {
                return [h1, h2 + 360.0];
            }
        }
        HuePath::Longest => {
            if 0.0 < delta && delta < 180.0 {
                return [h1 + 360.0, h2];
            } else if -180.0 < delta && delta <= 0.0 {
                return [h1, h2 + 360.0];
            }
        }
        HuePath::Increasing => {
            if h2 < h1 {
                return [h1, h2 + 360.0];
            }
        }
        HuePath::Decreasing => {
            if h1 < h2 {
                return [h1 + 360.0, h2];
            }
        }
        HuePath::Oklab => (),
    }

    [h1, h2]
}

#[cfg(test)]
mod test {
    use super::{delta_e_ok, find_closest, prepare_hue_interpolation, HuePath};
    use crate::assert_close_enough;

    #[test]
    fn test_delta_e() {
        assert_close_enough!(delta_e_ok(&[0.5, 0.1, 0.1], &[0.5, 0.1, 0.1]), 0.0);
        assert_close_enough!(delta_e_ok(&[0.0, 0.3, 0.0], &[0.0, 0.0, 0.4]), 0.5);
        assert_close_enough!(
            delta_e_ok(&[0.2, 0.1, -0.1], &[0.7, 0.0, 0.05]),
            delta_e_ok(&[0.7, 0.0, 0.05], &[0.2, 0.1, -0.1]),
        );
    }

    #[test]
    fn test_find_closest() {
        let candidates = [[0.0, 0.0, 0.0], [0.5, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let index = find_closest(&[0.6, 0.0, 0.0], candidates, delta_e_ok);
        assert_eq!(index, Some(1));

        let index = find_closest(&[0.6, 0.0, 0.0], [], delta_e_ok);
        assert_eq!(index, None);
    }

    #[test]
    fn test_hue_paths() {
        use HuePath::*;

        assert_eq!(prepare_hue_interpolation(Shortest, 30.0, 60.0), [30.0, 60.0]);
        assert_eq!(prepare_hue_interpolation(Shortest, 30.0, 264.0), [390.0, 264.0]);
        assert_eq!(prepare_hue_interpolation(Shortest, 264.0, 30.0), [264.0, 390.0]);
        assert_eq!(prepare_hue_interpolation(Longest, 30.0, 60.0), [390.0, 60.0]);
        assert_eq!(prepare_hue_interpolation(Longest, 60.0, 30.0), [60.0, 390.0]);
        assert_eq!(prepare_hue_interpolation(Longest, 30.0, 264.0), [30.0, 264.0]);
        assert_eq!(prepare_hue_interpolation(Increasing, 60.0, 30.0), [60.0, 390.0]);
        assert_eq!(prepare_hue_interpolation(Increasing, 30.0, 60.0), [30.0, 60.0]);
        assert_eq!(prepare_hue_interpolation(Decreasing, 30.0, 60.0), [390.0, 60.0]);
        assert_eq!(prepare_hue_interpolation(Decreasing, 60.0, 30.0), [60.0, 30.0]);
        assert_eq!(prepare_hue_interpolation(Oklab, 30.0, 264.0), [30.0, 264.0]);
    }

    #[test]
    fn test_parse_hue_path() {
        assert_eq!("shortest".parse::<HuePath>(), Ok(HuePath::Shortest));
        assert_eq!("use_OKLAB".parse::<HuePath>(), Ok(HuePath::Oklab));
        assert_eq!(HuePath::Decreasing.to_string(), "decreasing");

        let Err(error) = "sideways".parse::<HuePath>() else {
            panic!("sideways should not be a hue path");
        };
        assert!(error.to_string().contains("sideways"));
        assert!(error.to_string().contains("use_OKLAB"));
    }
}
