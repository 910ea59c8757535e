use getset::{CopyGetters, Getters};

use crate::{error::ConfigError, pattern::Pattern};

/// A lookup table that quantizes normalized values onto a discrete set of levels.
///
/// A value `v` is first mapped to `lo + v * (hi - lo)` and then replaced by the nearest level.
/// When a value is equally close to two levels, the lower one is taken.
/// A periodic table treats `hi` as `lo` one period later, so values near `hi` snap to `lo`.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ColorLookupRepr", into = "ColorLookupRepr")
)]
pub struct ColorLookup {
    #[getset(get = "pub")]
    /// The output range `(lo, hi)` that the normalized domain `[0, 1]` is mapped to.
    range: (f64, f64),
    #[getset(get = "pub")]
    /// The discrete output levels in ascending order.
    levels: Vec<f64>,
    #[getset(get_copy = "pub")]
    /// Whether the output range is one period of a cyclic quantity.
    periodic: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ColorLookupRepr {
    range: (f64, f64),
    levels: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ColorLookupRepr> for ColorLookup {
    type Error = ConfigError;

    fn try_from(repr: ColorLookupRepr) -> Result<Self, Self::Error> {
        Self::new(repr.range, repr.levels)
    }
}

#[cfg(feature = "serde")]
impl From<ColorLookup> for ColorLookupRepr {
    fn from(lut: ColorLookup) -> Self {
        Self {
            range: lut.range,
            levels: lut.levels,
        }
    }
}

impl ColorLookup {
    /// Creates a new [`ColorLookup`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLookup`] if `levels` is empty, has non-finite values or is not sorted.
    pub fn new(range: (f64, f64), levels: Vec<f64>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::InvalidLookup("levels must not be empty"));
        }
        if !range.0.is_finite() || !range.1.is_finite() || levels.iter().any(|v| !v.is_finite())
        {
            return Err(ConfigError::InvalidLookup("values must be finite"));
        }
        if levels.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::InvalidLookup(
                "levels must be sorted in ascending order",
            ));
        }
        Ok(Self {
            range,
            levels,
            periodic: false,
        })
    }

    /// A table with `n` evenly spaced levels from `lo` to `hi`.
    ///
    /// If `periodic` is `true`, `hi` is the same value as `lo` after one period and is excluded from the levels.
    pub(crate) fn linear(lo: f64, hi: f64, n: usize, periodic: bool) -> Self {
        let steps = if periodic { n } else { n - 1 } as f64;
        Self {
            range: (lo, hi),
            levels: (0..n).map(|k| lo + (hi - lo) * k as f64 / steps).collect(),
            periodic,
        }
    }

    /// Returns the level nearest to `value`, which is already in the output range.
    #[must_use]
    pub fn nearest(&self, value: f64) -> f64 {
        let levels = &self.levels;
        if self.periodic {
            let (lo, hi) = self.range;
            let period = hi - lo;
            let value = lo + (value - lo).rem_euclid(period);
            let top = levels[levels.len() - 1];
            if value > top {
                // `hi` stands for the first level.
                return if value - top <= hi - value { top } else { levels[0] };
            }
            return self.nearest_clamped(value);
        }
        self.nearest_clamped(value)
    }

    fn nearest_clamped(&self, value: f64) -> f64 {
        let levels = &self.levels;
        let i = levels.partition_point(|&l| l < value);
        if i == 0 {
            levels[0]
        } else if i == levels.len() {
            levels[levels.len() - 1]
        } else {
            let (below, above) = (levels[i - 1], levels[i]);
            if value - below <= above - value {
                below
            } else {
                above
            }
        }
    }

    /// Maps a normalized value and returns the nearest level.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (lo, hi) = self.range;
        self.nearest(lo + value * (hi - lo))
    }

    /// Quantizes every value of `pattern`.
    #[must_use]
    pub fn quantize(&self, pattern: &Pattern) -> Pattern {
        pattern.map(|v| self.map(v))
    }

    /// Returns `true` if `value` is one of the levels.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.levels
            .binary_search_by(|l| l.total_cmp(&value))
            .is_ok()
    }
}
