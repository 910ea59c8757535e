mod lookup;

use std::{borrow::Cow, f64::consts::PI, str::FromStr};

use derive_more::Display;

pub use lookup::ColorLookup;

use crate::{error::ConfigError, pattern::Pattern};

/// The number of levels of 8-bit presets.
pub const NUM_LEVELS_8BIT: usize = 256;

/// Quantization preset of the finalized pattern.
///
/// Every preset maps the normalized domain `[0, 1)` of a pattern onto the native values of a device.
#[derive(Clone, Debug, PartialEq, Display)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Colormap {
    /// Phase in radians, `[-π, π)`.
    #[display("pmpi")]
    Pmpi,
    /// Phase in radians, `[0, 2π)`.
    #[display("2pi")]
    #[cfg_attr(feature = "serde", serde(rename = "2pi"))]
    TwoPi,
    /// Binary, `{0, 1}`.
    #[display("bin")]
    Bin,
    /// Gray levels, `[0, 1]`.
    #[display("gray")]
    Gray,
    /// User supplied lookup table.
    #[display("custom")]
    Custom(ColorLookup),
}

impl Colormap {
    /// The lookup table of the colormap.
    #[must_use]
    pub fn lookup(&self) -> Cow<'_, ColorLookup> {
        match self {
            Self::Pmpi => Cow::Owned(ColorLookup::linear(-PI, PI, NUM_LEVELS_8BIT, true)),
            Self::TwoPi => Cow::Owned(ColorLookup::linear(0., 2. * PI, NUM_LEVELS_8BIT, true)),
            Self::Bin => Cow::Owned(ColorLookup::linear(0., 1., 2, false)),
            Self::Gray => Cow::Owned(ColorLookup::linear(0., 1., NUM_LEVELS_8BIT, false)),
            Self::Custom(lut) => Cow::Borrowed(lut),
        }
    }
}

impl FromStr for Colormap {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pmpi" => Ok(Self::Pmpi),
            "2pi" => Ok(Self::TwoPi),
            "bin" => Ok(Self::Bin),
            "gray" => Ok(Self::Gray),
            _ => Err(ConfigError::UnknownColormap(s.to_string())),
        }
    }
}

/// Quantizes `pattern` with the lookup table of `colormap`.
#[must_use]
pub fn quantize(pattern: &Pattern, colormap: &Colormap) -> Pattern {
    colormap.lookup().quantize(pattern)
}
