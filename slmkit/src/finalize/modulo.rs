use std::str::FromStr;

use derive_more::Display;
use slmkit_core::{error::ConfigError, pattern::Pattern};

/// Elementwise wrapping of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Display)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Modulo {
    /// Pass the pattern through unchanged.
    #[display("none")]
    Disabled,
    /// Wrap every value into `[0, m)`.
    #[display("{_0}")]
    Value(f64),
}

impl Modulo {
    /// Checks that the period is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidModulo`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Value(m) if !(m.is_finite() && m > 0.) => {
                Err(ConfigError::InvalidModulo(m.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Applies the modulo to every value of `pattern`.
    ///
    /// The period must have been validated.
    #[must_use]
    pub fn apply(&self, pattern: Pattern) -> Pattern {
        match *self {
            Self::Disabled => pattern,
            Self::Value(m) => pattern.map(|v| wrap(v, m)),
        }
    }
}

// `rem_euclid` may round up to `m` for tiny negative values.
#[inline]
fn wrap(v: f64, m: f64) -> f64 {
    let r = v.rem_euclid(m);
    if r < m {
        r
    } else {
        0.
    }
}

impl FromStr for Modulo {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(Self::Disabled);
        }
        let m = Self::Value(
            s.trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidModulo(s.to_string()))?,
        );
        m.validate().map_err(|_| ConfigError::InvalidModulo(s.to_string()))?;
        Ok(m)
    }
}
