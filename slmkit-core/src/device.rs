use std::str::FromStr;

use derive_more::Display;

use crate::{
    error::{ConfigError, ShowError},
    pattern::{CanvasSize, ComplexPattern, EncodedPattern},
};

/// The class of a beam-shaping device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DeviceClass {
    /// A device that modulates only the phase of each pixel, e.g. a liquid crystal spatial light modulator.
    #[default]
    #[display("phase")]
    Phase,
    /// A device that modulates the amplitude of each pixel, e.g. a digital micromirror device.
    #[display("amplitude")]
    Amplitude,
}

impl FromStr for DeviceClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phase" => Ok(Self::Phase),
            "amplitude" => Ok(Self::Amplitude),
            _ => Err(ConfigError::UnknownDevice(s.to_string())),
        }
    }
}

/// A trait that provides the interface with a device that displays patterns.
pub trait Showable {
    /// The class of the device.
    #[must_use]
    fn device_class(&self) -> DeviceClass;

    /// The resolution of the device.
    #[must_use]
    fn size(&self) -> CanvasSize;

    /// The field illuminating the device, if known.
    #[must_use]
    fn incident(&self) -> Option<&ComplexPattern> {
        None
    }

    /// Displays an already finalized pattern.
    fn show_raw(&mut self, pattern: &EncodedPattern) -> Result<(), ShowError>;
}

impl Showable for Box<dyn Showable> {
    fn device_class(&self) -> DeviceClass {
        self.as_ref().device_class()
    }

    fn size(&self) -> CanvasSize {
        self.as_ref().size()
    }

    fn incident(&self) -> Option<&ComplexPattern> {
        self.as_ref().incident()
    }

    fn show_raw(&mut self, pattern: &EncodedPattern) -> Result<(), ShowError> {
        self.as_mut().show_raw(pattern)
    }
}
