use slmkit_core::error::{ConfigError, ShapeError, ShowError};
use slmkit_holo::HoloError;
use thiserror::Error;

/// An error produced by slmkit.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum SlmError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An array has unexpected dimensions.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The hologram computation failed.
    #[error(transparent)]
    Holo(#[from] HoloError),
    /// The device failed to display a pattern.
    #[error(transparent)]
    Show(#[from] ShowError),
}
