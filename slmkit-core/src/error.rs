use derive_more::Display;
use derive_new::new;
use getset::CopyGetters;
use thiserror::Error;

use crate::pattern::CanvasSize;

/// An error produced by an unrecognised or invalid configuration.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ConfigError {
    /// The device class is neither `phase` nor `amplitude`.
    #[error("Unknown device: {0}")]
    UnknownDevice(String),
    /// The colormap name is not a known preset.
    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),
    /// The rotation packing mode is neither `none` nor `45deg`.
    #[error("Unknown rotation packing: {0}")]
    UnknownRotationPack(String),
    /// The amplitude encoding method is not known.
    #[error("Unknown encode method: {0}")]
    UnknownEncodeMethod(String),
    /// The option key is not known.
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    /// The modulo is neither `none` nor a finite positive number.
    #[error("Invalid modulo: {0}")]
    InvalidModulo(String),
    /// The lookup table cannot be used for quantization.
    #[error("Invalid lookup table: {0}")]
    InvalidLookup(&'static str),
    /// The amplitude encoding method is recognised but has no implementation.
    #[error("Encode method {0} is not yet implemented")]
    NotImplemented(String),
    /// Neither a phase nor an amplitude pattern is given.
    #[error("Either a phase or an amplitude pattern must be supplied")]
    MissingPattern,
}

/// An error produced by mismatched array dimensions.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
#[non_exhaustive]
pub enum ShapeError {
    /// The target coefficient matrix does not have three rows.
    #[error("xyz must be 3×N, but has {0} rows")]
    CoefficientRows(usize),
    /// The number of amplitude weights differs from the number of targets.
    #[error("Number of amplitude weights ({actual}) must match the number of targets ({expected})")]
    WeightCount {
        /// The number of targets.
        expected: usize,
        /// The number of amplitude weights.
        actual: usize,
    },
    /// A basis field does not cover the canvas.
    #[error("{name} basis must be {expected}, but is {actual}")]
    BasisSize {
        /// The name of the basis field.
        name: &'static str,
        /// The canvas size.
        expected: CanvasSize,
        /// The size of the supplied field.
        actual: CanvasSize,
    },
    /// A pattern has an unexpected size.
    #[error("Pattern must be {expected}, but is {actual}")]
    PatternSize {
        /// The required size.
        expected: CanvasSize,
        /// The size of the supplied pattern.
        actual: CanvasSize,
    },
}

/// A non-fatal warning: the amplitude pattern exceeded unity and was normalized.
#[derive(Debug, Display, PartialEq, Clone, Copy, new, CopyGetters)]
#[display("Amplitude > 1.0, normalizing")]
pub struct RangeWarning {
    #[getset(get_copy = "pub")]
    /// The peak absolute amplitude before normalization.
    peak: f64,
}

#[derive(Error, Debug, Display, PartialEq, Clone, new)]
#[display("{}", msg)]
/// An error occurred while displaying a pattern on a device.
pub struct ShowError {
    #[new(into)]
    msg: String,
}
