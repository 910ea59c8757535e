#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Pattern computation and encoding for holographic beam-shaping devices.
//!
//! [`holo::LensesAndPrisms`] computes a phase-only pattern that steers and focuses multiple beams,
//! and [`finalize::PatternEncoder`] converts phase and amplitude patterns into device-ready values.

/// Showable devices.
pub mod device;
/// Errors.
pub mod error;
/// The finalize pipeline.
pub mod finalize;
/// Commonly used items.
pub mod prelude;

pub use slmkit_core::{colormap, field, pattern};
pub use slmkit_holo as holo;
