#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for slmkit.

/// Colormap presets and nearest-value lookup.
pub mod colormap;
/// Device classes and the interface of displaying devices.
pub mod device;
/// Errors and warnings.
pub mod error;
/// Closed-form coordinate fields.
pub mod field;
/// Pattern types.
pub mod pattern;
