#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! This crate provides [`LensesAndPrisms`] that produces multiple steered and focused beams.

mod backend;
mod backend_nalgebra;
mod basis;
mod beam;
mod error;
mod lenses_and_prisms;

pub use backend::Backend;
pub use backend_nalgebra::NalgebraBackend;
pub use basis::{BasisFields, BasisOverrides};
pub use beam::{TargetBeam, Targets};
pub use error::HoloError;
pub use lenses_and_prisms::{lenses_and_prisms, LensesAndPrisms, LensesAndPrismsOption};
