use slmkit_core::error::ShapeError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
/// An error produced by [`LensesAndPrisms`].
///
/// [`LensesAndPrisms`]: crate::LensesAndPrisms
pub enum HoloError {
    /// The targets or the basis fields have unexpected dimensions.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The computation backend failed.
    #[error("{0}")]
    BackendError(String),
}
