use std::{f64::consts::PI, sync::Arc};

use derive_more::Debug;
use nalgebra::DMatrix;
use slmkit_core::pattern::{CanvasSize, Complex, Pattern};

use crate::{Backend, BasisFields, BasisOverrides, HoloError, NalgebraBackend, TargetBeam, Targets};

/// The option of [`LensesAndPrisms`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LensesAndPrismsOption {
    /// The basis fields replacing the defaults.
    pub basis: BasisOverrides,
}

/// Multiple beams by coherent superposition of lenses and gratings
///
/// Every target contributes `amplitude * exp(i 2π (lens_power * lens + gradient_x * x + gradient_y * y))`
/// to a single complex accumulator, and the argument of the sum is emitted as a phase-only pattern in `[0, 1)`.
#[derive(Debug)]
pub struct LensesAndPrisms<B: Backend> {
    /// The targets in summation order.
    pub targets: Targets,
    /// The option of the hologram.
    pub option: LensesAndPrismsOption,
    /// The backend of the calculation.
    #[debug("{}", tynm::type_name::<B>())]
    pub backend: Arc<B>,
}

impl LensesAndPrisms<NalgebraBackend> {
    /// Create a new [`LensesAndPrisms`] computed on the host.
    #[must_use]
    pub fn new(targets: impl IntoIterator<Item = TargetBeam>) -> Self {
        Self::with_backend(
            targets,
            LensesAndPrismsOption::default(),
            Arc::new(NalgebraBackend::default()),
        )
    }
}

impl<B: Backend> LensesAndPrisms<B> {
    /// Create a new [`LensesAndPrisms`] with the given backend.
    #[must_use]
    pub fn with_backend(
        targets: impl IntoIterator<Item = TargetBeam>,
        option: LensesAndPrismsOption,
        backend: Arc<B>,
    ) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            option,
            backend,
        }
    }

    /// Create a new [`LensesAndPrisms`] from a `3×N` coefficient matrix and `N` weights.
    ///
    /// # Errors
    ///
    /// See [`Targets::from_coefficients`].
    pub fn from_coefficients(
        xyz: &DMatrix<f64>,
        amplitude: Option<&[f64]>,
        option: LensesAndPrismsOption,
        backend: Arc<B>,
    ) -> Result<Self, HoloError> {
        Ok(Self {
            targets: Targets::from_coefficients(xyz, amplitude)?,
            option,
            backend,
        })
    }

    /// Computes the phase pattern on a canvas of `size`.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::Shape`] if a basis field of the option does not match `size`.
    pub fn compute(&self, size: impl Into<CanvasSize>) -> Result<Pattern, HoloError> {
        let basis = BasisFields::with_overrides(size, &self.option.basis)?;
        self.compute_with_basis(&basis)
    }

    /// Computes the phase pattern with precomputed basis fields, which can be reused across calls.
    ///
    /// The basis fields of the option are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::BackendError`] if the backend fails to compute or gather the field.
    pub fn compute_with_basis(&self, basis: &BasisFields) -> Result<Pattern, HoloError> {
        let field = self.compute_field(basis)?;
        let field = self.backend.to_host_c(field)?;
        Ok(field.map(normalized_phase))
    }

    /// Computes the superposed complex field without gathering it to the host.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::BackendError`] if the backend fails to allocate or accumulate the field.
    pub fn compute_field(&self, basis: &BasisFields) -> Result<B::ComplexPattern, HoloError> {
        tracing::debug!(
            "Superposing {} targets on {} canvas with {}.",
            self.targets.len(),
            basis.size(),
            tynm::type_name::<B>()
        );
        let mut acc = self.backend.alloc_zeros_c(basis.size())?;
        self.targets
            .iter()
            .try_for_each(|beam| self.backend.add_wavefront(basis, beam, &mut acc))?;
        Ok(acc)
    }
}

/// Maps the argument of `c` from `(-π, π]` to `[0, 1)`.
#[inline]
fn normalized_phase(c: Complex) -> f64 {
    ((c.arg() / PI + 1.) / 2.).rem_euclid(1.)
}

/// Computes a lenses-and-prisms phase pattern on the host.
///
/// `xyz` is the `3×N` matrix of `(gradient_x, gradient_y, lens_power)` columns,
/// `amplitude` the `N` weights (all ones if `None`).
///
/// # Errors
///
/// Returns [`HoloError::Shape`] if `xyz` does not have three rows, the number of weights is not `N`,
/// or a basis override does not match `size`. Shapes are checked before any computation.
pub fn lenses_and_prisms(
    size: impl Into<CanvasSize>,
    xyz: &DMatrix<f64>,
    amplitude: Option<&[f64]>,
    overrides: &BasisOverrides,
) -> Result<Pattern, HoloError> {
    let targets = Targets::from_coefficients(xyz, amplitude)?;
    let basis = BasisFields::with_overrides(size, overrides)?;
    LensesAndPrisms {
        targets,
        option: LensesAndPrismsOption::default(),
        backend: Arc::new(NalgebraBackend::default()),
    }
    .compute_with_basis(&basis)
}
