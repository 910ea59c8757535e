use slmkit_core::pattern::{CanvasSize, ComplexPattern};

use crate::{BasisFields, HoloError, TargetBeam};

/// Calculation backend of [`LensesAndPrisms`].
///
/// The accumulator may reside outside the host memory; [`to_host_c`](Backend::to_host_c) gathers it back.
///
/// [`LensesAndPrisms`]: crate::LensesAndPrisms
pub trait Backend {
    /// The complex accumulator type of the backend.
    type ComplexPattern;

    /// Allocates a zero-filled accumulator.
    fn alloc_zeros_c(&self, size: CanvasSize) -> Result<Self::ComplexPattern, HoloError>;

    /// Adds the wavefront `amplitude * exp(i 2π (lens_power * lens + gradient_x * x + gradient_y * y))` of `beam` to `acc`.
    fn add_wavefront(
        &self,
        basis: &BasisFields,
        beam: &TargetBeam,
        acc: &mut Self::ComplexPattern,
    ) -> Result<(), HoloError>;

    /// Copies the accumulator into the host memory.
    fn to_host_c(&self, acc: Self::ComplexPattern) -> Result<ComplexPattern, HoloError>;
}
