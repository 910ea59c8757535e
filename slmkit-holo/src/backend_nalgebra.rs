use std::f64::consts::TAU;

use slmkit_core::pattern::{CanvasSize, Complex, ComplexPattern};

use crate::{Backend, BasisFields, HoloError, TargetBeam};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// [`Backend`] using [`nalgebra`] on the host.
///
/// Each pixel accumulates the targets in the given order, so the parallel mode gives exactly the same result as the sequential one.
///
/// [`nalgebra`]: https://docs.rs/nalgebra/latest/nalgebra/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NalgebraBackend {
    parallel: bool,
}

impl NalgebraBackend {
    /// Create a new [`NalgebraBackend`] computing sequentially.
    #[must_use]
    pub const fn new() -> Self {
        Self { parallel: false }
    }

    /// Create a new [`NalgebraBackend`] computing on the rayon thread pool.
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    #[cfg(feature = "parallel")]
    #[must_use]
    pub const fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Returns `true` if the backend computes in parallel.
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }
}

#[inline]
fn wavefront(beam: &TargetBeam, lens: f64, x: f64, y: f64) -> Complex {
    Complex::from_polar(
        beam.amplitude,
        TAU * (beam.lens_power * lens + beam.gradient_x * x + beam.gradient_y * y),
    )
}

impl Backend for NalgebraBackend {
    type ComplexPattern = ComplexPattern;

    fn alloc_zeros_c(&self, size: CanvasSize) -> Result<Self::ComplexPattern, HoloError> {
        Ok(ComplexPattern::zeros(size.rows(), size.cols()))
    }

    fn add_wavefront(
        &self,
        basis: &BasisFields,
        beam: &TargetBeam,
        acc: &mut Self::ComplexPattern,
    ) -> Result<(), HoloError> {
        if CanvasSize::of(acc) != basis.size() {
            return Err(HoloError::BackendError(format!(
                "Accumulator is {}, but basis is {}",
                CanvasSize::of(acc),
                basis.size()
            )));
        }

        let lens = basis.lens().as_slice();
        let x = basis.x().as_slice();
        let y = basis.y().as_slice();
        let acc = acc.as_mut_slice();

        #[cfg(feature = "parallel")]
        if self.parallel {
            acc.par_iter_mut()
                .zip(lens.par_iter())
                .zip(x.par_iter())
                .zip(y.par_iter())
                .for_each(|(((a, &l), &x), &y)| *a += wavefront(beam, l, x, y));
            return Ok(());
        }

        acc.iter_mut()
            .zip(lens.iter())
            .zip(x.iter())
            .zip(y.iter())
            .for_each(|(((a, &l), &x), &y)| *a += wavefront(beam, l, x, y));
        Ok(())
    }

    fn to_host_c(&self, acc: Self::ComplexPattern) -> Result<ComplexPattern, HoloError> {
        Ok(acc)
    }
}
