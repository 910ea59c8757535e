mod nop;

pub use nop::Nop;
pub use slmkit_core::device::{DeviceClass, Showable};

use std::f64::consts::TAU;

use slmkit_core::{
    error::ShapeError,
    pattern::{CanvasSize, Complex, ComplexPattern, Pattern},
};

use crate::{
    error::SlmError,
    finalize::{finalize, FinalizeOption},
};

/// An extension trait that finalizes patterns before displaying them on a [`Showable`] device.
pub trait ShowableExt: Showable {
    /// Finalizes the patterns with the default option of the device class and displays the result.
    ///
    /// # Errors
    ///
    /// Returns the error of [`finalize`], [`ShapeError::PatternSize`] if the finalized pattern does not fit the device,
    /// or the error of [`Showable::show_raw`].
    fn show(&mut self, phase: Option<&Pattern>, amplitude: Option<&Pattern>) -> Result<(), SlmError> {
        let option = FinalizeOption::new(self.device_class());
        self.show_with(phase, amplitude, &option)
    }

    /// Finalizes the patterns with `option` and displays the result.
    ///
    /// # Errors
    ///
    /// See [`ShowableExt::show`].
    fn show_with(
        &mut self,
        phase: Option<&Pattern>,
        amplitude: Option<&Pattern>,
        option: &FinalizeOption,
    ) -> Result<(), SlmError> {
        let encoded = finalize(phase, amplitude, option)?;
        if encoded.size() != self.size() {
            return Err(ShapeError::PatternSize {
                expected: self.size(),
                actual: encoded.size(),
            }
            .into());
        }
        self.show_raw(&encoded)?;
        Ok(())
    }

    /// Displays a complex field.
    ///
    /// If the device knows its incident field, the target is divided by it where it is nonzero,
    /// so that the device only supplies the difference.
    /// The field is then split into the phase in periods and the magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::PatternSize`] if the incident field has a different size from `field`,
    /// and any error of [`ShowableExt::show`].
    fn show_complex(&mut self, field: &ComplexPattern) -> Result<(), SlmError> {
        let field = match self.incident() {
            Some(incident) => {
                if CanvasSize::of(incident) != CanvasSize::of(field) {
                    return Err(ShapeError::PatternSize {
                        expected: CanvasSize::of(incident),
                        actual: CanvasSize::of(field),
                    }
                    .into());
                }
                field.zip_map(incident, |f, i| if i.norm() > 0. { f / i } else { Complex::new(0., 0.) })
            }
            None => field.clone(),
        };
        let phase = field.map(|c| (c.arg() / TAU).rem_euclid(1.));
        let amplitude = field.map(|c| c.norm());
        self.show(Some(&phase), Some(&amplitude))
    }
}

impl<T: Showable + ?Sized> ShowableExt for T {}
