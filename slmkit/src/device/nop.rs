use getset::{CopyGetters, Getters};
use slmkit_core::{
    device::{DeviceClass, Showable},
    error::{ShapeError, ShowError},
    pattern::{CanvasSize, ComplexPattern, EncodedPattern},
};

/// A [`Showable`] device that only keeps the last shown pattern.
///
/// This device is mainly used for explanation and testing.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct Nop {
    device_class: DeviceClass,
    size: CanvasSize,
    incident: Option<ComplexPattern>,
    #[getset(get = "pub")]
    /// The last shown pattern.
    last: Option<EncodedPattern>,
    #[getset(get_copy = "pub")]
    /// The number of shown patterns.
    num_shown: usize,
    #[getset(get_copy = "pub")]
    /// Whether the device is open.
    is_open: bool,
}

impl Nop {
    /// Creates a new open [`Nop`].
    #[must_use]
    pub fn new(device_class: DeviceClass, size: impl Into<CanvasSize>) -> Self {
        Self {
            device_class,
            size: size.into(),
            incident: None,
            last: None,
            num_shown: 0,
            is_open: true,
        }
    }

    /// Sets the field illuminating the device.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::PatternSize`] if `incident` does not cover the device.
    pub fn with_incident(self, incident: ComplexPattern) -> Result<Self, ShapeError> {
        let actual = CanvasSize::of(&incident);
        if actual != self.size {
            return Err(ShapeError::PatternSize {
                expected: self.size,
                actual,
            });
        }
        Ok(Self {
            incident: Some(incident),
            ..self
        })
    }

    /// Closes the device. Any pattern shown afterwards fails.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

impl Showable for Nop {
    fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    fn size(&self) -> CanvasSize {
        self.size
    }

    fn incident(&self) -> Option<&ComplexPattern> {
        self.incident.as_ref()
    }

    fn show_raw(&mut self, pattern: &EncodedPattern) -> Result<(), ShowError> {
        if !self.is_open {
            return Err(ShowError::new("Device is closed"));
        }
        if pattern.size() != self.size {
            return Err(ShowError::new(format!(
                "Pattern is {}, but device is {}",
                pattern.size(),
                self.size
            )));
        }
        tracing::trace!("Nop: showing {} pattern.", pattern.size());
        self.last = Some(pattern.clone());
        self.num_shown += 1;
        Ok(())
    }
}
