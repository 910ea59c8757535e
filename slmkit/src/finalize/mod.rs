mod encode;
mod modulo;
mod option;
mod rpack;

pub use modulo::Modulo;
pub use option::{EncodeMethod, FinalizeOption};
pub use rpack::{rotation_pack, RotationPack};

use derive_new::new;
use getset::Getters;
use slmkit_core::{
    colormap::{quantize, Colormap},
    device::DeviceClass,
    error::{ConfigError, ShapeError},
    pattern::{CanvasSize, EncodedPattern, Pattern},
};

use crate::error::SlmError;

/// Converts a phase and/or amplitude pattern into device-ready values.
///
/// The pipeline is:
/// 1. joint amplitude and phase encoding (only if an amplitude pattern is given),
/// 2. modulo,
/// 3. quantization with the colormap,
/// 4. rotation packing.
///
/// Phase is given in normalized units where `1.0` is one period.
#[derive(Clone, Debug, Default, PartialEq, new, Getters)]
pub struct PatternEncoder {
    #[getset(get = "pub")]
    /// The option of the encoder.
    option: FinalizeOption,
}

impl PatternEncoder {
    /// Creates a new [`PatternEncoder`] with the default option of `device`.
    #[must_use]
    pub const fn for_device(device: DeviceClass) -> Self {
        Self {
            option: FinalizeOption::new(device),
        }
    }

    /// Finalizes the patterns.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`finalize`].
    pub fn finalize(
        &self,
        phase: Option<&Pattern>,
        amplitude: Option<&Pattern>,
    ) -> Result<EncodedPattern, SlmError> {
        finalize(phase, amplitude, &self.option)
    }
}

/// Applies modulo, quantization and rotation packing to a phase pattern.
///
/// `modulo` must have been validated.
#[must_use]
pub fn encode_phase_only(
    phase: Pattern,
    modulo: Modulo,
    colormap: &Colormap,
    rpack: RotationPack,
) -> Pattern {
    let pattern = modulo.apply(phase);
    let pattern = quantize(&pattern, colormap);
    rpack.apply(pattern)
}

/// Converts a phase and/or amplitude pattern into device-ready values.
///
/// If `phase` is `None`, it is zero everywhere.
///
/// # Errors
///
/// * [`ConfigError::MissingPattern`] if both patterns are `None`.
/// * [`ShapeError::PatternSize`] if the patterns have different sizes.
/// * [`ConfigError::InvalidModulo`] if the modulo is not finite and positive.
/// * [`ConfigError::InvalidLookup`] if rotation packing is used with a custom colormap without the level `0`.
/// * [`ConfigError::NotImplemented`] if the encode method has no implementation and an amplitude pattern is given.
pub fn finalize(
    phase: Option<&Pattern>,
    amplitude: Option<&Pattern>,
    option: &FinalizeOption,
) -> Result<EncodedPattern, SlmError> {
    option.validate()?;

    let (pattern, modulo, warnings) = match (phase, amplitude) {
        (None, None) => return Err(ConfigError::MissingPattern.into()),
        (Some(phase), None) => (phase.clone(), option.modulo, Vec::new()),
        (phase, Some(amplitude)) => {
            let size = CanvasSize::of(amplitude);
            let phase = match phase {
                Some(phase) if CanvasSize::of(phase) != size => {
                    return Err(ShapeError::PatternSize {
                        expected: size,
                        actual: CanvasSize::of(phase),
                    }
                    .into())
                }
                Some(phase) => phase.clone(),
                None => Pattern::zeros(size.rows(), size.cols()),
            };
            tracing::debug!(
                "Encoding {} amplitude for {} device.",
                size,
                option.device
            );
            match option.device {
                DeviceClass::Phase => {
                    let (pattern, warnings) =
                        encode::encode_phase_device(&phase, amplitude, option.encode_method)?;
                    (pattern, option.modulo, warnings)
                }
                DeviceClass::Amplitude => (
                    encode::encode_amplitude_device(&phase, amplitude, option.modulo),
                    Modulo::Disabled,
                    Vec::new(),
                ),
            }
        }
    };

    tracing::debug!(
        "Finalizing {} pattern: modulo = {}, colormap = {}, rpack = {}.",
        CanvasSize::of(&pattern),
        modulo,
        option.colormap,
        option.rpack
    );
    let pattern = encode_phase_only(pattern, modulo, &option.colormap, option.rpack);
    Ok(EncodedPattern::new(
        pattern,
        option.colormap.clone(),
        warnings,
    ))
}
