use std::f64::consts::{FRAC_PI_2, PI, TAU};

use slmkit_core::{
    colormap::Colormap,
    error::{ConfigError, RangeWarning},
    field::checkerboard,
    pattern::{CanvasSize, Pattern},
};

use super::{encode_phase_only, EncodeMethod, Modulo, RotationPack};

fn peak(pattern: &Pattern) -> f64 {
    pattern.iter().fold(0., |acc: f64, v| acc.max(v.abs()))
}

/// Encodes `amplitude` into a phase-only pattern for a phase device.
///
/// Both patterns must have the same size. The returned pattern is not wrapped.
pub(crate) fn encode_phase_device(
    phase: &Pattern,
    amplitude: &Pattern,
    method: EncodeMethod,
) -> Result<(Pattern, Vec<RangeWarning>), ConfigError> {
    match method {
        EncodeMethod::Checker => Ok(encode_checker(phase, amplitude)),
        EncodeMethod::Grating | EncodeMethod::Magnitude => {
            Err(ConfigError::NotImplemented(method.to_string()))
        }
    }
}

/// Checkerboard carrier encoding.
///
/// `phase` is in periods, i.e., `1.0` is `2π`.
/// The carrier alternates `±π/2` and its depth is `r = (2/π) acos(|A|)`,
/// so the zero order of each cell pair has the amplitude `cos(r π/2) = |A|`.
pub(crate) fn encode_checker(phase: &Pattern, amplitude: &Pattern) -> (Pattern, Vec<RangeWarning>) {
    let mut warnings = Vec::new();
    let peak = peak(amplitude);
    let scale = if peak > 1. {
        let warning = RangeWarning::new(peak);
        tracing::warn!("{} (peak = {})", warning, peak);
        warnings.push(warning);
        1. / peak
    } else {
        1.
    };

    let carrier = checkerboard(CanvasSize::of(phase), [-FRAC_PI_2, FRAC_PI_2]);
    let pattern = Pattern::from_fn(phase.nrows(), phase.ncols(), |r, c| {
        let a = (amplitude[(r, c)].abs() * scale).min(1.);
        let ratio = 2. / PI * a.acos();
        phase[(r, c)] + 0.5 + ratio * carrier[(r, c)] / TAU + 0.5
    });
    (pattern, warnings)
}

/// Encodes `amplitude` for an amplitude device as the fringe of the phase-only pattern.
///
/// `phase` is wrapped with `modulo` and quantized into radians before taking the fringe,
/// and the result is in `[0, 1]`, so that the caller must not wrap it again.
pub(crate) fn encode_amplitude_device(
    phase: &Pattern,
    amplitude: &Pattern,
    modulo: Modulo,
) -> Pattern {
    let phase_rad = encode_phase_only(phase.clone(), modulo, &Colormap::Pmpi, RotationPack::Disabled);
    let product = amplitude.zip_map(&phase_rad, |a, p| a * p.cos());
    let peak = peak(&product);
    if peak == 0. {
        return Pattern::from_element(product.nrows(), product.ncols(), 0.5);
    }
    product.map(|v| 0.5 * v / peak + 0.5)
}
