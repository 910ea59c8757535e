use nalgebra::DMatrix;
use slmkit_core::error::ShapeError;

/// A steered and focused spot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetBeam {
    /// The linear phase gradient along `x`.
    pub gradient_x: f64,
    /// The linear phase gradient along `y`.
    pub gradient_y: f64,
    /// The power of the quadratic lens term.
    pub lens_power: f64,
    /// The weight of the beam in the superposition.
    pub amplitude: f64,
}

impl TargetBeam {
    /// Creates a new [`TargetBeam`] with a unit weight.
    #[must_use]
    pub const fn new(gradient_x: f64, gradient_y: f64, lens_power: f64) -> Self {
        Self {
            gradient_x,
            gradient_y,
            lens_power,
            amplitude: 1.,
        }
    }

    /// A beam that is only steered.
    #[must_use]
    pub const fn grating(gradient_x: f64, gradient_y: f64) -> Self {
        Self::new(gradient_x, gradient_y, 0.)
    }

    /// Sets the weight of the beam.
    #[must_use]
    pub const fn with_amplitude(self, amplitude: f64) -> Self {
        Self { amplitude, ..self }
    }
}

/// An ordered set of [`TargetBeam`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Targets {
    beams: Vec<TargetBeam>,
}

impl Targets {
    /// Creates [`Targets`] from a `3×N` coefficient matrix.
    ///
    /// Each column of `xyz` holds `(gradient_x, gradient_y, lens_power)` of one target.
    /// `amplitude` holds the weight of each target; all weights are one if `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CoefficientRows`] if `xyz` does not have three rows,
    /// and [`ShapeError::WeightCount`] if the length of `amplitude` is not `N`.
    pub fn from_coefficients(xyz: &DMatrix<f64>, amplitude: Option<&[f64]>) -> Result<Self, ShapeError> {
        if xyz.nrows() != 3 {
            return Err(ShapeError::CoefficientRows(xyz.nrows()));
        }
        let n = xyz.ncols();
        if let Some(amplitude) = amplitude {
            if amplitude.len() != n {
                return Err(ShapeError::WeightCount {
                    expected: n,
                    actual: amplitude.len(),
                });
            }
        }
        Ok(Self {
            beams: xyz
                .column_iter()
                .enumerate()
                .map(|(i, c)| TargetBeam {
                    gradient_x: c[0],
                    gradient_y: c[1],
                    lens_power: c[2],
                    amplitude: amplitude.map_or(1., |a| a[i]),
                })
                .collect(),
        })
    }

    /// The number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beams.len()
    }

    /// Returns `true` if there is no target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beams.is_empty()
    }

    /// Iterates over the targets in order.
    pub fn iter(&self) -> impl Iterator<Item = &TargetBeam> {
        self.beams.iter()
    }
}

impl FromIterator<TargetBeam> for Targets {
    fn from_iter<T: IntoIterator<Item = TargetBeam>>(iter: T) -> Self {
        Self {
            beams: iter.into_iter().collect(),
        }
    }
}
