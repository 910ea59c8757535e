use getset::Getters;
use slmkit_core::{
    error::ShapeError,
    field::Grid,
    pattern::{CanvasSize, Pattern},
};

/// Caller supplied basis fields replacing the defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BasisOverrides {
    /// The lens basis. Defaults to the squared distance from the canvas centre.
    pub lens: Option<Pattern>,
    /// The `x` gradient basis. Defaults to a linear ramp along the columns.
    pub x: Option<Pattern>,
    /// The `y` gradient basis. Defaults to a linear ramp along the rows.
    pub y: Option<Pattern>,
}

/// The lens and gradient fields every target is composed of.
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct BasisFields {
    #[getset(get = "pub")]
    /// The lens basis.
    lens: Pattern,
    #[getset(get = "pub")]
    /// The `x` gradient basis.
    x: Pattern,
    #[getset(get = "pub")]
    /// The `y` gradient basis.
    y: Pattern,
}

impl BasisFields {
    /// Creates the default basis fields of the canvas.
    #[must_use]
    pub fn new(size: impl Into<CanvasSize>) -> Self {
        let grid = Grid::new(size);
        Self {
            lens: grid.radial_squared(),
            x: grid.x_ramp(),
            y: grid.y_ramp(),
        }
    }

    /// Creates basis fields of the canvas, using `overrides` where supplied.
    ///
    /// Only the missing fields are generated.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::BasisSize`] if a supplied field does not match `size`.
    pub fn with_overrides(
        size: impl Into<CanvasSize>,
        overrides: &BasisOverrides,
    ) -> Result<Self, ShapeError> {
        let size = size.into();
        [
            ("lens", &overrides.lens),
            ("x", &overrides.x),
            ("y", &overrides.y),
        ]
        .into_iter()
        .filter_map(|(name, field)| field.as_ref().map(|f| (name, CanvasSize::of(f))))
        .try_for_each(|(name, actual)| {
            if actual == size {
                Ok(())
            } else {
                Err(ShapeError::BasisSize {
                    name,
                    expected: size,
                    actual,
                })
            }
        })?;

        let grid = Grid::new(size);
        Ok(Self {
            lens: overrides
                .lens
                .clone()
                .unwrap_or_else(|| grid.radial_squared()),
            x: overrides.x.clone().unwrap_or_else(|| grid.x_ramp()),
            y: overrides.y.clone().unwrap_or_else(|| grid.y_ramp()),
        })
    }

    /// The canvas size.
    #[must_use]
    pub fn size(&self) -> CanvasSize {
        CanvasSize::of(&self.lens)
    }
}
