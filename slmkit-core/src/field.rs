use crate::pattern::{CanvasSize, Pattern};

/// Pixel coordinates of a canvas relative to a centre.
///
/// Pixels are addressed with 1-based coordinates, so the `x` coordinate of column `c` is `c + 1 - centre.x`.
/// By default, the centre is `(cols / 2, rows / 2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    size: CanvasSize,
    centre: (f64, f64),
}

impl Grid {
    /// Creates a new [`Grid`] centred on the canvas.
    #[must_use]
    pub fn new(size: impl Into<CanvasSize>) -> Self {
        let size = size.into();
        Self {
            size,
            centre: (size.cols() as f64 / 2., size.rows() as f64 / 2.),
        }
    }

    /// Moves the centre to `(x, y)`.
    #[must_use]
    pub const fn with_centre(self, x: f64, y: f64) -> Self {
        Self {
            centre: (x, y),
            ..self
        }
    }

    /// The canvas size.
    #[must_use]
    pub const fn size(&self) -> CanvasSize {
        self.size
    }

    /// The centre in 1-based pixel coordinates.
    #[must_use]
    pub const fn centre(&self) -> (f64, f64) {
        self.centre
    }

    /// The `x` coordinate of column `col`.
    #[must_use]
    pub fn x(&self, col: usize) -> f64 {
        (col + 1) as f64 - self.centre.0
    }

    /// The `y` coordinate of row `row`.
    #[must_use]
    pub fn y(&self, row: usize) -> f64 {
        (row + 1) as f64 - self.centre.1
    }

    /// A linear ramp along the columns.
    #[must_use]
    pub fn x_ramp(&self) -> Pattern {
        Pattern::from_fn(self.size.rows(), self.size.cols(), |_, c| self.x(c))
    }

    /// A linear ramp along the rows.
    #[must_use]
    pub fn y_ramp(&self) -> Pattern {
        Pattern::from_fn(self.size.rows(), self.size.cols(), |r, _| self.y(r))
    }

    /// The squared distance from the centre.
    #[must_use]
    pub fn radial_squared(&self) -> Pattern {
        Pattern::from_fn(self.size.rows(), self.size.cols(), |r, c| {
            let x = self.x(c);
            let y = self.y(r);
            x * x + y * y
        })
    }
}

/// A checkerboard alternating every pixel.
///
/// Pixels where `row + col` is even take `values[0]`, the others take `values[1]`.
#[must_use]
pub fn checkerboard(size: impl Into<CanvasSize>, values: [f64; 2]) -> Pattern {
    let size = size.into();
    Pattern::from_fn(size.rows(), size.cols(), |r, c| values[(r + c) % 2])
}
