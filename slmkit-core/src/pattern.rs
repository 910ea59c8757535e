use derive_more::Display;
use derive_new::new;
use getset::{CopyGetters, Getters};
use nalgebra::DMatrix;

use crate::{colormap::Colormap, error::RangeWarning};

/// A complex number.
pub type Complex = nalgebra::Complex<f64>;
/// A real-valued pattern indexed by `(row, col)`.
pub type Pattern = DMatrix<f64>;
/// A complex-valued pattern indexed by `(row, col)`.
pub type ComplexPattern = DMatrix<Complex>;

/// The size of a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, new, CopyGetters)]
#[display("{}×{}", rows, cols)]
pub struct CanvasSize {
    #[getset(get_copy = "pub")]
    /// The number of rows.
    rows: usize,
    #[getset(get_copy = "pub")]
    /// The number of columns.
    cols: usize,
}

impl CanvasSize {
    /// Returns the size of the given pattern.
    #[must_use]
    pub fn of<T>(pattern: &DMatrix<T>) -> Self {
        let (rows, cols) = pattern.shape();
        Self { rows, cols }
    }

    /// The number of pixels.
    #[must_use]
    pub const fn num_pixels(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the canvas has no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_pixels() == 0
    }
}

impl From<(usize, usize)> for CanvasSize {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl From<CanvasSize> for (usize, usize) {
    fn from(size: CanvasSize) -> Self {
        (size.rows, size.cols)
    }
}

/// A pattern ready to be displayed on a device.
///
/// Every value is a level of [`colormap`](EncodedPattern::colormap).
#[derive(Clone, Debug, PartialEq, new, Getters)]
pub struct EncodedPattern {
    #[getset(get = "pub")]
    /// The device-ready values.
    pattern: Pattern,
    #[getset(get = "pub")]
    /// The colormap used for quantization.
    colormap: Colormap,
    #[getset(get = "pub")]
    /// Non-fatal warnings raised while encoding.
    warnings: Vec<RangeWarning>,
}

impl EncodedPattern {
    /// The size of the encoded pattern.
    #[must_use]
    pub fn size(&self) -> CanvasSize {
        CanvasSize::of(&self.pattern)
    }

    /// Consumes `self` and returns the device-ready values.
    #[must_use]
    pub fn into_pattern(self) -> Pattern {
        self.pattern
    }
}
