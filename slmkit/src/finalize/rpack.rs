use std::str::FromStr;

use bit_vec::BitVec;
use derive_more::Display;
use slmkit_core::{
    error::ConfigError,
    pattern::{CanvasSize, Pattern},
};

/// Geometric remap of a pattern onto the addressable buffer of the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationPack {
    /// The pattern is the buffer.
    #[default]
    #[display("none")]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    Disabled,
    /// The pixels of the device are a square grid rotated by 45° against the buffer.
    #[display("45deg")]
    #[cfg_attr(feature = "serde", serde(rename = "45deg"))]
    Deg45,
}

impl RotationPack {
    /// The size of the buffer that a pattern of `size` is packed into.
    #[must_use]
    pub fn packed_size(&self, size: CanvasSize) -> CanvasSize {
        match self {
            Self::Disabled => size,
            Self::Deg45 => {
                if size.is_empty() {
                    return CanvasSize::new(0, 0);
                }
                let (rows, cols) = (size.rows(), size.cols());
                CanvasSize::new(cols.div_ceil(2) + rows - 1, (cols + 1).div_ceil(2) + rows - 1)
            }
        }
    }

    /// Packs `pattern` into the buffer.
    #[must_use]
    pub fn apply(&self, pattern: Pattern) -> Pattern {
        match self {
            Self::Disabled => pattern,
            Self::Deg45 => rotation_pack(&pattern),
        }
    }
}

impl FromStr for RotationPack {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::Disabled),
            "45deg" => Ok(Self::Deg45),
            _ => Err(ConfigError::UnknownRotationPack(s.to_string())),
        }
    }
}

/// The 0-based buffer cell `(row, col)` of pattern pixel `(row, col)` in a pattern of `rows` rows.
#[inline]
fn destination(rows: usize, row: usize, col: usize) -> (usize, usize) {
    let (oy, ox) = (row + 1, col + 1);
    let nx = (ox + 1).div_ceil(2) + oy - 1;
    let ny = ox.div_ceil(2) + (rows - 1) - (oy - 1);
    (ny - 1, nx - 1)
}

/// Packs `pattern` into a buffer whose cells form a grid rotated by 45°.
///
/// Cells not covered by a pixel of `pattern` are zero.
#[must_use]
pub fn rotation_pack(pattern: &Pattern) -> Pattern {
    let size = CanvasSize::of(pattern);
    let packed = RotationPack::Deg45.packed_size(size);
    let mut buf = Pattern::zeros(packed.rows(), packed.cols());
    if size.is_empty() {
        return buf;
    }

    let mut written = BitVec::from_elem(packed.num_pixels(), false);
    (0..size.cols()).for_each(|col| {
        (0..size.rows()).for_each(|row| {
            let (ny, nx) = destination(size.rows(), row, col);
            let idx = nx * packed.rows() + ny;
            debug_assert!(
                !written[idx],
                "pixel ({}, {}) collides at ({}, {})",
                row,
                col,
                ny,
                nx
            );
            written.set(idx, true);
            buf[(ny, nx)] = pattern[(row, col)];
        })
    });
    tracing::debug!("Packed {} pattern into {} buffer.", size, packed);
    buf
}
