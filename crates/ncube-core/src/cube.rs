use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, NcubeError};

/// Vertex of the n-cube; bit `i` holds coordinate `i`.
pub type Vertex = u32;

/// Largest supported dimension. Vertex sets fit in a `u64` and sliceable
/// sets in [`crate::MAX_WORDS`] words.
pub const MAX_DIMENSION: usize = 6;

/// Validated cube dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Cube {
    dimension: usize,
}

impl Cube {
    /// Creates a cube of the given dimension, rejecting `0` and anything above
    /// [`MAX_DIMENSION`].
    pub fn new(dimension: usize) -> Result<Self, NcubeError> {
        if dimension == 0 || dimension > MAX_DIMENSION {
            let info = ErrorInfo::new("dimension-range", "cube dimension out of range")
                .with_context("dimension", dimension.to_string())
                .with_context("max", MAX_DIMENSION.to_string());
            return Err(NcubeError::Dimension(info));
        }
        Ok(Self { dimension })
    }

    /// Returns the dimension `n`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns `2^n`.
    pub fn vertex_count(&self) -> usize {
        1 << self.dimension
    }

    /// Returns `n * 2^(n-1)`.
    pub fn edge_count(&self) -> usize {
        self.dimension << (self.dimension - 1)
    }

    /// Returns the neighbour of `v` across coordinate `axis`.
    pub fn neighbour(&self, v: Vertex, axis: usize) -> Vertex {
        v ^ (1 << axis)
    }

    /// Iterates over all vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.vertex_count() as Vertex
    }

    /// Signed coordinate of `v` along `axis`: `-1` for a clear bit, `+1` for a set bit.
    pub fn coordinate(v: Vertex, axis: usize) -> i32 {
        if (v >> axis) & 1 == 1 {
            1
        } else {
            -1
        }
    }

    /// Dot product of the signed coordinates of `v` with `normal`.
    pub fn dot(v: Vertex, normal: &[i32]) -> i32 {
        normal
            .iter()
            .enumerate()
            .map(|(axis, weight)| Self::coordinate(v, axis) * weight)
            .sum()
    }
}

impl TryFrom<usize> for Cube {
    type Error = NcubeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Cube::new(value)
    }
}

impl From<Cube> for usize {
    fn from(value: Cube) -> Self {
        value.dimension
    }
}
