use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cube::{Cube, Vertex};

/// Vertex subset forming one side of a cut, stored as a membership mask.
///
/// Complexes order by dimension, then by the numeric value of the mask; the
/// canonical representative of an orbit is its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Complex {
    cube: Cube,
    mask: u64,
}

impl Complex {
    /// Creates an empty complex.
    pub fn empty(cube: Cube) -> Self {
        Self { cube, mask: 0 }
    }

    /// Creates a complex holding the listed vertices.
    pub fn from_vertices(cube: Cube, vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let mut complex = Self::empty(cube);
        for v in vertices {
            complex.insert(v);
        }
        complex
    }

    /// Creates a complex from a raw membership mask; bits past `2^n` are dropped.
    pub fn from_mask(cube: Cube, mask: u64) -> Self {
        Self {
            cube,
            mask: mask & Self::universe(cube),
        }
    }

    fn universe(cube: Cube) -> u64 {
        u64::MAX >> (64 - cube.vertex_count())
    }

    /// Cube the complex lives in.
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// Raw membership mask; bit `v` is set iff vertex `v` belongs to the complex.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns whether `v` belongs to the complex.
    pub fn contains(&self, v: Vertex) -> bool {
        self.mask >> v & 1 == 1
    }

    /// Adds `v` to the complex.
    pub fn insert(&mut self, v: Vertex) {
        debug_assert!((v as usize) < self.cube.vertex_count());
        self.mask |= 1 << v;
    }

    /// Returns a copy with `v` added.
    pub fn with(mut self, v: Vertex) -> Self {
        self.insert(v);
        self
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns whether the complex has no vertices.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Vertex complement within the cube.
    pub fn complement(&self) -> Self {
        Self {
            cube: self.cube,
            mask: !self.mask & Self::universe(self.cube),
        }
    }

    /// Members in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        let mut rest = self.mask;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let v = rest.trailing_zeros();
            rest &= rest - 1;
            Some(v)
        })
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Complex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cube
            .cmp(&other.cube)
            .then_with(|| self.mask.cmp(&other.mask))
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, v) in self.vertices().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}
