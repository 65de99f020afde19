use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cube::{Cube, Vertex};
use crate::errors::{ErrorInfo, NcubeError};

/// Cube edge stored with the lower endpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    low: Vertex,
    high: Vertex,
}

impl Edge {
    /// Creates an edge from two endpoints in either order. The endpoints must
    /// differ in exactly one bit.
    pub fn new(a: Vertex, b: Vertex) -> Result<Self, NcubeError> {
        if (a ^ b).count_ones() != 1 {
            let info = ErrorInfo::new("edge-endpoints", "endpoints must differ in exactly one bit")
                .with_context("u", a.to_string())
                .with_context("v", b.to_string());
            return Err(NcubeError::InvalidInput(info));
        }
        Ok(Self::ordered(a, b))
    }

    pub(crate) fn ordered(a: Vertex, b: Vertex) -> Self {
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Lower endpoint.
    pub fn low(&self) -> Vertex {
        self.low
    }

    /// Higher endpoint.
    pub fn high(&self) -> Vertex {
        self.high
    }

    /// Coordinate along which the endpoints differ.
    pub fn axis(&self) -> usize {
        (self.low ^ self.high).trailing_zeros() as usize
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Fixed ordering of all cube edges; an edge's position is the bit it owns
/// in every sliceable set.
#[derive(Debug, Clone)]
pub struct EdgeLexicon {
    cube: Cube,
    edges: Vec<Edge>,
    // index_by_low[low * n + axis], only meaningful where `low` has `axis` clear
    index_by_low: Vec<u32>,
}

impl EdgeLexicon {
    /// Computes the lexicon of `cube`, sorted by `(low, high)`.
    pub fn new(cube: Cube) -> Self {
        let n = cube.dimension();
        let mut edges = Vec::with_capacity(cube.edge_count());
        let mut index_by_low = vec![u32::MAX; cube.vertex_count() * n];
        for low in cube.vertices() {
            // Ascending axis order yields ascending `high`.
            for axis in 0..n {
                let high = cube.neighbour(low, axis);
                if low < high {
                    index_by_low[low as usize * n + axis] = edges.len() as u32;
                    edges.push(Edge { low, high });
                }
            }
        }
        Self {
            cube,
            edges,
            index_by_low,
        }
    }

    /// Cube the lexicon was built for.
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// Number of edges (the sliceable-set width).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false for a valid cube; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge at `index`.
    pub fn edge(&self, index: usize) -> Edge {
        self.edges[index]
    }

    /// All edges in lexicon order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Index of `edge` within the lexicon.
    pub fn index_of(&self, edge: Edge) -> usize {
        self.index_of_pair(edge.low, edge.high)
    }

    /// Index of the edge joining two adjacent vertices, given in either order.
    pub fn index_of_pair(&self, a: Vertex, b: Vertex) -> usize {
        let low = a.min(b);
        let axis = (a ^ b).trailing_zeros() as usize;
        self.index_by_low[low as usize * self.cube.dimension() + axis] as usize
    }
}
