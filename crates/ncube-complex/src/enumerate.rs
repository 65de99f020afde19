use std::collections::HashSet;

use log::debug;
use ncube_core::{Complex, Cube, Edge, EdgeLexicon, ErrorInfo, NcubeError, Vertex};
use ncube_sym::{unique_complex, SymmetryGroup};
use serde::{Deserialize, Serialize};

use crate::oracle::ComplexOracle;

/// Canonical cut complexes grouped by size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCutComplexes")]
pub struct CutComplexes {
    complexes: Vec<Complex>,
    // starts[i] is the offset of the complexes of size i + 1; the last entry is the total.
    starts: Vec<usize>,
}

#[derive(Deserialize)]
struct RawCutComplexes {
    complexes: Vec<Complex>,
    starts: Vec<usize>,
}

impl TryFrom<RawCutComplexes> for CutComplexes {
    type Error = NcubeError;

    fn try_from(raw: RawCutComplexes) -> Result<Self, Self::Error> {
        let RawCutComplexes { complexes, starts } = raw;
        let invalid = |code: &str, message: &str| {
            NcubeError::InvalidInput(
                ErrorInfo::new(code, message)
                    .with_context("complexes", complexes.len().to_string())
                    .with_context("starts", format!("{starts:?}")),
            )
        };
        if starts.first() != Some(&0) || starts.last() != Some(&complexes.len()) {
            return Err(invalid(
                "cut-complexes-bounds",
                "size offsets must start at zero and end at the complex count",
            ));
        }
        if starts.windows(2).any(|w| w[0] > w[1]) {
            return Err(invalid("cut-complexes-order", "size offsets must be non-decreasing"));
        }
        let sized = starts
            .windows(2)
            .enumerate()
            .all(|(i, w)| complexes[w[0]..w[1]].iter().all(|c| c.len() == i + 1));
        if !sized {
            return Err(invalid(
                "cut-complexes-size",
                "complex sizes disagree with their size offsets",
            ));
        }
        if let Some(first) = complexes.first() {
            if complexes.iter().any(|c| c.cube() != first.cube()) {
                return Err(invalid("cut-complexes-cube", "complexes span different cubes"));
            }
        }
        Ok(Self { complexes, starts })
    }
}

impl CutComplexes {
    /// All complexes in discovery order (ascending size).
    pub fn complexes(&self) -> &[Complex] {
        &self.complexes
    }

    /// Complexes with exactly `size` vertices.
    pub fn by_size(&self, size: usize) -> &[Complex] {
        if size == 0 || size >= self.starts.len() {
            return &[];
        }
        &self.complexes[self.starts[size - 1]..self.starts[size]]
    }

    /// Largest size reached.
    pub fn max_size(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }

    /// Number of complexes.
    pub fn len(&self) -> usize {
        self.complexes.len()
    }

    /// Returns whether nothing was enumerated.
    pub fn is_empty(&self) -> bool {
        self.complexes.is_empty()
    }

    /// Releases the complexes.
    pub fn into_vec(self) -> Vec<Complex> {
        self.complexes
    }
}

/// Vertices outside `complex` adjacent to at least one member, ascending.
pub fn adjacent_vertices(complex: &Complex) -> Vec<Vertex> {
    let cube = complex.cube();
    let mut frontier = 0u64;
    for v in complex.vertices() {
        for axis in 0..cube.dimension() {
            let w = cube.neighbour(v, axis);
            if !complex.contains(w) {
                frontier |= 1 << w;
            }
        }
    }
    Complex::from_mask(cube, frontier).vertices().collect()
}

/// Edges with exactly one endpoint in `complex`, in lexicon order.
pub fn complex_to_edges(complex: &Complex, lexicon: &EdgeLexicon) -> Vec<Edge> {
    let cube = complex.cube();
    let mut indices = Vec::new();
    for v in complex.vertices() {
        for axis in 0..cube.dimension() {
            let w = cube.neighbour(v, axis);
            if !complex.contains(w) {
                indices.push(lexicon.index_of_pair(v, w));
            }
        }
    }
    indices.sort_unstable();
    indices.into_iter().map(|index| lexicon.edge(index)).collect()
}

/// Grows one canonical representative of every accepted cut-complex orbit,
/// sizes `1..=2^(n-1)`.
///
/// Growth is breadth first: every complex of size `i` is extended by each of its
/// adjacent vertices, the candidate is canonicalised, and it is kept when it is
/// new at size `i + 1` and `oracle` accepts it. Rejected candidates are dropped.
pub fn compute_cut_complexes(group: &SymmetryGroup, oracle: &dyn ComplexOracle) -> CutComplexes {
    let cube = group.cube();
    let half = cube.vertex_count() / 2;
    // {0} is the only orbit of size one.
    let mut complexes = vec![Complex::from_vertices(cube, [0])];
    let mut starts = vec![0, 1];
    let mut rejected = HashSet::new();
    for size in 1..half {
        let previous = starts[size - 1]..starts[size];
        let mut seen = HashSet::new();
        for parent in previous {
            let parent = complexes[parent];
            for v in adjacent_vertices(&parent) {
                let candidate = unique_complex(&parent.with(v), group);
                if seen.contains(&candidate) || rejected.contains(&candidate) {
                    continue;
                }
                if oracle.is_complex(&candidate) {
                    seen.insert(candidate);
                    complexes.push(candidate);
                } else {
                    rejected.insert(candidate);
                }
            }
        }
        starts.push(complexes.len());
        debug!(
            "{}-cube: {} complexes of size {}",
            cube.dimension(),
            complexes.len() - starts[size],
            size + 1
        );
    }
    CutComplexes { complexes, starts }
}

/// Builds the symmetry group of `cube` and enumerates its cut complexes.
pub fn compute_complexes(cube: Cube, oracle: &dyn ComplexOracle) -> CutComplexes {
    let group = SymmetryGroup::new(cube);
    compute_cut_complexes(&group, oracle)
}
