use itertools::Itertools;
use log::debug;
use ncube_core::{Complex, Cube, ErrorInfo, NcubeError, Vertex, MAX_DIMENSION};
use serde::{Deserialize, Serialize};

/// Cube symmetry: flip the coordinates in `signs`, then move coordinate `i` to
/// position `perm[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    signs: u32,
    perm: Vec<usize>,
}

impl Symmetry {
    /// Builds a symmetry from a sign mask and a permutation of `0..n`. Sign bits
    /// at or above `n` are dropped.
    pub fn new(signs: u32, perm: Vec<usize>) -> Result<Self, NcubeError> {
        if perm.is_empty() || perm.len() > MAX_DIMENSION {
            return Err(NcubeError::Dimension(
                ErrorInfo::new("symmetry-dimension", "permutation length is outside the supported range")
                    .with_context("len", perm.len().to_string()),
            ));
        }
        let mut seen = vec![false; perm.len()];
        for &target in &perm {
            if target >= perm.len() || seen[target] {
                return Err(NcubeError::InvalidInput(
                    ErrorInfo::new("not-a-permutation", "symmetry needs a permutation of 0..n")
                        .with_context("perm", format!("{perm:?}")),
                ));
            }
            seen[target] = true;
        }
        let signs = signs & ((1u32 << perm.len()) - 1);
        Ok(Self { signs, perm })
    }

    /// The identity of the `n`-cube.
    pub fn identity(cube: Cube) -> Self {
        Self {
            signs: 0,
            perm: (0..cube.dimension()).collect(),
        }
    }

    /// Sign mask; bit `i` flips coordinate `i`.
    pub fn signs(&self) -> u32 {
        self.signs
    }

    /// Coordinate permutation.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Symmetry undoing `self`.
    pub fn inverse(&self) -> Self {
        let mut perm = vec![0; self.perm.len()];
        let mut signs = 0;
        for (axis, &target) in self.perm.iter().enumerate() {
            perm[target] = axis;
            signs |= ((self.signs >> axis) & 1) << target;
        }
        Self { signs, perm }
    }

    /// Symmetry applying `self` first and `next` second.
    pub fn compose(&self, next: &Symmetry) -> Self {
        let mut perm = vec![0; self.perm.len()];
        let mut signs = 0;
        for (axis, &mid) in self.perm.iter().enumerate() {
            perm[axis] = next.perm[mid];
            signs |= (((self.signs >> axis) ^ (next.signs >> mid)) & 1) << axis;
        }
        Self { signs, perm }
    }
}

/// Returns every symmetry of the `n`-cube: permutations in lexicographic order,
/// each crossed with the sign masks `0..2^n`. The result has `2^n * n!` entries.
pub fn compute_symmetries(cube: Cube) -> Vec<Symmetry> {
    let n = cube.dimension();
    let mut symmetries = Vec::with_capacity(group_order(n));
    for perm in (0..n).permutations(n) {
        for signs in 0..(1u32 << n) {
            symmetries.push(Symmetry {
                signs,
                perm: perm.clone(),
            });
        }
    }
    symmetries
}

fn group_order(n: usize) -> usize {
    (1..=n).product::<usize>() << n
}

/// Image of `v` under `sym`.
pub fn transform_vertex(sym: &Symmetry, v: Vertex) -> Vertex {
    let mut image = 0;
    for (axis, &target) in sym.perm.iter().enumerate() {
        let bit = ((v >> axis) ^ (sym.signs >> axis)) & 1;
        image |= bit << target;
    }
    image
}

/// Image of every vertex of `complex` under `sym`.
pub fn transform_complex(complex: &Complex, sym: &Symmetry) -> Complex {
    Complex::from_vertices(
        complex.cube(),
        complex.vertices().map(|v| transform_vertex(sym, v)),
    )
}

/// Full symmetry group together with a precomputed vertex image table.
#[derive(Debug, Clone)]
pub struct SymmetryGroup {
    cube: Cube,
    symmetries: Vec<Symmetry>,
    // images[sym * 2^n + v]
    images: Vec<Vertex>,
}

impl SymmetryGroup {
    /// Enumerates the group of `cube` and tabulates its vertex action.
    pub fn new(cube: Cube) -> Self {
        let symmetries = compute_symmetries(cube);
        let mut images = Vec::with_capacity(symmetries.len() * cube.vertex_count());
        for sym in &symmetries {
            images.extend(cube.vertices().map(|v| transform_vertex(sym, v)));
        }
        debug!(
            "symmetry group of the {}-cube: {} elements",
            cube.dimension(),
            symmetries.len()
        );
        Self {
            cube,
            symmetries,
            images,
        }
    }

    /// Cube acted upon.
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// Group order.
    pub fn len(&self) -> usize {
        self.symmetries.len()
    }

    /// Always false; the identity is a member.
    pub fn is_empty(&self) -> bool {
        self.symmetries.is_empty()
    }

    /// Symmetries in enumeration order.
    pub fn symmetries(&self) -> &[Symmetry] {
        &self.symmetries
    }

    /// Vertex images of symmetry `index`, indexed by source vertex.
    pub fn vertex_images(&self, index: usize) -> &[Vertex] {
        let width = self.cube.vertex_count();
        &self.images[index * width..(index + 1) * width]
    }

    /// Image of `complex` under symmetry `index`, using the table.
    pub fn transform_complex(&self, index: usize, complex: &Complex) -> Complex {
        let table = self.vertex_images(index);
        let mask = complex
            .vertices()
            .fold(0u64, |mask, v| mask | 1 << table[v as usize]);
        Complex::from_mask(complex.cube(), mask)
    }
}
