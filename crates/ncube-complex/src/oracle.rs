use nalgebra::{DMatrix, DVector};
use ncube_core::{Complex, Cube};
use serde::{Deserialize, Serialize};

use crate::lp::solve_geq;

/// Validity predicate deciding which vertex subsets count as cut complexes.
///
/// Implementations must be deterministic and symmetry invariant: if a complex
/// is accepted, so is every image of it under a cube symmetry.
pub trait ComplexOracle: Send + Sync {
    /// Returns whether `complex` is a valid cut complex.
    fn is_complex(&self, complex: &Complex) -> bool;
}

impl<F> ComplexOracle for F
where
    F: Fn(&Complex) -> bool + Send + Sync,
{
    fn is_complex(&self, complex: &Complex) -> bool {
        self(complex)
    }
}

/// Accepts exactly the complexes cut off by an affine hyperplane (degree-one
/// threshold sets).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearSeparability;

impl LinearSeparability {
    /// Returns a separating `(normal, offset)` with `normal · x > offset` on
    /// the complex and `< offset` elsewhere, using ±1 coordinates.
    pub fn separating_halfspace(complex: &Complex) -> Option<(Vec<f64>, f64)> {
        let cube = complex.cube();
        let n = cube.dimension();
        let rows = cube.vertex_count();
        // Row v: s_v * (x_v, -1) . (w, t) >= 1 with s_v = +1 inside, -1 outside.
        let mut a = DMatrix::<f64>::zeros(rows, n + 1);
        for v in cube.vertices() {
            let side = if complex.contains(v) { 1.0 } else { -1.0 };
            for axis in 0..n {
                a[(v as usize, axis)] = side * f64::from(Cube::coordinate(v, axis));
            }
            a[(v as usize, n)] = -side;
        }
        let b = DVector::<f64>::from_element(rows, 1.0);
        let solution = solve_geq(&a, &b).ok().flatten()?;
        let normal: Vec<f64> = solution.iter().take(n).copied().collect();
        let offset = solution[n];
        let separates = cube.vertices().all(|v| {
            let dot: f64 = (0..n)
                .map(|axis| normal[axis] * f64::from(Cube::coordinate(v, axis)))
                .sum();
            if complex.contains(v) {
                dot > offset
            } else {
                dot < offset
            }
        });
        separates.then_some((normal, offset))
    }
}

impl ComplexOracle for LinearSeparability {
    fn is_complex(&self, complex: &Complex) -> bool {
        Self::separating_halfspace(complex).is_some()
    }
}

/// Accepts complexes whose vertex set and complement both induce connected
/// subgraphs of the cube. Every linearly separable complex passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectedSides;

impl ConnectedSides {
    fn is_connected(cube: Cube, mask: u64) -> bool {
        if mask == 0 {
            return true;
        }
        let start = mask.trailing_zeros();
        let mut visited = 1u64 << start;
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            for axis in 0..cube.dimension() {
                let w = cube.neighbour(v, axis);
                let bit = 1u64 << w;
                if mask & bit != 0 && visited & bit == 0 {
                    visited |= bit;
                    stack.push(w);
                }
            }
        }
        visited == mask
    }
}

impl ComplexOracle for ConnectedSides {
    fn is_complex(&self, complex: &Complex) -> bool {
        let cube = complex.cube();
        Self::is_connected(cube, complex.mask()) && Self::is_connected(cube, complex.complement().mask())
    }
}

/// Serializable choice of built-in oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OracleKind {
    /// [`LinearSeparability`].
    #[default]
    Separable,
    /// [`ConnectedSides`].
    Connected,
}

impl ComplexOracle for OracleKind {
    fn is_complex(&self, complex: &Complex) -> bool {
        match self {
            OracleKind::Separable => LinearSeparability.is_complex(complex),
            OracleKind::Connected => ConnectedSides.is_complex(complex),
        }
    }
}
