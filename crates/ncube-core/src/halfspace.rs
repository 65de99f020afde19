use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bitset::SliceableSet;
use crate::cube::Cube;
use crate::edge::EdgeLexicon;
use crate::errors::{ErrorInfo, NcubeError};

/// Integer halfspace `normal · x = threshold` acting on the ±1 cube.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Halfspace {
    /// Normal vector, one entry per coordinate.
    pub normal: Vec<i32>,
    /// Offset of the hyperplane from the origin.
    pub threshold: i32,
}

impl Halfspace {
    /// Creates a halfspace after checking the normal has one entry per coordinate.
    pub fn new(cube: Cube, normal: Vec<i32>, threshold: i32) -> Result<Self, NcubeError> {
        if normal.len() != cube.dimension() {
            let info = ErrorInfo::new("normal-length", "normal vector length must equal the dimension")
                .with_context("dimension", cube.dimension().to_string())
                .with_context("normal", normal.len().to_string());
            return Err(NcubeError::Dimension(info));
        }
        Ok(Self { normal, threshold })
    }

    /// Edges cut by this halfspace.
    pub fn sliceable_set(&self, edges: &EdgeLexicon) -> SliceableSet {
        low_weight_halfspace_to_sliceable_set(&self.normal, self.threshold, edges)
    }
}

impl fmt::Display for Halfspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", NormalDisplay(&self.normal), self.threshold)
    }
}

/// Renders a normal vector as `[a b c]`.
pub struct NormalDisplay<'a>(pub &'a [i32]);

impl fmt::Display for NormalDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, weight) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{weight}")?;
        }
        write!(f, "]")
    }
}

/// Returns the sliceable set induced by the halfspace with the given normal and
/// threshold: an edge is cut iff the dot products of its endpoints lie strictly
/// on opposite sides of the threshold.
pub fn low_weight_halfspace_to_sliceable_set(
    normal: &[i32],
    threshold: i32,
    edges: &EdgeLexicon,
) -> SliceableSet {
    let mut set = SliceableSet::empty(edges.len());
    for (index, edge) in edges.edges().iter().enumerate() {
        let u = Cube::dot(edge.low(), normal);
        let v = Cube::dot(edge.high(), normal);
        if (u < threshold && v > threshold) || (u > threshold && v < threshold) {
            set.insert(index);
        }
    }
    set
}
