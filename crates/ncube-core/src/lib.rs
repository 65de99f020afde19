#![deny(missing_docs)]
#![doc = "Core data model for the n-cube slicing engine: vertices, the edge lexicon, \
packed sliceable sets and integer halfspaces."]

pub mod bitset;
/// Vertex subsets (cut complexes).
pub mod complex;
/// Cube dimension and vertex helpers.
pub mod cube;
/// Cube edges and the edge lexicon.
pub mod edge;
pub mod errors;
/// Integer halfspaces and the sets they induce.
pub mod halfspace;

pub use bitset::{SliceableSet, MAX_BITS, MAX_WORDS};
pub use complex::Complex;
pub use cube::{Cube, Vertex, MAX_DIMENSION};
pub use edge::{Edge, EdgeLexicon};
pub use errors::{ErrorInfo, NcubeError};
pub use halfspace::{low_weight_halfspace_to_sliceable_set, Halfspace, NormalDisplay};

/// Returns `true` when `sets` is in non-decreasing lexicographic order.
pub fn is_sorted(sets: &[SliceableSet]) -> bool {
    sets.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Checks that every set in `sets` has width `len`.
pub fn check_width(sets: &[SliceableSet], len: usize, label: &str) -> Result<(), NcubeError> {
    if let Some((index, set)) = sets.iter().enumerate().find(|(_, set)| set.len() != len) {
        let info = ErrorInfo::new("set-width", "sliceable sets have mismatched widths")
            .with_context("collection", label)
            .with_context("index", index.to_string())
            .with_context("expected", len.to_string())
            .with_context("found", set.len().to_string());
        return Err(NcubeError::Dimension(info));
    }
    Ok(())
}
