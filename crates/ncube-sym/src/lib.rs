#![deny(missing_docs)]
#![doc = "Sign-flip and coordinate-permutation symmetries of the n-cube, their action on \
vertices, complexes and edge-indexed sliceable sets, and orbit canonicalisation."]

/// Induced permutation of edge-lexicon indices.
pub mod action;
/// Minimal orbit representatives.
pub mod canonical;
/// Symmetry enumeration and the vertex action.
pub mod group;

pub use action::EdgeAction;
pub use canonical::{unique_complex, unique_sliceable_set};
pub use group::{compute_symmetries, transform_complex, transform_vertex, Symmetry, SymmetryGroup};
