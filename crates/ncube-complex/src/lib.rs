#![deny(missing_docs)]
#![doc = "Breadth-first enumeration of cut complexes of the n-cube, one canonical \
representative per symmetry orbit, filtered by a validity oracle."]

/// Complex growth and cut-edge extraction.
pub mod enumerate;
/// Dense phase-one simplex feasibility solver.
pub mod lp;
/// Complex validity predicates.
pub mod oracle;

pub use enumerate::{
    adjacent_vertices, complex_to_edges, compute_complexes, compute_cut_complexes, CutComplexes,
};
pub use oracle::{ComplexOracle, ConnectedSides, LinearSeparability, OracleKind};
