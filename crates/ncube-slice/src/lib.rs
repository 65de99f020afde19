#![deny(missing_docs)]
#![doc = "Sliceable-set construction, low-weight halfspace enumeration, coverage \
queries and persistence for the n-cube slicing engine."]

/// Inclusion antichains of sliceable sets.
pub mod antichain;
/// Iterated-union cover counts.
pub mod combine;
/// YAML run configuration.
pub mod config;
pub mod construct;
pub mod coverage;
pub mod low_weight;
pub mod persist;
pub mod pipeline;

pub use antichain::{maximal_antichain, Antichain};
pub use combine::{combine_sliceable_sets, slice_cube_one_weight};
pub use config::SliceConfig;
pub use construct::{
    complex_to_sliceable_set, complexes_to_mss, complexes_to_usr, expand_usr,
    maximal_pairwise_unions, pairwise_unions,
};
pub use coverage::{
    pairwise_unions_slice_cube, pairwise_unions_slice_cube_par, pairwise_unions_slice_cube_records,
};
pub use low_weight::{
    compute_low_weight_mss, compute_one_weight_mss, low_weight_halfspaces, one_weight_halfspaces,
    write_low_weight_halfspaces_to_file, write_one_weight_halfspaces_to_file, HalfspaceRecord,
    LowWeightNormals, OneWeightNormals,
};
pub use ncube_core::low_weight_halfspace_to_sliceable_set;
pub use persist::{
    decode_records, manifest_path, read_records, read_sets, read_text_dump, verify_manifest,
    write_sets, write_sets_with_manifest, write_text_dump, Manifest,
};
pub use pipeline::{combine_persisted, run_pipeline, CombineOutcome, PipelineReport, StageTiming};
