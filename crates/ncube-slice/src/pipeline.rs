//! End-to-end runs: complexes to second-level representatives and the final
//! coverage query, plus the query over persisted collections.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use ncube_complex::{compute_cut_complexes, ComplexOracle};
use ncube_core::{is_sorted, EdgeLexicon, ErrorInfo, NcubeError, SliceableSet};
use ncube_sym::{EdgeAction, SymmetryGroup};
use serde::{Deserialize, Serialize};

use crate::config::SliceConfig;
use crate::construct::{complexes_to_usr, expand_usr, maximal_pairwise_unions};
use crate::coverage::pairwise_unions_slice_cube_par;
use crate::persist::{manifest_path, read_sets, verify_manifest, write_sets_with_manifest, Manifest};

/// Wall-clock duration of one pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTiming {
    /// Stage name.
    pub stage: String,
    /// Elapsed seconds.
    pub seconds: f64,
}

/// Collection sizes, answers and timings of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Cube dimension.
    pub dimension: usize,
    /// Canonical complexes accepted by the oracle.
    pub complexes: usize,
    /// First-level representatives.
    pub usr_1: usize,
    /// First-level maximal sets.
    pub mss_1: usize,
    /// Representatives of the inclusion-maximal pairwise unions.
    pub usr_2: usize,
    /// Maximal pairwise unions.
    pub mss_2: usize,
    /// Whether two hyperplanes cut every edge.
    pub two_hyperplanes: bool,
    /// Whether four hyperplanes cut every edge.
    pub four_hyperplanes: bool,
    /// Per-stage timings in execution order.
    pub timings: Vec<StageTiming>,
    /// Manifests of the persisted collections, when persisted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manifests: Vec<Manifest>,
}

#[derive(Default)]
struct StageTimer {
    timings: Vec<StageTiming>,
}

impl StageTimer {
    fn stage<T>(&mut self, name: &str, run: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = run();
        let seconds = start.elapsed().as_secs_f64();
        info!("stage {name} finished in {seconds:.3}s");
        self.timings.push(StageTiming {
            stage: name.to_string(),
            seconds,
        });
        value
    }
}

/// Runs the four-hyperplane pipeline for `config.dimension` with `oracle`
/// deciding which vertex sets are cuts.
pub fn run_pipeline(
    config: &SliceConfig,
    oracle: &dyn ComplexOracle,
) -> Result<PipelineReport, NcubeError> {
    config.validate()?;
    let cube = config.cube()?;
    let pool = config.thread_pool()?;
    let lexicon = EdgeLexicon::new(cube);
    let group = SymmetryGroup::new(cube);
    let action = EdgeAction::new(&group, &lexicon);
    let mut timer = StageTimer::default();

    let complexes = timer.stage("complexes", || compute_cut_complexes(&group, oracle));
    let usr_1 = timer.stage("usr_1", || complexes_to_usr(complexes.complexes(), &lexicon, &action));
    let mss_1 = timer.stage("mss_1", || expand_usr(&usr_1, &action));
    let two_hyperplanes = timer.stage("two_hyperplanes", || {
        pairwise_unions_slice_cube_par(&usr_1, &mss_1, &pool)
    })?;
    let usr_2 = timer.stage("usr_2", || {
        pool.install(|| maximal_pairwise_unions(&usr_1, &mss_1, &action))
    });
    let mss_2 = timer.stage("mss_2", || expand_usr(&usr_2, &action));
    let four_hyperplanes = timer.stage("four_hyperplanes", || {
        pairwise_unions_slice_cube_par(&usr_2, &mss_2, &pool)
    })?;
    info!(
        "{}-cube: two hyperplanes {}, four hyperplanes {}",
        cube.dimension(),
        two_hyperplanes,
        four_hyperplanes
    );

    let mut manifests = Vec::new();
    if config.persist {
        manifests.push(write_sets_with_manifest(&config.usr_path(), cube, &usr_2)?);
        manifests.push(write_sets_with_manifest(&config.mss_path(), cube, &mss_2)?);
        info!("persisted second-level collections under {}", config.out_dir.display());
    }

    Ok(PipelineReport {
        dimension: cube.dimension(),
        complexes: complexes.len(),
        usr_1: usr_1.len(),
        mss_1: mss_1.len(),
        usr_2: usr_2.len(),
        mss_2: mss_2.len(),
        two_hyperplanes,
        four_hyperplanes,
        timings: timer.timings,
        manifests,
    })
}

/// Result of a coverage query over persisted collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum CombineOutcome {
    /// The representative file is missing or empty.
    MissingUsr {
        /// Expected location.
        path: PathBuf,
    },
    /// The maximal-set file is missing or empty.
    MissingMss {
        /// Expected location.
        path: PathBuf,
    },
    /// The representative file exists but is unreadable, malformed, unsorted
    /// or fails its manifest.
    RejectedUsr {
        /// Offending file.
        path: PathBuf,
        /// Why it was rejected.
        error: NcubeError,
    },
    /// The maximal-set file exists but is unreadable, malformed, unsorted or
    /// fails its manifest.
    RejectedMss {
        /// Offending file.
        path: PathBuf,
        /// Why it was rejected.
        error: NcubeError,
    },
    /// Both files were read and queried.
    Completed {
        /// Number of representatives.
        usr: usize,
        /// Number of maximal sets.
        mss: usize,
        /// Whether some pairwise union cuts every edge.
        slices_cube: bool,
        /// Seconds spent in the coverage query.
        seconds: f64,
    },
}

fn is_missing_or_empty(path: &Path) -> bool {
    fs::metadata(path).map(|meta| !meta.is_file() || meta.len() == 0).unwrap_or(true)
}

fn load_collection(path: &Path, bits: usize) -> Result<Vec<SliceableSet>, NcubeError> {
    if manifest_path(path).is_file() {
        verify_manifest(path)?;
    }
    let sets = read_sets(path, bits)?;
    if !is_sorted(&sets) {
        return Err(NcubeError::InvalidInput(
            ErrorInfo::new("unsorted-collection", "persisted sets must be in lexicographic order")
                .with_context("path", path.display().to_string()),
        ));
    }
    Ok(sets)
}

/// Reads the persisted second-level collections of `config` and runs the
/// coverage query on them. Problems with either file are reported as outcomes
/// naming that file; the error path is left to configuration and thread-pool
/// failures.
pub fn combine_persisted(config: &SliceConfig) -> Result<CombineOutcome, NcubeError> {
    config.validate()?;
    let cube = config.cube()?;
    let usr_path = config.usr_path();
    if is_missing_or_empty(&usr_path) {
        return Ok(CombineOutcome::MissingUsr { path: usr_path });
    }
    let mss_path = config.mss_path();
    if is_missing_or_empty(&mss_path) {
        return Ok(CombineOutcome::MissingMss { path: mss_path });
    }
    let usr = match load_collection(&usr_path, cube.edge_count()) {
        Ok(sets) => sets,
        Err(error) => return Ok(CombineOutcome::RejectedUsr { path: usr_path, error }),
    };
    let mss = match load_collection(&mss_path, cube.edge_count()) {
        Ok(sets) => sets,
        Err(error) => return Ok(CombineOutcome::RejectedMss { path: mss_path, error }),
    };
    let pool = config.thread_pool()?;
    let start = Instant::now();
    let slices_cube = pairwise_unions_slice_cube_par(&usr, &mss, &pool)?;
    let seconds = start.elapsed().as_secs_f64();
    info!("coverage query over {} x {} sets took {seconds:.3}s", usr.len(), mss.len());
    Ok(CombineOutcome::Completed {
        usr: usr.len(),
        mss: mss.len(),
        slices_cube,
        seconds,
    })
}
