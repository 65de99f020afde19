use std::fs;
use std::path::{Path, PathBuf};

use ncube_complex::OracleKind;
use ncube_core::{Cube, ErrorInfo, NcubeError};
use rayon::ThreadPool;
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters of a slicing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Cube dimension, `1..=6`.
    pub dimension: usize,
    /// Root directory for persisted collections.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Sub-directory naming the family of cuts, e.g. `degree_one`.
    #[serde(default = "default_family")]
    pub family: String,
    /// Validity oracle used when enumerating complexes.
    #[serde(default)]
    pub oracle: OracleKind,
    /// Thresholds for one-weight halfspaces.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<i32>,
    /// Largest absolute normal entry for low-weight halfspaces.
    #[serde(default = "default_max_weight")]
    pub max_weight: i32,
    /// Round limit for iterated unions.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
    /// Worker threads; rayon's default when absent.
    #[serde(default)]
    pub threads: Option<usize>,
    /// Persist the second-level collections after a pipeline run.
    #[serde(default)]
    pub persist: bool,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_family() -> String {
    "degree_one".to_string()
}

fn default_thresholds() -> Vec<i32> {
    vec![0, 1]
}

fn default_max_weight() -> i32 {
    1
}

fn default_max_rounds() -> usize {
    8
}

fn config_error(code: &str, message: &str) -> NcubeError {
    NcubeError::Config(ErrorInfo::new(code, message))
}

impl SliceConfig {
    /// Defaults for the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            out_dir: default_out_dir(),
            family: default_family(),
            oracle: OracleKind::default(),
            thresholds: default_thresholds(),
            max_weight: default_max_weight(),
            max_rounds: default_max_rounds(),
            threads: None,
            persist: false,
        }
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, NcubeError> {
        let config: SliceConfig = serde_yaml::from_str(text)
            .map_err(|err| NcubeError::Serde(ErrorInfo::new("config-yaml", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self, NcubeError> {
        let text = fs::read_to_string(path).map_err(|err| NcubeError::io("read-config", path, err))?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            NcubeError::Serde(info) => {
                NcubeError::Serde(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), NcubeError> {
        Cube::new(self.dimension)?;
        if self.family.is_empty() || self.family.contains(['/', '\\']) {
            return Err(NcubeError::Config(
                ErrorInfo::new("config-family", "family must be a plain directory name")
                    .with_context("family", self.family.clone()),
            ));
        }
        if self.thresholds.is_empty() {
            return Err(config_error("config-thresholds", "at least one threshold is required"));
        }
        if self.max_weight < 1 {
            return Err(NcubeError::Config(
                ErrorInfo::new("config-max-weight", "max_weight must be positive")
                    .with_context("max_weight", self.max_weight.to_string()),
            ));
        }
        if self.max_rounds == 0 {
            return Err(config_error("config-max-rounds", "max_rounds must be positive"));
        }
        if self.threads == Some(0) {
            return Err(NcubeError::Config(
                ErrorInfo::new("config-threads", "threads must be positive when set")
                    .with_hint("omit the key to use rayon's default"),
            ));
        }
        Ok(())
    }

    /// Validated cube.
    pub fn cube(&self) -> Result<Cube, NcubeError> {
        Cube::new(self.dimension)
    }

    /// `{out_dir}/{family}/{n}_usr_2.bin`
    pub fn usr_path(&self) -> PathBuf {
        self.family_dir().join(format!("{}_usr_2.bin", self.dimension))
    }

    /// `{out_dir}/{family}/{n}_mss_2.bin`
    pub fn mss_path(&self) -> PathBuf {
        self.family_dir().join(format!("{}_mss_2.bin", self.dimension))
    }

    fn family_dir(&self) -> PathBuf {
        self.out_dir.join(&self.family)
    }

    /// Worker pool sized from `threads`.
    pub fn thread_pool(&self) -> Result<ThreadPool, NcubeError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads.max(1));
        }
        builder
            .build()
            .map_err(|err| NcubeError::Config(ErrorInfo::new("thread-pool", err.to_string())))
    }
}
