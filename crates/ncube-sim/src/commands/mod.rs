pub mod combine;
pub mod complexes;
pub mod low_weight;
pub mod one_weight;
pub mod pipeline;
pub mod symmetries;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use ncube_complex::OracleKind;
use ncube_slice::SliceConfig;

/// Options shared by every command that needs a run configuration.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// YAML configuration; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Cube dimension.
    #[arg(long, short = 'n')]
    pub dimension: Option<usize>,
    /// Root directory for persisted collections.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Validity oracle for cut complexes.
    #[arg(long, value_parser = parse_oracle)]
    pub oracle: Option<OracleKind>,
    /// Worker threads.
    #[arg(long)]
    pub threads: Option<usize>,
}

fn parse_oracle(text: &str) -> Result<OracleKind, String> {
    match text {
        "separable" => Ok(OracleKind::Separable),
        "connected" => Ok(OracleKind::Connected),
        other => Err(format!("unknown oracle `{other}` (expected separable or connected)")),
    }
}

impl ConfigArgs {
    /// Loads the configuration file (or defaults for dimension 5) and applies
    /// the command-line overrides.
    pub fn resolve(&self) -> Result<SliceConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SliceConfig::load(path)?,
            None => SliceConfig::new(self.dimension.unwrap_or(5)),
        };
        if let Some(dimension) = self.dimension {
            config.dimension = dimension;
        }
        if let Some(out) = &self.out {
            config.out_dir = out.clone();
        }
        if let Some(oracle) = self.oracle {
            config.oracle = oracle;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        config.validate()?;
        Ok(config)
    }
}
