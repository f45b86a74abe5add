//! Experiment configuration.
//!
//! An experiment is read from an optional YAML file, then command-line flags
//! are layered on top:
//!
//! ```yaml
//! name: square-3x3
//! lattice: [3, 3]
//! coupling: 1.0
//! field: 0.5
//! total_time: 1.0   # or dt, not both
//! slices: 2
//! ```
//!
//! Precedence (highest to lowest): flags, file, defaults.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ising_synth::TrotterParameters;

const DEFAULT_COUPLING: f64 = 1.0;
const DEFAULT_FIELD: f64 = 0.5;
const DEFAULT_TOTAL_TIME: f64 = 1.0;
const DEFAULT_SLICES: usize = 4;

/// A partially specified experiment, as read from a file or from flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Label shown in summaries.
    pub name: Option<String>,
    /// Lattice dimensions.
    pub lattice: Option<Vec<usize>>,
    /// Coupling strength J.
    pub coupling: Option<f64>,
    /// Transverse field g.
    pub field: Option<f64>,
    /// Slice duration.
    pub dt: Option<f64>,
    /// Total evolution time, split evenly across slices.
    pub total_time: Option<f64>,
    /// Number of Trotter slices.
    pub slices: Option<usize>,
}

/// A fully resolved experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub name: Option<String>,
    pub dims: Vec<usize>,
    pub params: TrotterParameters,
}

impl ExperimentConfig {
    /// Parse a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml_ng::from_str(source).context("Invalid experiment configuration")
    }

    /// Load a YAML experiment file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("In {}", path.display()))
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// The time parameterisation is replaced as a unit: setting either `dt`
    /// or `total_time` in `overrides` discards both values from `self`.
    pub fn merge(self, overrides: ExperimentConfig) -> ExperimentConfig {
        let time_overridden = overrides.dt.is_some() || overrides.total_time.is_some();
        let (dt, total_time) = if time_overridden {
            (overrides.dt, overrides.total_time)
        } else {
            (self.dt, self.total_time)
        };

        ExperimentConfig {
            name: overrides.name.or(self.name),
            lattice: overrides.lattice.or(self.lattice),
            coupling: overrides.coupling.or(self.coupling),
            field: overrides.field.or(self.field),
            dt,
            total_time,
            slices: overrides.slices.or(self.slices),
        }
    }

    /// Fill in defaults and validate.
    pub fn resolve(self) -> Result<Experiment> {
        let Some(dims) = self.lattice else {
            bail!("No lattice given: pass --dims or set `lattice` in the config file");
        };

        let coupling = self.coupling.unwrap_or(DEFAULT_COUPLING);
        let field = self.field.unwrap_or(DEFAULT_FIELD);
        let slices = self.slices.unwrap_or(DEFAULT_SLICES);

        let params = match (self.dt, self.total_time) {
            (Some(_), Some(_)) => bail!("Specify either dt or total_time, not both"),
            (Some(dt), None) => {
                let params = TrotterParameters::new(coupling, field, dt, slices);
                params.validate()?;
                params
            }
            (None, total_time) => TrotterParameters::from_total_time(
                coupling,
                field,
                total_time.unwrap_or(DEFAULT_TOTAL_TIME),
                slices,
            )?,
        };

        debug!(?dims, ?params, "resolved experiment");
        Ok(Experiment {
            name: self.name,
            dims,
            params,
        })
    }
}

/// Load `path` if given, apply `overrides`, and resolve.
pub fn load(path: Option<&Path>, overrides: ExperimentConfig) -> Result<Experiment> {
    let base = match path {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::default(),
    };
    base.merge(overrides).resolve()
}
