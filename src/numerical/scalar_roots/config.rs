//! Solver configuration: tolerance and iteration cap, optionally loaded from a TOML document
//! together with the log level and the default method.
use std::path::Path;
use std::str::FromStr;

use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::root_finder_api::RootFindingMethod;

/// Configuration shared by all iterative methods
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    pub fn new(tolerance: f64, max_iterations: usize) -> Result<Self, RootFindingError> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Both values must be strictly positive (and the tolerance finite).
    pub fn validate(&self) -> Result<(), RootFindingError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RootFindingError::InvalidInput(format!(
                "tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RootFindingError::InvalidInput(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything a `ScalarRootFinder` can be set up from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootFinderSettings {
    pub config: SolverConfig,
    pub loglevel: Option<String>,
    pub method: Option<RootFindingMethod>,
}

impl RootFinderSettings {
    /// Reads the `[solver]` table of a TOML document:
    /// ```toml
    /// [solver]
    /// tolerance = 1e-8
    /// max_iterations = 200
    /// loglevel = "info"
    /// method = "newton_raphson"
    /// ```
    /// Missing keys keep their defaults, a missing table gives the default settings.
    pub fn from_toml_str(document: &str) -> Result<Self, RootFindingError> {
        let table = document
            .parse::<toml::Table>()
            .map_err(|e| RootFindingError::InvalidInput(format!("malformed TOML: {}", e)))?;
        let mut settings = RootFinderSettings::default();
        let Some(solver) = table.get("solver") else {
            return Ok(settings);
        };
        let solver = solver
            .as_table()
            .ok_or_else(|| RootFindingError::InvalidInput("[solver] must be a table".to_string()))?;

        if let Some(value) = solver.get("tolerance") {
            settings.config.tolerance = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| wrong_type("tolerance", "a number"))?;
        }
        if let Some(value) = solver.get("max_iterations") {
            let max_iterations = value
                .as_integer()
                .ok_or_else(|| wrong_type("max_iterations", "an integer"))?;
            settings.config.max_iterations = usize::try_from(max_iterations)
                .map_err(|_| wrong_type("max_iterations", "a non-negative integer"))?;
        }
        if let Some(value) = solver.get("loglevel") {
            let level = value.as_str().ok_or_else(|| wrong_type("loglevel", "a string"))?;
            settings.loglevel = Some(level.to_string());
        }
        if let Some(value) = solver.get("method") {
            let name = value.as_str().ok_or_else(|| wrong_type("method", "a string"))?;
            let method = RootFindingMethod::from_str(name).map_err(|_| {
                RootFindingError::InvalidInput(format!("unknown method '{}'", name))
            })?;
            settings.method = Some(method);
        }
        settings.config.validate()?;
        Ok(settings)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, RootFindingError> {
        let document = std::fs::read_to_string(path).map_err(|e| {
            RootFindingError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&document)
    }
}

fn wrong_type(key: &str, expected: &str) -> RootFindingError {
    RootFindingError::InvalidInput(format!("solver.{} must be {}", key, expected))
}
