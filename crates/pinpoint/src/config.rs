//! Configuration for the pinpoint CLI.
//!
//! Settings come from a YAML file named `.pinpoint.yaml`, found by walking
//! up from the working directory, or from an explicit `--config` path.
//! Every key is optional:
//!
//! ```yaml
//! dotnet: /usr/local/share/dotnet/dotnet
//! project: tests/Shop.Tests/Shop.Tests.csproj
//! extra_args: ["--no-build", "--logger", "console;verbosity=normal"]
//! filter_operator: contains
//! log_level: info
//! ```
//!
//! The resolvers take no configuration; only the command-building layer and
//! the binary's logging setup read it.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing::level_filters::LevelFilter;

use crate::error::{Error, Result};
use crate::filter::FilterOperator;

/// Name of the configuration file searched for by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = ".pinpoint.yaml";

const DEFAULT_DOTNET: &str = "dotnet";

/// Configuration for test command construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Program used to run tests
    pub dotnet: String,
    /// Project or solution passed to `dotnet test`; the working directory's
    /// project is used when absent
    pub project: Option<PathBuf>,
    /// Arguments appended after the filter
    pub extra_args: Vec<String>,
    /// Operator used for every filter term
    pub filter_operator: FilterOperator,
    /// Default log filter when neither `RUST_LOG` nor `-v` is given
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dotnet: DEFAULT_DOTNET.to_string(),
            project: None,
            extra_args: Vec::new(),
            filter_operator: FilterOperator::default(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read,
    /// [`Error::ConfigFormat`] if it is not valid configuration YAML, and
    /// [`Error::Config`] if a value is unusable.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read config {}: {e}", path.display()),
            ))
        })?;
        let config = Self::from_yaml(&text)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text.
    ///
    /// Empty text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFormat`] for malformed YAML or unknown keys and
    /// [`Error::Config`] if `dotnet` is blank or `log_level` is not a level.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Find and load the nearest `.pinpoint.yaml` at or above `start`.
    ///
    /// Returns the defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Config::load`] for a file that exists but
    /// cannot be used.
    pub fn discover(start: &Path) -> Result<Self> {
        match Self::find_file(start) {
            Some(path) => Self::load(&path),
            None => {
                debug!(start = %start.display(), "No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Locate the nearest configuration file at or above `start`.
    #[must_use]
    pub fn find_file(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    fn validate(&self) -> Result<()> {
        if self.dotnet.trim().is_empty() {
            return Err(Error::Config("`dotnet` must not be empty".to_string()));
        }
        if let Some(level) = &self.log_level
            && LevelFilter::from_str(level).is_err()
        {
            return Err(Error::Config(format!(
                "`log_level` must be one of off, error, warn, info, debug or trace, got `{level}`"
            )));
        }
        Ok(())
    }
}
