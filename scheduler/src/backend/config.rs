//! # Scheduler Configuration
//!
//! Optional YAML file; every field falls back to its default.
//!
//! ```yaml
//! max_range_days: 366
//! log_filter: "info,institute_scheduler=debug"
//! roster_path: "data/roster.json"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Longest free-slot query range, in days (both ends counted)
    pub max_range_days: u32,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Roster snapshot the binary reads when none is given on the command line
    pub roster_path: Option<PathBuf>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_range_days: 366,
            log_filter: "info".to_string(),
            roster_path: None,
        }
    }
}

impl SchedulerConfig {
    /// Load the config at `path`. A missing file, or no path at all, yields the
    /// defaults; a file that exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SchedulerConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SchedulerConfig::load(Some(&dir.path().join("scheduler.yaml"))).unwrap();
        assert_eq!(config, SchedulerConfig::default());
        assert_eq!(SchedulerConfig::load(None).unwrap().max_range_days, 366);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scheduler.yaml");
        fs::write(&path, "max_range_days: 31\n").unwrap();

        let config = SchedulerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.max_range_days, 31);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.roster_path, None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scheduler.yaml");
        fs::write(&path, "max_range_days: lots\n").unwrap();

        assert!(SchedulerConfig::load(Some(&path)).is_err());
    }
}
