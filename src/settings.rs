use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_DATA_FILE, DEFAULT_TOP_N, DEFAULT_VIEW_THRESHOLD, ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

/// Runtime settings, layered as defaults, then an optional TOML file, then
/// `AQI_EXPLORER_*` environment variables. CLI flags are applied last by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct Settings {
    pub data_path: PathBuf,

    #[validate(range(min = 0.0, max = 500.0))]
    pub threshold: f64,

    #[validate(range(min = 1))]
    pub top_n: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            threshold: DEFAULT_VIEW_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Settings {
    /// Load settings from `path` (or the default config file when absent).
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let defaults = Settings::default();

        let settings: Settings = Config::builder()
            .set_default("data_path", defaults.data_path.to_string_lossy().to_string())?
            .set_default("threshold", defaults.threshold)?
            .set_default("top_n", defaults.top_n as u64)?
            .add_source(File::from(file).required(path.is_some()))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        threshold: Option<f64>,
        top_n: Option<usize>,
    ) -> Result<Self> {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }
        if let Some(top_n) = top_n {
            self.top_n = top_n;
        }
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.threshold, 100.0);
        assert_eq!(settings.top_n, 10);
    }

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_path = \"data/readings.csv\"")?;
        writeln!(file, "threshold = 150.0")?;

        let settings = Settings::load(Some(file.path()))?;
        assert_eq!(settings.data_path, PathBuf::from("data/readings.csv"));
        assert_eq!(settings.threshold, 150.0);
        assert_eq!(settings.top_n, 10);

        Ok(())
    }

    #[test]
    fn test_out_of_range_threshold_rejected() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "threshold = 900.0")?;

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));

        Ok(())
    }

    #[test]
    fn test_overrides_are_validated() {
        let err = Settings::default()
            .with_overrides(None, Some(-1.0), None)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));

        let settings = Settings::default()
            .with_overrides(Some(PathBuf::from("other.csv")), Some(0.0), Some(3))
            .unwrap();
        assert_eq!(settings.data_path, PathBuf::from("other.csv"));
        assert_eq!(settings.top_n, 3);
    }
}
