//! Rendering configuration
//!
//! Every field has a default, so a config file only needs to name the
//! values it changes. Files are read as TOML, YAML or JSON depending on
//! their extension.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::stats::{DEFAULT_NUMERIC_LIMIT, DEFAULT_TEXT_LIMIT};
use crate::vis::bar_chart::DEFAULT_MAX_BARS;
use crate::vis::dashboard::{DEFAULT_PREVIEW_ROWS, DEFAULT_TOP_VALUES};
use crate::vis::distribution::DEFAULT_BINS;
use crate::vis::table::{DEFAULT_CELL_MAX_CHARS, DEFAULT_TABLE_ROWS};

/// Limits and switches shared by all views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Bars kept per chart
    pub max_bars: usize,
    /// Histogram bins for numeric distributions
    pub bins: usize,
    /// Bars in a top-values chart
    pub top_values: usize,
    /// Rows in the dashboard preview
    pub preview_rows: usize,
    /// Rows in the standalone table view
    pub table_rows: usize,
    /// Numeric columns listed in the summary
    pub numeric_summary_limit: usize,
    /// Text columns listed in the summary
    pub text_summary_limit: usize,
    /// String cells longer than this are cut
    pub cell_max_chars: usize,
    /// Emit ANSI colors when writing to a terminal
    pub ansi: bool,
}

impl Default for VizConfig {
    fn default() -> Self {
        VizConfig {
            max_bars: DEFAULT_MAX_BARS,
            bins: DEFAULT_BINS,
            top_values: DEFAULT_TOP_VALUES,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            table_rows: DEFAULT_TABLE_ROWS,
            numeric_summary_limit: DEFAULT_NUMERIC_LIMIT,
            text_summary_limit: DEFAULT_TEXT_LIMIT,
            cell_max_chars: DEFAULT_CELL_MAX_CHARS,
            ansi: false,
        }
    }
}

impl VizConfig {
    /// Load from a `.toml`, `.yaml`/`.yml` or `.json` file and validate
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let config: VizConfig = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            other => {
                return Err(Error::InvalidConfig(format!(
                    "unsupported config file extension '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };

        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject limits that would leave charts without any bars
    pub fn validate(&self) -> Result<()> {
        if self.max_bars == 0 {
            return Err(Error::InvalidConfig("max_bars must be positive".into()));
        }
        if self.bins == 0 {
            return Err(Error::InvalidConfig("bins must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = VizConfig::default();
        assert_eq!(config.max_bars, 20);
        assert_eq!(config.bins, 10);
        assert_eq!(config.top_values, 10);
        assert_eq!(config.preview_rows, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let file = write_config(".toml", "bins = 5\nansi = true\n");
        let config = VizConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bins, 5);
        assert!(config.ansi);
        assert_eq!(config.max_bars, 20);
    }

    #[test]
    fn test_yaml_and_json() {
        let yaml = write_config(".yml", "max_bars: 7\n");
        assert_eq!(VizConfig::from_file(yaml.path()).unwrap().max_bars, 7);

        let json = write_config(".json", r#"{"table_rows": 3}"#);
        assert_eq!(VizConfig::from_file(json.path()).unwrap().table_rows, 3);
    }

    #[test]
    fn test_rejects_bad_input() {
        let zero = write_config(".toml", "bins = 0\n");
        assert!(matches!(
            VizConfig::from_file(zero.path()),
            Err(Error::InvalidConfig(_))
        ));

        let unknown = write_config(".ini", "bins = 3\n");
        assert!(matches!(
            VizConfig::from_file(unknown.path()),
            Err(Error::InvalidConfig(_))
        ));

        let broken = write_config(".toml", "bins = [\n");
        assert!(matches!(VizConfig::from_file(broken.path()), Err(Error::Toml(_))));
    }
}
