//! Analyzer configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! party_scan_chars = 5000
//!
//! [report]
//! max_items = 25
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Bounds used by the analysis pipeline and the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Characters at the start of the text scanned for party declarations.
    pub party_scan_chars: usize,
    /// Entries kept in the word-frequency table.
    pub common_words: usize,
    pub report: ReportConfig,
}

/// Truncation policy for the rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Items listed per entity category before the "... and N more" line.
    pub max_items: usize,
    /// Definitions longer than this are cut and suffixed with `...`.
    pub definition_preview_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            party_scan_chars: 3000,
            common_words: 20,
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_items: 10,
            definition_preview_chars: 50,
        }
    }
}

impl AnalyzerConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AnalyzerConfig::from_toml("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.party_scan_chars, 3000);
        assert_eq!(config.common_words, 20);
        assert_eq!(config.report.max_items, 10);
        assert_eq!(config.report.definition_preview_chars, 50);
    }

    #[test]
    fn partial_report_table_keeps_other_defaults() {
        let config = AnalyzerConfig::from_toml("[report]\nmax_items = 3\n").unwrap();
        assert_eq!(config.report.max_items, 3);
        assert_eq!(config.report.definition_preview_chars, 50);
        assert_eq!(config.party_scan_chars, 3000);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "party_scan_chars = 500").unwrap();
        writeln!(file, "common_words = 5").unwrap();

        let config = AnalyzerConfig::load(file.path()).unwrap();
        assert_eq!(config.party_scan_chars, 500);
        assert_eq!(config.common_words, 5);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AnalyzerConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "party_scan_chars = \"lots\"").unwrap();

        let err = AnalyzerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
