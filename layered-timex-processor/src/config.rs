//! Processor configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use layered_event_anchor::AnchorConfig;

use crate::errors::{ProcessError, ProcessResult};

/// Configuration for [`TimexProcessor`](crate::TimexProcessor).
///
/// Every field may be left out of a TOML file and falls back to
/// [`ProcessorConfig::standard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Sentences handed to the dependency parser per call.
    pub batch_size: usize,
    /// Rounds the event anchor search may take before it gives up.
    pub max_anchor_iterations: usize,
    /// Consult the generic date parsers when a rule has no value of its own.
    pub fallback_parsers: bool,
    /// Tidy sentence text before parsing.
    pub prepare_sentences: bool,
    /// Look for the event of every expression.
    pub extract_events: bool,
}

impl ProcessorConfig {
    pub fn standard() -> Self {
        Self {
            batch_size: 3,
            max_anchor_iterations: AnchorConfig::standard().max_iterations,
            fallback_parsers: true,
            prepare_sentences: true,
            extract_events: true,
        }
    }

    /// Load from a TOML file. A missing file means the standard settings.
    pub fn load(path: &Path) -> ProcessResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ProcessError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&content).map_err(|err| match err {
            ProcessError::ConfigParse { message, .. } => ProcessError::ConfigParse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> ProcessResult<Self> {
        toml::from_str(content).map_err(|err| ProcessError::ConfigParse {
            path: "<inline>".to_string(),
            message: err.to_string(),
        })
    }

    pub fn anchor_config(&self) -> AnchorConfig {
        AnchorConfig {
            max_iterations: self.max_anchor_iterations,
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "batch_size = 8").unwrap();
        writeln!(file, "extract_events = false").unwrap();

        let config = ProcessorConfig::load(file.path()).unwrap();
        assert_eq!(config.batch_size, 8);
        assert!(!config.extract_events);
        assert_eq!(config.max_anchor_iterations, 32);
        assert!(config.fallback_parsers);
        assert!(config.prepare_sentences);
    }

    #[test]
    fn missing_file_is_standard() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProcessorConfig::load(&dir.path().join("timex.toml")).unwrap();
        assert_eq!(config, ProcessorConfig::standard());
    }

    #[test]
    fn bad_file_names_itself() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "batch_size = \"three\"").unwrap();

        let err = ProcessorConfig::load(file.path()).unwrap_err();
        match err {
            ProcessError::ConfigParse { path, .. } => {
                assert_eq!(path, file.path().display().to_string())
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
