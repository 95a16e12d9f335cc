//! Wiki configuration and resolution context
//!
//! The wiki root is resolved once at startup with the following priority:
//! 1. `--root` command line flag
//! 2. `DESKWIKI_ROOT` environment variable
//! 3. `~/wiki` (under the user's home directory)
//!
//! Settings beyond the root live in an optional `wiki.yml` file inside the
//! root. All operations receive the resolved [`WikiContext`] explicitly;
//! there is no process-global state.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants as C;
use crate::paths;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Read(e) => e,
            ConfigError::Parse(e) => io::Error::new(io::ErrorKind::InvalidData, e.to_string()),
        }
    }
}

/// Settings loaded from `<root>/wiki.yml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Markup extension of page files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Name of the wiki's entry page
    #[serde(default = "default_index")]
    pub index: String,

    #[serde(default)]
    pub exporter: ExporterConfig,
}

/// External converter command invoked per page during export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    #[serde(default = "default_export_program")]
    pub program: String,

    /// Arguments passed to the converter; `{input}` and `{output}` are
    /// substituted with the page file and the target HTML file
    #[serde(default = "default_export_args")]
    pub args: Vec<String>,
}

fn default_extension() -> String {
    C::DEFAULT_EXTENSION.to_string()
}

fn default_index() -> String {
    C::DEFAULT_INDEX_PAGE.to_string()
}

fn default_export_program() -> String {
    C::DEFAULT_EXPORT_PROGRAM.to_string()
}

fn default_export_args() -> Vec<String> {
    C::DEFAULT_EXPORT_ARGS.iter().map(|s| s.to_string()).collect()
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            index: default_index(),
            exporter: ExporterConfig::default(),
        }
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            program: default_export_program(),
            args: default_export_args(),
        }
    }
}

impl WikiConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

/// Resolution context for wiki operations
#[derive(Debug, Clone)]
pub struct WikiContext {
    /// Normalized wiki root directory
    pub root: PathBuf,
    /// Settings from `wiki.yml` (defaults if the file is absent)
    pub config: WikiConfig,
    /// Whether to output in JSON format
    pub json: bool,
}

impl WikiContext {
    /// Build a context from the resolved root, loading `wiki.yml` if present
    pub fn new(root_flag: Option<&str>, json: bool) -> Result<Self, ConfigError> {
        let root = wiki_root(root_flag);

        let config_path = root.join(C::CONFIG_FILENAME);
        let config = if config_path.is_file() {
            WikiConfig::from_file(&config_path)?
        } else {
            WikiConfig::default()
        };

        Ok(Self { root, config, json })
    }

    /// Context with explicit settings, used by tests and embedding callers
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WikiConfig::default(),
            json: false,
        }
    }

    /// The wiki root as a normalized forward-slash string
    pub fn root_str(&self) -> String {
        paths::normalize_path(&self.root.to_string_lossy())
    }
}

/// Resolve the wiki root directory from flag, environment, or default
pub fn wiki_root(flag: Option<&str>) -> PathBuf {
    let raw = flag
        .map(|s| s.to_string())
        .or_else(|| std::env::var(C::ENV_WIKI_ROOT).ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| {
            crate::default_wiki_path()
                .unwrap_or_else(|| PathBuf::from(C::DEFAULT_WIKI_DIR))
                .to_string_lossy()
                .into_owned()
        });

    PathBuf::from(paths::normalize_path(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WikiConfig::default();
        assert_eq!(config.extension, "org");
        assert_eq!(config.index, "index");
        assert_eq!(config.exporter.program, "pandoc");
        assert!(config.exporter.args.contains(&"{input}".to_string()));
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config: WikiConfig = serde_yaml::from_str("extension: md\n").unwrap();
        assert_eq!(config.extension, "md");
        // Unspecified fields fall back to defaults
        assert_eq!(config.index, "index");
        assert_eq!(config.exporter.program, "pandoc");
    }

    #[test]
    fn test_parse_exporter_override() {
        let yaml = "exporter:\n  program: emacs\n  args: [\"--batch\", \"{input}\"]\n";
        let config: WikiConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.exporter.program, "emacs");
        assert_eq!(config.exporter.args, vec!["--batch", "{input}"]);
    }

    #[test]
    fn test_root_flag_wins() {
        let root = wiki_root(Some("/tmp//somewiki/"));
        assert_eq!(root, PathBuf::from("/tmp/somewiki"));
    }
}
