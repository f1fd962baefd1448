//! Configuration from codeblank.toml

use crate::blanks::LineEnding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "codeblank.toml";

/// Which bundled tokenizer highlights the code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Keyword, literal and comment classification
    #[default]
    Lexical,
    /// Indentation plus one unstyled span
    Plain,
}

/// Main configuration from codeblank.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeblankConfig {
    /// Language used when none is given and the file extension is unknown
    pub language: String,

    /// Separator between lines of generated output
    pub line_ending: LineEnding,

    /// Tokenizer used to highlight stripped lines
    pub tokenizer: TokenizerKind,

    /// File extensions (without the dot) visited by `check`; empty means all
    pub extensions: Vec<String>,

    /// Extra keywords per language id for the lexical tokenizer
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl Default for CodeblankConfig {
    fn default() -> Self {
        Self {
            language: "plaintext".to_string(),
            line_ending: LineEnding::default(),
            tokenizer: TokenizerKind::default(),
            extensions: Vec::new(),
            keywords: BTreeMap::new(),
        }
    }
}

impl CodeblankConfig {
    /// Load configuration from a codeblank.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CodeblankConfig)` - Loaded configuration, missing keys defaulted
    /// * `Err(ConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse(_, source) => ConfigError::Parse(path.to_path_buf(), source),
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(PathBuf::new(), e))
    }

    /// Load `path` if given, else `codeblank.toml` from `dir` if it exists,
    /// else the defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::info!("Using configuration from {}", candidate.display());
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a codeblank.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, content).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Ok(())
    }

    /// Whether `check` should visit a file with this path
    pub fn accepts_path(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading or writing the file
    #[error("IO error on {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    /// Error parsing TOML
    #[error("TOML parse error in {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    /// Error serializing to TOML
    #[error("TOML serialize error: {0}")]
    Serialize(#[source] toml::ser::Error),
}
