use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub markup: MarkupConfig,
}

/// Where the document is read from and the quiz is written to.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("README.md"),
            output: PathBuf::from("docs/quiz.json"),
        }
    }
}

/// Markers recognised by the extractor and the style put on image tags.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Prefix (after trimming) of a line that opens a question block
    pub heading: String,
    /// Prefix (after trimming) of the anchor line that closes a block
    pub back_to_top: String,
    /// Inline style attribute emitted on every `<img>` tag
    pub image_style: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            heading: "### ".to_string(),
            back_to_top: "**[⬆ Back to Top]".to_string(),
            image_style: "max-width:320px".to_string(),
        }
    }
}

impl Config {
    /// The defaults bundled into the binary from `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if the
    /// file does not exist. An unreadable or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::compiled_default()),
            Err(source) => Err(QuizError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load config from a TOML file that must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| QuizError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| QuizError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
