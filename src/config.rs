//! Book build configuration.
//!
//! Loaded from a JSON file and validated up front; every field is named and
//! typed rather than sniffed at use sites.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Configuration for one generation run. Immutable once validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookConfig {
    /// Directory the rendered book is written to.
    pub output: PathBuf,

    pub input: InputConfig,

    /// Chapter basename to display title. Chapters absent from the table
    /// fall back to `title`.
    #[serde(default)]
    pub titles: HashMap<String, String>,

    /// Directory holding `header.hdbs`, `header_single.hdbs`, `footer.hdbs`
    /// and the layout-level `assets/` directory.
    pub layout: PathBuf,

    /// Default display title, also used for the single-page edition.
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Content directory; enumerated for chapters when `files` is empty,
    /// and the home of the content-level `assets/` directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Explicit ordered chapter list. Takes precedence over `dir`.
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Basename pinned to the front of the chapter order.
    #[serde(default = "default_index")]
    pub index: String,

    /// Sort entries lexicographically before pinning the index.
    #[serde(default)]
    pub sort: bool,
}

fn default_index() -> String {
    "index.html".to_string()
}

fn default_title() -> String {
    "Untitled book".to_string()
}

impl BookConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: BookConfig = serde_json::from_str(&text).map_err(|e| {
            Error::Configuration(format!("invalid config {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(Error::Configuration("output directory is empty".to_string()));
        }
        if self.layout.as_os_str().is_empty() {
            return Err(Error::Configuration("layout directory is empty".to_string()));
        }
        if self.input.files.is_empty() && self.input.dir.is_none() {
            return Err(Error::Configuration(
                "input requires either a file list or a directory".to_string(),
            ));
        }
        if self.input.index.is_empty() {
            return Err(Error::Configuration("index filename is empty".to_string()));
        }
        Ok(())
    }
}
