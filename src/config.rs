//! Optional JSON configuration file.
//!
//! Every field is optional; missing fields keep the [`EmbedOptions`]
//! defaults.  Command-line flags are applied on top by the binary.
//!
//! ```json
//! {
//!   "js_source": "./js",
//!   "dest": "./source",
//!   "build_type": "debug",
//!   "ignore": ["test.js"],
//!   "require_main": false
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::embedder::{BuildMode, EmbedError, EmbedOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedConfig {
    #[serde(default)]
    pub js_source:    Option<PathBuf>,
    #[serde(default)]
    pub dest:         Option<PathBuf>,
    #[serde(default)]
    pub build_type:   Option<BuildMode>,
    #[serde(default)]
    pub ignore:       Vec<String>,
    #[serde(default)]
    pub require_main: Option<bool>,
    #[serde(default)]
    pub output_name:  Option<String>,
    #[serde(default)]
    pub license:      Option<PathBuf>,
}

impl EmbedConfig {
    pub fn from_json(text: &str) -> Result<Self, EmbedError> {
        serde_json::from_str(text).map_err(|e| EmbedError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, EmbedError> {
        let text = fs::read_to_string(path).map_err(|e| EmbedError::io(path, e))?;
        serde_json::from_str(&text)
            .map_err(|e| EmbedError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Overlay the fields that are set onto `opts`.  Ignore entries are
    /// added, never removed.
    pub fn apply(&self, opts: &mut EmbedOptions) {
        if let Some(dir) = &self.js_source {
            opts.source_dir = dir.clone();
        }
        if let Some(dir) = &self.dest {
            opts.dest_dir = dir.clone();
        }
        if let Some(mode) = self.build_type {
            opts.build_mode = mode;
        }
        opts.ignore.extend(self.ignore.iter().cloned());
        if let Some(require_main) = self.require_main {
            opts.require_main = require_main;
        }
        if let Some(name) = &self.output_name {
            opts.output_name = name.clone();
        }
        if let Some(license) = &self.license {
            opts.license = Some(license.clone());
        }
    }

    pub fn into_options(self) -> EmbedOptions {
        let mut opts = EmbedOptions::default();
        self.apply(&mut opts);
        opts
    }
}
