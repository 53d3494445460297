//! High-level [`Embedder`] API: sources in, one generated header out.
//!
//! ```no_run
//! use js2c::embedder::{BuildMode, EmbedOptions, Embedder};
//!
//! let opts = EmbedOptions {
//!     build_mode: BuildMode::Debug,
//!     ..EmbedOptions::default()
//! };
//! let report = Embedder::new(opts).run()?;
//! println!("wrote {}", report.output_path.display());
//! # Ok::<(), js2c::embedder::EmbedError>(())
//! ```
//!
//! # Failure model
//! The whole document is assembled in memory before the destination file is
//! opened.  Any error (unreadable source, bad encoding, name collision)
//! aborts the run without touching an existing header.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::LICENSE;
use crate::header::{EmbeddedEntry, OutputDocument, MAIN_NAME};
use crate::reduce::reduce_code;
use crate::source::{discover, SourceFile};

/// Default directory scanned for `*.js` inputs.
pub const DEFAULT_SOURCE_DIR:  &str = "./js";
/// Default directory the header is written to.
pub const DEFAULT_DEST_DIR:    &str = "./source";
/// Default file name of the generated header.
pub const DEFAULT_OUTPUT_NAME: &str = "jerry-targetjs.h";

// ── BuildMode ────────────────────────────────────────────────────────────────

/// Whether sources are reduced before embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Comments and indentation stripped.
    #[default]
    Release,
    /// Verbatim text, so line numbers in the embedded source stay accurate.
    Debug,
}

impl BuildMode {
    pub fn name(self) -> &'static str {
        match self {
            BuildMode::Release => "release",
            BuildMode::Debug   => "debug",
        }
    }

    /// Parse from a CLI or config string.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "release" => Some(BuildMode::Release),
            "debug"   => Some(BuildMode::Debug),
            _         => None,
        }
    }

    /// The text that gets embedded for `code` in this mode.
    pub fn prepare(self, code: &str) -> String {
        match self {
            BuildMode::Release => reduce_code(code),
            BuildMode::Debug   => code.to_string(),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildMode {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildMode::from_name(s).ok_or_else(|| {
            EmbedError::Config(format!(
                "unknown build type '{}' (expected 'release' or 'debug')",
                s
            ))
        })
    }
}

// ── EmbedOptions ─────────────────────────────────────────────────────────────

/// Configuration for [`Embedder::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    pub source_dir:   PathBuf,
    pub dest_dir:     PathBuf,
    pub build_mode:   BuildMode,
    /// Basenames (e.g. `"test.js"`) skipped entirely.
    pub ignore:       BTreeSet<String>,
    /// Emit the fixed `main` row at the head of the table.
    pub require_main: bool,
    pub output_name:  String,
    /// Replaces the built-in license block when set.
    pub license:      Option<PathBuf>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            source_dir:   PathBuf::from(DEFAULT_SOURCE_DIR),
            dest_dir:     PathBuf::from(DEFAULT_DEST_DIR),
            build_mode:   BuildMode::Release,
            ignore:       BTreeSet::new(),
            require_main: true,
            output_name:  DEFAULT_OUTPUT_NAME.to_string(),
            license:      None,
        }
    }
}

impl EmbedOptions {
    pub fn output_path(&self) -> PathBuf {
        self.dest_dir.join(&self.output_name)
    }
}

// ── EmbedReport ──────────────────────────────────────────────────────────────

/// Summary of a completed [`Embedder::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub output_path:    PathBuf,
    /// Entry names in the order their blocks were emitted.
    pub entries:        Vec<String>,
    pub embedded_bytes: usize,
    pub found_main:     bool,
}

// ── Embedder ─────────────────────────────────────────────────────────────────

pub struct Embedder {
    opts: EmbedOptions,
}

impl Embedder {
    pub fn new(opts: EmbedOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &EmbedOptions {
        &self.opts
    }

    /// Discover, read, and transform every non-ignored source.
    pub fn collect(&self) -> Result<Vec<EmbeddedEntry>, EmbedError> {
        let mut entries = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in discover(&self.opts.source_dir)? {
            if self.is_ignored(&path) {
                debug!("ignoring {}", path.display());
                continue;
            }
            let src = SourceFile::read(&path)?;
            if let Some(first) = seen.get(&src.name) {
                return Err(EmbedError::DuplicateName {
                    name:   src.name,
                    first:  first.clone(),
                    second: src.path,
                });
            }
            seen.insert(src.name.clone(), src.path.clone());

            let data = self.opts.build_mode.prepare(&src.content);
            debug!(
                "{} -> {} ({} of {} bytes, {})",
                src.file_name,
                src.name,
                data.len(),
                src.content.len(),
                self.opts.build_mode,
            );
            entries.push(EmbeddedEntry::new(src.name, data));
        }
        Ok(entries)
    }

    /// Build the full header text without writing it.
    pub fn render(&self) -> Result<String, EmbedError> {
        Ok(self.document()?.render())
    }

    /// Build the header and write it to [`EmbedOptions::output_path`],
    /// replacing any existing file.
    pub fn run(&self) -> Result<EmbedReport, EmbedError> {
        let doc = self.document()?;
        let found_main = doc.entries.iter().any(EmbeddedEntry::is_main);
        if self.opts.require_main && !found_main {
            warn!(
                "no {}.js in {}; the generated table still references {}_s",
                MAIN_NAME,
                self.opts.source_dir.display(),
                MAIN_NAME
            );
        }

        let text = doc.render();
        let output_path = self.opts.output_path();
        fs::write(&output_path, &text).map_err(|e| EmbedError::io(&output_path, e))?;

        let report = EmbedReport {
            output_path,
            entries:        doc.entries.iter().map(|e| e.name.clone()).collect(),
            embedded_bytes: doc.entries.iter().map(EmbeddedEntry::length).sum(),
            found_main,
        };
        info!(
            "wrote {} ({} entries, {} bytes embedded)",
            report.output_path.display(),
            report.entries.len(),
            report.embedded_bytes
        );
        Ok(report)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.file_name()
            .map_or(false, |n| self.opts.ignore.contains(n.to_string_lossy().as_ref()))
    }

    fn document(&self) -> Result<OutputDocument, EmbedError> {
        let license = match &self.opts.license {
            Some(path) => load_license(path)?,
            None       => LICENSE.to_string(),
        };
        let mut doc = OutputDocument::new(license, self.opts.require_main);
        for entry in self.collect()? {
            doc.push(entry);
        }
        Ok(doc)
    }
}

fn load_license(path: &Path) -> Result<String, EmbedError> {
    let text = fs::read_to_string(path).map_err(|e| EmbedError::io(path, e))?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("IO error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
    /// Two sources sanitise to the same symbol prefix.
    #[error("Duplicate name '{name}' from {} and {}", first.display(), second.display())]
    DuplicateName { name: String, first: PathBuf, second: PathBuf },
}

impl EmbedError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        EmbedError::Io { path: path.to_path_buf(), source }
    }
}
