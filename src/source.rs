//! Input discovery: the `*.js` files directly inside a source directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::embedder::EmbedError;
use crate::name::extract_name;

/// Extension of files picked up by [`discover`].
pub const SOURCE_EXTENSION: &str = "js";

/// One input file, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path:      PathBuf,
    /// Basename, matched against the ignore list.
    pub file_name: String,
    /// Symbol prefix derived by [`extract_name`].
    pub name:      String,
    /// File text with CRLF line endings normalised to LF.
    pub content:   String,
}

impl SourceFile {
    /// Read `path` as UTF-8 text.
    pub fn read(path: &Path) -> Result<Self, EmbedError> {
        let bytes = fs::read(path).map_err(|e| EmbedError::io(path, e))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| EmbedError::Encoding { path: path.to_path_buf() })?;
        let content = if text.contains('\r') {
            text.replace("\r\n", "\n")
        } else {
            text
        };

        Ok(Self {
            path:      path.to_path_buf(),
            file_name: file_name_of(path),
            name:      extract_name(path),
            content,
        })
    }
}

/// List the `*.js` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not entered and dot-files are skipped.  An empty
/// result is not an error.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, EmbedError> {
    let entries = fs::read_dir(dir).map_err(|e| EmbedError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EmbedError::io(dir, e))?;
        let path = entry.path();
        if !is_source_file(&path) {
            trace!("skipping non-source entry {}", path.display());
            continue;
        }
        paths.push(path);
    }
    paths.sort_by_key(|p| file_name_of(p));

    debug!("discovered {} source file(s) in {}", paths.len(), dir.display());
    Ok(paths)
}

fn is_source_file(path: &Path) -> bool {
    let hidden = file_name_of(path).starts_with('.');
    let js = path.extension().map_or(false, |ext| ext == SOURCE_EXTENSION);
    !hidden && js && path.is_file()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discovers_only_top_level_js_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zeta.js"), "z").unwrap();
        fs::write(dir.path().join("alpha.js"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "n").unwrap();
        fs::write(dir.path().join("upper.JS"), "u").unwrap();
        fs::write(dir.path().join(".hidden.js"), "h").unwrap();
        fs::create_dir(dir.path().join("nested.js")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.js"), "d").unwrap();

        let names: Vec<String> = discover(dir.path())
            .unwrap()
            .iter()
            .map(|p| file_name_of(p))
            .collect();
        assert_eq!(names, vec!["alpha.js", "zeta.js"]);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let err = discover(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, EmbedError::Io { .. }));
    }

    #[test]
    fn read_normalises_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("my-lib.js");
        fs::write(&path, "var a;\r\nvar b;\r\n").unwrap();

        let src = SourceFile::read(&path).unwrap();
        assert_eq!(src.content, "var a;\nvar b;\n");
        assert_eq!(src.name, "my_lib");
        assert_eq!(src.file_name, "my-lib.js");
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.js");
        fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            SourceFile::read(&path),
            Err(EmbedError::Encoding { .. })
        ));
    }
}
