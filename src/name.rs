//! Symbol names for embedded sources.
//!
//! A source file's name becomes the prefix of three C symbols
//! (`<name>_n`, `<name>_s`, `<name>_l`).  Only the characters the generator
//! has always rewritten are replaced; anything else (spaces, leading digits)
//! passes through untouched and is the caller's problem.

use std::path::Path;

/// Characters replaced with `_` in a derived name.
pub const SPECIAL_CHARS: &[char] = &['-', '\\', '?', '\'', '"', '.'];

/// Derive the symbol name for `path`: file stem with [`SPECIAL_CHARS`]
/// replaced by underscores.
///
/// Only the last extension is dropped, so `jquery.min.js` becomes
/// `jquery_min`.
pub fn extract_name<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    stem.chars()
        .map(|c| if SPECIAL_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
