//! C array-literal rendering for embedded sources.
//!
//! # Layout
//! Every byte becomes a lowercase hex literal (`0x76`), values are joined by
//! `", "`, and lines hold [`ArrayFormat::per_line`] values each, indented by
//! [`ArrayFormat::indent`] units of two spaces.  A `0x00` terminator is
//! always appended so the generated `char[]` is a valid C string; the
//! terminator is not part of the embedded length.
//!
//! ```
//! use js2c::format::{format_code, parse_array_body};
//!
//! let body = format_code("var", 1, 2);
//! assert_eq!(body, "  0x76, 0x61, 0x72, 0x00");
//! assert_eq!(parse_array_body(&body)?, b"var\0");
//! # Ok::<(), js2c::format::FormatError>(())
//! ```

use thiserror::Error;

/// Indent unit used for every array line.
pub const INDENT_UNIT: &str = "  ";

/// License block placed at the head of every generated header.
pub const LICENSE: &str = "\
/* Copyright JS Foundation and other contributors, http://js.foundation
 *
 * Licensed under the Apache License, Version 2.0 (the \"License\");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an \"AS IS\" BASIS
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */";

// ── ArrayFormat ──────────────────────────────────────────────────────────────

/// Parameters for [`ArrayFormat::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayFormat {
    /// Indent units (of [`INDENT_UNIT`]) before each line.
    pub indent:   usize,
    /// Minimum hex digits per value; shorter values are zero-padded.
    pub digits:   usize,
    /// Values per line.
    pub per_line: usize,
}

impl Default for ArrayFormat {
    fn default() -> Self {
        Self { indent: 1, digits: 2, per_line: 10 }
    }
}

impl ArrayFormat {
    /// Render `data` plus a trailing `0x00` as an initializer body.
    pub fn render(&self, data: &[u8]) -> String {
        let prefix = INDENT_UNIT.repeat(self.indent);
        let per_line = self.per_line.max(1);
        let values: Vec<String> = data
            .iter()
            .chain(std::iter::once(&0u8))
            .map(|b| format!("0x{:0width$x}", b, width = self.digits))
            .collect();

        values
            .chunks(per_line)
            .map(|line| format!("{}{}", prefix, line.join(", ")))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

/// Render `code` with `indent` units of indentation and `digits`-wide hex
/// values, ten per line.
pub fn format_code(code: &str, indent: usize, digits: usize) -> String {
    ArrayFormat { indent, digits, ..ArrayFormat::default() }.render(code.as_bytes())
}

// ── Parsing ──────────────────────────────────────────────────────────────────

/// Read an initializer body produced by [`format_code`] back into bytes.
///
/// Whitespace and line breaks are insignificant; a trailing comma is
/// allowed.  The `0x00` terminator is returned as part of the bytes.
pub fn parse_array_body(body: &str) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::new();
    let tokens: Vec<&str> = body.split(',').map(str::trim).collect();
    let last = tokens.len().saturating_sub(1);

    for (i, token) in tokens.into_iter().enumerate() {
        if token.is_empty() {
            if i == last {
                break;
            }
            return Err(FormatError::EmptyValue { index: i });
        }
        let hex = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .ok_or_else(|| FormatError::InvalidLiteral(token.to_string()))?;
        let value = u8::from_str_radix(hex, 16)
            .map_err(|_| FormatError::InvalidLiteral(token.to_string()))?;
        out.push(value);
    }
    Ok(out)
}

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid byte literal: {0:?}")]
    InvalidLiteral(String),
    #[error("Empty value at position {index}")]
    EmptyValue { index: usize },
}
