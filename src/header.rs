//! Generated header layout.
//!
//! The text produced here is consumed by C builds that include the header
//! and expand `DECLARE_JS_CODES`; its shape must not drift.  Pieces are
//! joined with single newlines:
//!
//! ```text
//! <license>
//!
//! /* This file is generated by js2c. Please do not modify. */
//!
//! #ifndef JERRY_TARGETJS_H
//! #define JERRY_TARGETJS_H
//! <one block per entry>
//! <struct definition and DECLARE_JS_CODES table>
//!
//! #endif
//! ```

use crate::format::ArrayFormat;

/// Name used in the "generated by" marker line.
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Entry name given its own row at the head of the table.
pub const MAIN_NAME: &str = "main";

const GUARD_OPEN: &str = "#ifndef JERRY_TARGETJS_H\n#define JERRY_TARGETJS_H\n";

const GUARD_CLOSE: &str = "\n#endif\n";

const TABLE_PREAMBLE: &str = "
struct js_source_all {
  const char* name;
  const char* source;
  const int length;
};

#define DECLARE_JS_CODES \\
struct js_source_all js_codes[] = \\
{ \\";

const TABLE_SENTINEL: &str = "  { NULL, NULL, 0 } \\\n};";

// ── EmbeddedEntry ────────────────────────────────────────────────────────────

/// One embedded source: its symbol prefix and the exact text embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedEntry {
    pub name: String,
    pub data: String,
}

impl EmbeddedEntry {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self { name: name.into(), data: data.into() }
    }

    /// Byte length of the embedded text, excluding the null terminator.
    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn is_main(&self) -> bool {
        self.name == MAIN_NAME
    }

    /// The `_n` / `_s` / `_l` declarations for this entry.
    pub fn code_block(&self, format: &ArrayFormat) -> String {
        format!(
            "const static char {name}_n[] = \"{name}\";\n\
             const static char {name}_s[] =\n\
             {{\n\
             {body}\n\
             }};\n\
             const static int {name}_l = {len};\n",
            name = self.name,
            body = format.render(self.data.as_bytes()),
            len = self.length(),
        )
    }
}

fn table_row(name: &str) -> String {
    format!("  {{ {0}_n, {0}_s, {0}_l }}, \\", name)
}

// ── OutputDocument ───────────────────────────────────────────────────────────

/// Everything that goes into one generated header.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    pub license:      String,
    pub generator:    String,
    pub require_main: bool,
    pub format:       ArrayFormat,
    pub entries:      Vec<EmbeddedEntry>,
}

impl OutputDocument {
    pub fn new(license: impl Into<String>, require_main: bool) -> Self {
        Self {
            license:      license.into(),
            generator:    GENERATOR_NAME.to_string(),
            require_main,
            format:       ArrayFormat::default(),
            entries:      Vec::new(),
        }
    }

    pub fn push(&mut self, entry: EmbeddedEntry) {
        self.entries.push(entry);
    }

    /// Table rows in output order, sentinel excluded.
    ///
    /// With `require_main` the fixed `main` row comes first whether or not a
    /// `main` entry exists; an entry named `main` never gets a second row.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.entries.len() + 1);
        if self.require_main {
            names.push(MAIN_NAME);
        }
        names.extend(
            self.entries
                .iter()
                .filter(|e| !e.is_main())
                .map(|e| e.name.as_str()),
        );
        names
    }

    pub fn render(&self) -> String {
        let marker = format!(
            "/* This file is generated by {}. Please do not modify. */",
            self.generator
        );

        let mut table = vec![TABLE_PREAMBLE.to_string()];
        table.extend(self.table_names().into_iter().map(table_row));
        table.push(TABLE_SENTINEL.to_string());

        let mut parts = vec![
            self.license.clone(),
            String::new(),
            marker,
            String::new(),
            GUARD_OPEN.to_string(),
        ];
        parts.extend(self.entries.iter().map(|e| e.code_block(&self.format)));
        parts.push(table.join("\n"));
        parts.push(GUARD_CLOSE.to_string());
        parts.join("\n")
    }
}
