//! Release-mode size reduction of embedded sources.
//!
//! Three textual passes, applied in order:
//!
//! 1. `/* ... */` block comments are removed, shortest match, across lines.
//! 2. `// ...` line comments are removed up to and including the newline.
//!    A line comment on the last line with no trailing newline survives.
//! 3. Leading spaces after a newline are dropped, then runs of newlines are
//!    collapsed to one.
//!
//! The passes know nothing about JavaScript.  A `//` or `/*` inside a string
//! or regex literal is treated as a comment like any other, so
//! `"http://host"` loses everything after `http:`.  Sources embedded in
//! release mode must avoid such literals or be built in debug mode.

use std::sync::OnceLock;

use regex::Regex;

fn block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("static regex"))
}

fn line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"//.*?\n").expect("static regex"))
}

fn indented_newline() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n +").expect("static regex"))
}

fn newline_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n+").expect("static regex"))
}

/// Strip comments and collapse whitespace in `code`.
pub fn reduce_code(code: &str) -> String {
    let code = block_comment().replace_all(code, "");
    let code = line_comment().replace_all(&code, "");
    let code = indented_newline().replace_all(&code, "\n");
    newline_run().replace_all(&code, "\n").into_owned()
}
