use js2c::embedder::{BuildMode, EmbedOptions, Embedder};
use js2c::format::{parse_array_body, LICENSE};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn project(files: &[(&str, &str)]) -> (TempDir, EmbedOptions) {
    let root = tempdir().unwrap();
    let js = root.path().join("js");
    let dest = root.path().join("source");
    fs::create_dir(&js).unwrap();
    fs::create_dir(&dest).unwrap();
    for (name, text) in files {
        fs::write(js.join(name), text).unwrap();
    }
    let opts = EmbedOptions {
        source_dir: js,
        dest_dir: dest,
        ..EmbedOptions::default()
    };
    (root, opts)
}

/// `{ x_n, x_s, x_l }` rows of the DECLARE_JS_CODES table, sentinel included.
fn table_rows(header: &str) -> Vec<String> {
    let start = header.find("js_codes[]").expect("table present");
    header[start..]
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("{ ") && l.contains('}'))
        .map(|l| l.trim_end_matches(" \\").trim_end_matches(',').to_string())
        .collect()
}

/// The initializer body of `<name>_s`, decoded back into bytes.
fn embedded_bytes(header: &str, name: &str) -> Vec<u8> {
    let decl = format!("const static char {}_s[] =\n{{\n", name);
    let start = header.find(&decl).expect("array declared") + decl.len();
    let end = start + header[start..].find("\n};").expect("array closed");
    parse_array_body(&header[start..end]).unwrap()
}

fn read_output(opts: &EmbedOptions) -> String {
    fs::read_to_string(opts.output_path()).unwrap()
}

#[test]
fn test_release_end_to_end() {
    let (_root, opts) = project(&[
        ("main.js", "// hi\nvar x = 1;\n"),
        ("util.js", "var y = 2;"),
    ]);
    Embedder::new(opts.clone()).run().unwrap();
    let header = read_output(&opts);

    assert!(header.contains("const static char main_n[] = \"main\";"));
    assert!(header.contains("const static char util_n[] = \"util\";"));
    assert!(header.contains("const static int main_l = 11;"));
    assert!(header.contains("const static int util_l = 10;"));

    assert_eq!(
        table_rows(&header),
        vec![
            "{ main_n, main_s, main_l }",
            "{ util_n, util_s, util_l }",
            "{ NULL, NULL, 0 }",
        ]
    );

    assert_eq!(embedded_bytes(&header, "main"), b"var x = 1;\n\0");
}

#[test]
fn test_header_framing() {
    let (_root, opts) = project(&[("main.js", "var a;")]);
    Embedder::new(opts.clone()).run().unwrap();
    let header = read_output(&opts);

    let expected_head = format!(
        "{}\n\n/* This file is generated by js2c. Please do not modify. */\n\n\
         #ifndef JERRY_TARGETJS_H\n#define JERRY_TARGETJS_H\n\n",
        LICENSE
    );
    assert!(header.starts_with(&expected_head));
    assert!(header.contains("#define DECLARE_JS_CODES \\\nstruct js_source_all js_codes[] = \\\n{ \\\n"));
    assert!(header.ends_with("  { NULL, NULL, 0 } \\\n};\n\n#endif\n"));
}

#[test]
fn test_debug_embeds_verbatim() {
    let text = "/* keep me */\n// and me\n    var z = 3;\n\n";
    let (_root, mut opts) = project(&[("main.js", text)]);
    opts.build_mode = BuildMode::Debug;
    Embedder::new(opts.clone()).run().unwrap();
    let header = read_output(&opts);

    let mut expected = text.as_bytes().to_vec();
    expected.push(0);
    assert_eq!(embedded_bytes(&header, "main"), expected);
    assert!(header.contains(&format!("const static int main_l = {};", text.len())));
}

#[test]
fn test_empty_source_dir_gives_sentinel_only_table() {
    let (_root, mut opts) = project(&[]);
    opts.require_main = false;
    let report = Embedder::new(opts.clone()).run().unwrap();
    assert!(report.entries.is_empty());

    assert_eq!(table_rows(&read_output(&opts)), vec!["{ NULL, NULL, 0 }"]);
}

#[test]
fn test_no_main_table_rows() {
    let (_root, mut opts) = project(&[
        ("alpha.js", "a"),
        ("main.js", "m"),
        ("beta.js", "b"),
    ]);
    opts.require_main = false;
    Embedder::new(opts.clone()).run().unwrap();
    let header = read_output(&opts);

    // main's block is still emitted, but it has no table row.
    assert!(header.contains("const static int main_l = 1;"));
    assert_eq!(
        table_rows(&header),
        vec![
            "{ alpha_n, alpha_s, alpha_l }",
            "{ beta_n, beta_s, beta_l }",
            "{ NULL, NULL, 0 }",
        ]
    );
}

#[test]
fn test_table_completeness_with_main() {
    let names = ["b.js", "main.js", "a.js", "c-d.js"];
    let files: Vec<(&str, &str)> = names.iter().map(|n| (*n, "var v;")).collect();
    let (_root, opts) = project(&files);
    Embedder::new(opts.clone()).run().unwrap();

    let rows = table_rows(&read_output(&opts));
    // One row per file (main gets the head row), plus the sentinel.
    assert_eq!(rows.len(), names.len() + 1);
    assert_eq!(rows[0], "{ main_n, main_s, main_l }");
    assert_eq!(rows[1], "{ a_n, a_s, a_l }");
    assert_eq!(rows[3], "{ c_d_n, c_d_s, c_d_l }");
    assert_eq!(rows.iter().filter(|r| r.starts_with("{ main_n")).count(), 1);
}

#[test]
fn test_ignore_list() {
    let (_root, mut opts) = project(&[
        ("main.js", "m"),
        ("test.js", "t"),
        ("lib.js", "l"),
    ]);
    opts.ignore.insert("test.js".into());
    let report = Embedder::new(opts.clone()).run().unwrap();
    assert_eq!(report.entries, vec!["lib", "main"]);

    let header = read_output(&opts);
    assert!(!header.contains("test_n"));
    assert!(!table_rows(&header).iter().any(|r| r.contains("test")));
}

#[test]
fn test_non_js_and_nested_files_skipped() {
    let (root, opts) = project(&[("main.js", "m"), ("readme.md", "# r")]);
    let nested = root.path().join("js").join("lib");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("inner.js"), "i").unwrap();

    let report = Embedder::new(opts).run().unwrap();
    assert_eq!(report.entries, vec!["main"]);
}

#[test]
fn test_missing_source_dir_fails_without_output() {
    let (root, mut opts) = project(&[]);
    opts.source_dir = root.path().join("nope");
    assert!(Embedder::new(opts.clone()).run().is_err());
    assert!(!Path::new(&opts.output_path()).exists());
}

#[test]
fn test_string_literal_with_slashes_is_cut_in_release() {
    let text = "var url = \"http://example.com\";\nvar n = 1;\n";
    let (_root, opts) = project(&[("main.js", text)]);
    Embedder::new(opts.clone()).run().unwrap();

    let bytes = embedded_bytes(&read_output(&opts), "main");
    assert_eq!(bytes, b"var url = \"http:var n = 1;\n\0");
}

#[test]
fn test_rendering_is_deterministic() {
    let files = [("main.js", "var a;"), ("z.js", "z"), ("k.js", "k")];
    let (_r1, o1) = project(&files);
    let (_r2, o2) = project(&files);
    assert_eq!(
        Embedder::new(o1).render().unwrap(),
        Embedder::new(o2).render().unwrap()
    );
}
