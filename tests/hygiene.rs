//! Hygiene: source-level standards checked at test time.
//!
//! Every pattern below has a budget of zero in production code (`src/`,
//! excluding `*_test.rs`). The page must never panic in a visitor's browser,
//! and a failed DOM call is reported, not dropped.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the page's wasm instance" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the page's wasm instance" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the page's wasm instance" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the page's wasm instance" },
    Budget { pattern: "todo!(", max: 0, why: "stubs do not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs do not ship" },
    Budget { pattern: "let _ =", max: 0, why: "errors go through dom::report" },
    Budget { pattern: ".ok()", max: 0, why: "errors go through dom::report" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" },
];

/// Modules without a pure core, so without a sibling `_test.rs`.
const UNTESTED_MODULES: &[&str] = &["lib.rs", "dom.rs", "consts.rs", "error.rs"];

struct SourceFile {
    name: String,
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(Path::new("src")) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy().to_string();
        if name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            files.push(SourceFile { name, path: path.to_string_lossy().to_string(), content });
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.name == "lib.rs"), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let where_ = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("{} found {count}, max {} ({})\n{where_}", budget.pattern, budget.max, budget.why));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn core_modules_have_tests() {
    let files = source_files();
    let missing: Vec<_> = files
        .iter()
        .filter(|f| !UNTESTED_MODULES.contains(&f.name.as_str()))
        .filter(|f| {
            let stem = f.name.trim_end_matches(".rs");
            !Path::new("src").join(format!("{stem}_test.rs")).exists()
                || !f.content.contains(&format!("mod {stem}_test;"))
        })
        .map(|f| f.path.clone())
        .collect();
    assert!(missing.is_empty(), "modules without a wired-in _test.rs: {missing:?}");
}

#[test]
fn browser_code_is_feature_gated() {
    let files = source_files();
    let ungated: Vec<_> = files
        .iter()
        .filter(|f| f.name != "dom.rs")
        .filter(|f| f.content.contains("web_sys::") && !f.content.contains("#[cfg(feature = \"hydrate\")]"))
        .map(|f| f.path.clone())
        .collect();
    assert!(ungated.is_empty(), "web_sys used without a hydrate gate: {ungated:?}");
}
