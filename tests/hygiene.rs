//! Hygiene: source-level rules checked at test time.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that would crash the page
//! or silently drop a failure, and checks that browser-only APIs stay behind
//! the `hydrate` feature. Budgets only go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics in the browser" },
    Budget { pattern: ".expect(", max: 0, why: "panics in the browser" },
    Budget { pattern: "panic!(", max: 0, why: "panics in the browser" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics in the browser" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished code" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished code" },
    Budget { pattern: "let _ =", max: 0, why: "discards a result without logging" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error without logging" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("dark_mode.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            let detail: Vec<String> = found.iter().map(|(p, n)| format!("    {p}: {n}")).collect();
            failures.push(format!(
                "{} ({}): found {count}, max {}\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                detail.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn web_sys_stays_behind_hydrate() {
    let files = source_files();
    let offenders: Vec<&str> = files
        .iter()
        .filter(|f| f.content.contains("web_sys::") && !f.content.contains("cfg(feature = \"hydrate\")"))
        .map(|f| f.path.as_str())
        .collect();
    assert!(offenders.is_empty(), "web_sys used without a hydrate gate in: {offenders:?}");
}
