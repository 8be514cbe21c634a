//! Hygiene: scans production sources for patterns that panic or swallow
//! errors. Every budget is zero; lowering one is fine, raising one is not.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, budget, what it means)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the frame loop"),
    ("unreachable!(", 0, "crashes the frame loop"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a result unread"),
    (".ok()", 0, "discards an error unread"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Production `.rs` files under `dir`, skipping sibling `_test.rs` modules.
fn production_sources(dir: &Path) -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let is_rs = path.extension().is_some_and(|e| e == "rs");
            let is_test = path.to_string_lossy().ends_with("_test.rs");
            if is_rs && !is_test {
                if let Ok(content) = fs::read_to_string(&path) {
                    out.push((path, content));
                }
            }
        }
    }
    out
}

#[test]
fn sources_are_found() {
    let files = production_sources(Path::new("src"));
    assert!(files.iter().any(|(p, _)| p.ends_with("camera.rs")), "scanned the wrong directory");
}

#[test]
fn pattern_budgets_hold() {
    let files = production_sources(Path::new("src"));
    let mut failures = Vec::new();

    for &(pattern, budget, meaning) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(pattern)).count();
                (count > 0).then(|| format!("    {}: {count}", path.display()))
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|line| line.contains(pattern)).count())
            .sum();
        if total > budget {
            failures.push(format!("`{pattern}` ({meaning}): found {total}, max {budget}\n{}", hits.join("\n")));
        }
    }

    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
