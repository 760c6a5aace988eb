//! Boundary lint - keeps the page logic free of UI and browser bindings.
//!
//! `nav`, `projects` and `content` are plain Rust: they are driven by the
//! Dioxus layer in `app/` but must compile and test on any target. This test
//! scans their sources and flags:
//! - imports of dioxus, web_sys, js_sys or wasm_bindgen
//! - `unwrap()` / `expect(` outside `#[cfg(test)]` blocks
//!
//! Browser access goes through the `Viewport` and `DocumentIndex` traits,
//! implemented in `app/dom.rs`.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Source directories that must stay framework-free
const CORE_DIRS: &[&str] = &["nav", "projects", "content"];

const FRAMEWORK_PATTERNS: &[(&str, &str)] = &[
    ("dioxus::", "Move UI wiring into app/nav_context.rs"),
    ("use dioxus", "Move UI wiring into app/nav_context.rs"),
    ("web_sys", "Go through the Viewport / DocumentIndex traits"),
    ("js_sys", "Go through the Viewport / DocumentIndex traits"),
    ("wasm_bindgen", "Go through the Viewport / DocumentIndex traits"),
];

const PANIC_PATTERNS: &[(&str, &str)] = &[
    (".unwrap()", "Return a Result or handle the None case"),
    (".expect(", "Return a Result or handle the None case"),
];

fn core_files() -> Vec<std::path::PathBuf> {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    CORE_DIRS
        .iter()
        .flat_map(|dir| WalkDir::new(src_dir.join(dir)).into_iter())
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Source with the trailing `#[cfg(test)]` module cut off
fn non_test_source(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(pos) => &content[..pos],
        None => content,
    }
}

fn scan(
    path: &Path,
    content: &str,
    patterns: &[(&str, &str)],
) -> Vec<(String, String, String)> {
    let mut violations = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") {
            continue;
        }
        for (pattern, suggestion) in patterns {
            if line.contains(pattern) {
                violations.push((
                    format!("{}:{}", path.display(), line_idx + 1),
                    (*pattern).to_string(),
                    (*suggestion).to_string(),
                ));
            }
        }
    }

    violations
}

fn report(title: &str, violations: &[(String, String, String)]) {
    if violations.is_empty() {
        return;
    }

    let mut error_msg = format!("\n\n{}\n\nViolations found:\n\n", title);
    for (location, pattern, suggestion) in violations {
        error_msg.push_str(&format!("  {} \n", location));
        error_msg.push_str(&format!("    Found: {}\n", pattern));
        error_msg.push_str(&format!("    Fix: {}\n\n", suggestion));
    }
    panic!("{}", error_msg);
}

#[test]
fn core_modules_do_not_import_ui_bindings() {
    let files = core_files();
    assert!(!files.is_empty(), "no core sources found under src/");

    let mut all_violations = Vec::new();
    for path in &files {
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        all_violations.extend(scan(path, &content, FRAMEWORK_PATTERNS));
    }

    report(
        "BOUNDARY VIOLATION: nav/projects/content must not depend on Dioxus or web-sys",
        &all_violations,
    );
}

#[test]
fn core_modules_do_not_panic_outside_tests() {
    let mut all_violations = Vec::new();
    for path in core_files() {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        all_violations.extend(scan(&path, non_test_source(&content), PANIC_PATTERNS));
    }

    report(
        "PANIC IN CORE: unwrap()/expect() outside #[cfg(test)]",
        &all_violations,
    );
}

#[test]
fn browser_bindings_live_in_dom_module() {
    let dom = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("app")
        .join("dom.rs");

    let content = fs::read_to_string(&dom).expect("Failed to read app/dom.rs");

    assert!(
        content.contains("impl Viewport for WindowViewport"),
        "app/dom.rs must provide the browser Viewport"
    );
    assert!(
        content.contains("impl DocumentIndex for DomDocumentIndex"),
        "app/dom.rs must provide the browser DocumentIndex"
    );
}
