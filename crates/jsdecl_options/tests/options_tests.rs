//! Configuration loading and file discovery tests against a real directory.

use jsdecl_options::{discover_source_files, parse_config_file, Config, ConfigError, OutputFormat};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper: create `files` (relative paths) with empty content under a new temp dir.
fn project(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "function f() {}\n").unwrap();
    }
    dir
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Helper: discover with default extensions and return paths relative to `dir`.
fn discover(dir: &TempDir, include: &[&str], exclude: &[&str]) -> Vec<String> {
    let root = dir.path().to_string_lossy().to_string();
    let config = Config::default();
    discover_source_files(&root, &strings(include), &strings(exclude), &config.extensions)
        .into_iter()
        .map(|path| {
            Path::new(&path)
                .strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_default_patterns() {
    let dir = project(&[
        "index.js",
        "src/a.mjs",
        "src/deep/b.cjs",
        "src/view.jsx",
        "src/types.ts",
        "node_modules/pkg/index.js",
        "README.md",
    ]);
    assert_eq!(
        discover(&dir, &["**/*"], &["node_modules"]),
        vec!["index.js", "src/a.mjs", "src/deep/b.cjs", "src/view.jsx"]
    );
}

#[test]
fn test_recursive_pattern_with_prefix() {
    let dir = project(&["index.js", "src/a.js", "src/deep/b.js", "lib/c.js"]);
    assert_eq!(discover(&dir, &["src/**/*.js"], &[]), vec!["src/a.js", "src/deep/b.js"]);
}

#[test]
fn test_single_level_pattern() {
    let dir = project(&["a.js", "b.test.js", "src/c.js"]);
    assert_eq!(discover(&dir, &["*.js"], &[]), vec!["a.js", "b.test.js"]);
    assert_eq!(discover(&dir, &["src/*.js"], &[]), vec!["src/c.js"]);
}

#[test]
fn test_literal_paths() {
    let dir = project(&["scripts/build.txt", "lib/x.js", "lib/y.js"]);
    assert_eq!(discover(&dir, &["scripts/build.txt"], &[]), vec!["scripts/build.txt"]);
    assert_eq!(discover(&dir, &["lib"], &[]), vec!["lib/x.js", "lib/y.js"]);
    assert!(discover(&dir, &["missing.js"], &[]).is_empty());
}

#[test]
fn test_overlapping_patterns_are_deduplicated() {
    let dir = project(&["src/a.js", "src/b.js"]);
    assert_eq!(
        discover(&dir, &["src/**/*", "src/a.js", "src/*.js"], &[]),
        vec!["src/a.js", "src/b.js"]
    );
}

#[test]
fn test_exclude_patterns() {
    let dir = project(&["src/a.js", "src/a.min.js", "dist/out.js", "src/generated/g.js"]);
    assert_eq!(
        discover(&dir, &["**/*"], &["dist", "*.min.js", "src/generated/**"]),
        vec!["src/a.js"]
    );
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn test_parse_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jsdecl.json");
    fs::write(&path, r#"{ "exclude": ["vendor"], "format": "json" }"#).unwrap();
    let config = parse_config_file(&path).unwrap();
    assert_eq!(config.exclude, vec!["vendor"]);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.include, vec!["**/*"]);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_config_file(dir.path().join("jsdecl.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jsdecl.json");
    fs::write(&path, "{ include: }").unwrap();
    let err = parse_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid configuration in"));
}
