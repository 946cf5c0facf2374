//! Source file discovery from include/exclude patterns.
//!
//! Patterns use a simplified glob syntax: `**` matches any number of
//! directories, `*` and `?` match within one path segment, and a pattern
//! without wildcards names a file or a directory to walk.

use std::path::{Path, PathBuf};

/// Discover source files under `root_dir` matching the include patterns.
///
/// Wildcard matches must end in one of `extensions`; a literal file path is
/// taken as given. Paths touching an `exclude` entry are skipped.
pub fn discover_source_files(
    root_dir: &str,
    include: &[String],
    exclude: &[String],
    extensions: &[String],
) -> Vec<String> {
    let root = PathBuf::from(root_dir);
    let mut result = Vec::new();
    for pattern in include {
        collect_matching_files(&root, pattern, exclude, extensions, &mut result);
    }
    result.sort();
    result.dedup();
    log::debug!("discovered {} source files under {}", result.len(), root.display());
    result
}

fn collect_matching_files(
    root: &Path,
    pattern: &str,
    exclude: &[String],
    extensions: &[String],
    result: &mut Vec<String>,
) {
    let pattern = pattern.trim_start_matches("./");

    if let Some(star_pos) = pattern.find("**") {
        // Recursive glob
        let base = match pattern[..star_pos].trim_end_matches('/') {
            "" => root.to_path_buf(),
            prefix => root.join(prefix),
        };
        // Only the final segment is matched; intermediate directories are any.
        let name_pattern = match pattern[star_pos + 2..].rsplit('/').next() {
            Some("") | None => "*",
            Some(rest) => rest,
        };
        walk_directory(root, &base, name_pattern, exclude, extensions, result);
    } else if pattern.contains('*') || pattern.contains('?') {
        // Single-level glob
        let (dir, name_pattern) = match pattern.rfind('/') {
            Some(slash) => (root.join(&pattern[..slash]), &pattern[slash + 1..]),
            None => (root.to_path_buf(), pattern),
        };
        let Ok(entries) = std::fs::read_dir(&dir) else {
            log::debug!("skipping unreadable directory {}", dir.display());
            return;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_file() && is_source_match(root, &path, name_pattern, exclude, extensions) {
                result.push(path.to_string_lossy().to_string());
            }
        }
    } else {
        // Literal path
        let path = root.join(pattern);
        if is_excluded(root, &path, exclude) {
            return;
        }
        if path.is_file() {
            result.push(path.to_string_lossy().to_string());
        } else if path.is_dir() {
            walk_directory(root, &path, "*", exclude, extensions, result);
        }
    }
}

fn walk_directory(
    root: &Path,
    dir: &Path,
    name_pattern: &str,
    exclude: &[String],
    extensions: &[String],
    result: &mut Vec<String>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("skipping {}: {}", dir.display(), err);
            return;
        }
    };

    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            if path.file_name().map_or(false, |name| name == ".git") || is_excluded(root, &path, exclude) {
                continue;
            }
            walk_directory(root, &path, name_pattern, exclude, extensions, result);
        } else if path.is_file() && is_source_match(root, &path, name_pattern, exclude, extensions) {
            result.push(path.to_string_lossy().to_string());
        }
    }
}

fn is_source_match(
    root: &Path,
    path: &Path,
    name_pattern: &str,
    exclude: &[String],
    extensions: &[String],
) -> bool {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    matches_glob(file_name, name_pattern)
        && extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
        && !is_excluded(root, path, exclude)
}

/// Relative path segments of `path` below `root`.
fn segments(root: &Path, path: &Path) -> Vec<String> {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy().to_string())
        .collect()
}

fn is_excluded(root: &Path, path: &Path, exclude: &[String]) -> bool {
    let segments = segments(root, path);
    exclude.iter().any(|pattern| {
        let pattern = pattern.trim_start_matches("./");
        let anywhere = pattern.starts_with("**/");
        let pattern = pattern
            .trim_start_matches("**/")
            .trim_end_matches("/**")
            .trim_end_matches('/');
        if pattern.is_empty() {
            return false;
        }
        let parts: Vec<&str> = pattern.split('/').collect();
        let matches_at = |offset: usize| {
            segments.len() >= offset + parts.len()
                && parts
                    .iter()
                    .zip(&segments[offset..])
                    .all(|(part, segment)| matches_glob(segment, part))
        };
        if anywhere || parts.len() == 1 {
            (0..segments.len()).any(matches_at)
        } else {
            matches_at(0)
        }
    })
}

/// Match one path segment against a pattern with `*` and `?` wildcards.
fn matches_glob(name: &str, pattern: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let (mut n, mut p) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;
    while n < name.len() {
        match pattern.get(p).copied() {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some(c) if c == '?' || c == name[n] => {
                n += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    p = star + 1;
                    n = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_glob() {
        assert!(matches_glob("index.js", "*"));
        assert!(matches_glob("index.js", "*.js"));
        assert!(matches_glob("index.test.js", "*.test.*"));
        assert!(matches_glob("a.js", "?.js"));
        assert!(!matches_glob("ab.js", "?.js"));
        assert!(!matches_glob("index.ts", "*.js"));
        assert!(matches_glob("node_modules", "node_modules"));
    }

    #[test]
    fn test_is_excluded() {
        let root = Path::new("/project");
        let modules = ["node_modules".to_string()];
        assert!(is_excluded(root, Path::new("/project/node_modules/x/a.js"), &modules));
        assert!(is_excluded(root, Path::new("/project/src/node_modules"), &modules));
        assert!(!is_excluded(root, Path::new("/project/src/a.js"), &modules));

        let anchored = ["src/generated/**".to_string()];
        assert!(is_excluded(root, Path::new("/project/src/generated/a.js"), &anchored));
        assert!(!is_excluded(root, Path::new("/project/lib/src/generated/a.js"), &anchored));

        let anywhere = ["**/src/generated".to_string()];
        assert!(is_excluded(root, Path::new("/project/lib/src/generated/a.js"), &anywhere));

        let minified = ["*.min.js".to_string()];
        assert!(is_excluded(root, Path::new("/project/dist/app.min.js"), &minified));
    }
}
