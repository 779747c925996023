use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::errors::ScanError;

/// Glob-based filter for paths the scan should skip.
///
/// Patterns match against the path relative to the scan root, so
/// `vendor/**` excludes a `vendor` tree wherever the root lives. Invalid
/// patterns are reported on stderr and skipped.
#[derive(Default)]
pub struct ExcludeFilter {
    globs: GlobSet,
}

impl ExcludeFilter {
    pub fn new(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => {
                    eprintln!("warning: ignoring glob '{pattern}': {err}");
                }
            }
        }
        let globs = builder.build().unwrap_or_else(|_| GlobSet::empty());
        Self { globs }
    }

    pub fn excludes(&self, path: &Path, root: &Path) -> bool {
        if self.globs.is_empty() {
            return false;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.globs.is_match(relative)
    }
}

/// Collect every file under `root` whose name ends with `suffix`.
///
/// The walk recurses through all subdirectories, visits entries in
/// path-sorted order (deterministic for a given tree), does not follow
/// symlinks, and skips `.git` directories. Ignore files such as
/// `.gitignore` are not honored; the scan must see every candidate file.
/// The suffix match is a case-sensitive byte comparison against the file
/// name.
///
/// A missing or untraversable root surfaces as `ScanError::Filesystem`.
pub fn source_files(
    root: &Path,
    suffix: &str,
    filter: &ExcludeFilter,
) -> Result<Vec<PathBuf>, ScanError> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir()) && entry.file_name() == ".git")
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Filesystem {
            path: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }
        if filter.excludes(path, root) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
