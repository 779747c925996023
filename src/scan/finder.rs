use std::path::PathBuf;

use serde::Serialize;

/// One scanned file and the function names it defines, in source order.
///
/// Names repeated within the file are kept positionally, not deduplicated.
pub struct CatalogEntry {
    pub path: PathBuf,
    pub names: Vec<String>,
}

/// A duplicated function name and the first file found defining it.
///
/// Only one representative file is kept per name; the other definition
/// sites are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub name: String,
    pub file: PathBuf,
}

/// Flag every name that appears in the name-lists of two or more catalog
/// entries.
///
/// For each name, the count is how many *entries* define it: membership,
/// not multiplicity, so a name defined twice inside a single file and
/// nowhere else counts 1 and is not flagged. The representative file is
/// the first entry defining the name, under catalog order then per-file
/// list order. Result order is first-seen order.
pub fn find_duplicates(catalog: &[CatalogEntry]) -> Vec<Duplicate> {
    let mut duplicates: Vec<Duplicate> = Vec::new();

    for entry in catalog {
        for name in &entry.names {
            if duplicates.iter().any(|d| d.name == *name) {
                continue;
            }
            let count = catalog
                .iter()
                .filter(|e| e.names.iter().any(|n| n == name))
                .count();
            if count >= 2 {
                duplicates.push(Duplicate {
                    name: name.clone(),
                    file: entry.path.clone(),
                });
            }
        }
    }

    // Final pass: drop any entry recorded without a representative file.
    duplicates.retain(|d| !d.file.as_os_str().is_empty());
    duplicates
}

#[cfg(test)]
#[path = "finder_test.rs"]
mod tests;
