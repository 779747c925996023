//! Duplicate function-name detection and extraction.
//!
//! Scans a directory tree for files with a given suffix, catalogs the
//! function names each file defines, flags names defined in two or more
//! files, and appends one copy of each flagged function to the output
//! file.

mod extract;
mod finder;
mod parser;
mod report;

use std::path::Path;

use crate::errors::ScanError;
use crate::walk::{self, ExcludeFilter};
use finder::CatalogEntry;

pub use finder::Duplicate;

/// Run the full pipeline: list, catalog, find duplicates, extract.
///
/// Returns the duplicate map: one entry per duplicated name, pointing at
/// the first file the name was seen in. Progress lines go to stdout unless
/// `json` is set, in which case the map itself is printed as JSON at the
/// end.
pub fn run(
    folder: &Path,
    suffix: &str,
    output: &Path,
    exclude: &[String],
    json: bool,
) -> Result<Vec<Duplicate>, ScanError> {
    let filter = ExcludeFilter::new(exclude);
    let files = walk::source_files(folder, suffix, &filter)?;
    if !json {
        report::print_file_count(files.len(), suffix);
    }

    let mut catalog: Vec<CatalogEntry> = Vec::with_capacity(files.len());
    for path in files {
        let names = parser::function_names(&path)?;
        catalog.push(CatalogEntry { path, names });
    }

    let duplicates = finder::find_duplicates(&catalog);
    if !json {
        report::print_duplicate_count(duplicates.len());
    }

    extract::extract_into(&duplicates, output)?;

    if json {
        report::print_json(&duplicates)?;
    } else {
        report::print_summary(&duplicates, output);
    }

    Ok(duplicates)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
