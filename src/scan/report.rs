use std::path::Path;

use crate::errors::ScanError;

use super::finder::Duplicate;

/// Print a horizontal separator of box-drawing chars.
fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Compute the display width for duplicate names, with a minimum of `min`.
fn name_width(duplicates: &[Duplicate], min: usize) -> usize {
    duplicates
        .iter()
        .map(|d| d.name.len())
        .max()
        .unwrap_or(min)
        .max(min)
}

pub fn print_file_count(count: usize, suffix: &str) {
    println!("{count} '{suffix}' files found");
}

pub fn print_duplicate_count(count: usize) {
    println!("{count} duplicate function names identified");
}

/// Print the duplicate map and the output destination.
pub fn print_summary(duplicates: &[Duplicate], output: &Path) {
    if duplicates.is_empty() {
        println!("No duplicate function names found.");
    } else {
        let width = name_width(duplicates, 8);
        let separator = separator(68);
        println!("{separator}");
        println!(" Duplicate Functions");
        println!();
        for dup in duplicates {
            println!(" {:<width$}  {}", dup.name, dup.file.display());
        }
        println!("{separator}");
    }
    println!("Extracted duplicates written to '{}'.", output.display());
}

/// Serialize the duplicate map to pretty JSON on stdout.
pub fn print_json(duplicates: &[Duplicate]) -> Result<(), ScanError> {
    println!("{}", serde_json::to_string_pretty(duplicates)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
