/// CLI argument definitions for the `dupfn` command.
///
/// Defines the arguments and help text using the `clap` derive macros.
use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser.
#[derive(Parser)]
#[command(
    name = "dupfn",
    version,
    about = "Find duplicate function names across Python scripts",
    long_about = "\
Scan a directory tree for source files with a given suffix, list the
function names each file defines, and find names defined in two or more
files. One copy of each duplicated function is extracted from the first
file it was seen in and appended to the output file, separated by blank
lines.

Extraction is textual: a function's span runs from its `def <name>` marker
to the next `def ` marker (or end of file). It does not follow indentation
or block structure, so the span can over- or under-include surrounding
text."
)]
pub struct Cli {
    /// Directory to scan
    pub path: PathBuf,

    /// File suffix to include, e.g. ".py"
    #[arg(short, long)]
    pub ext: String,

    /// Destination file for the extracted duplicates
    #[arg(short, long)]
    pub output: PathBuf,

    /// Glob pattern for paths to skip (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Output the duplicate map as JSON
    #[arg(long)]
    pub json: bool,
}
