use std::fs;
use std::path::Path;

use tree_sitter::{Node, Parser};

use crate::errors::ScanError;

/// List every function name defined in the Python file at `path`.
///
/// The whole parse tree is walked in source pre-order, so nested
/// functions and methods are included at every depth. A name defined
/// several times in the same file appears once per definition.
pub fn function_names(path: &Path) -> Result<Vec<String>, ScanError> {
    let source = fs::read_to_string(path).map_err(|source| ScanError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    names_in_source(path, &source)
}

/// Parse `source` and collect function names, reporting syntax errors
/// against `path`.
pub fn names_in_source(path: &Path, source: &str) -> Result<Vec<String>, ScanError> {
    let mut parser = Parser::new();
    let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
    // The grammar and runtime crates are version-pinned together in
    // Cargo.toml, so loading the language cannot fail at runtime.
    parser
        .set_language(&language)
        .expect("tree-sitter-python grammar is incompatible with the tree-sitter runtime");

    let Some(tree) = parser.parse(source, None) else {
        return Err(parse_error(path, None));
    };

    let root = tree.root_node();
    if root.has_error() {
        return Err(parse_error(path, first_error(root)));
    }

    let mut names = Vec::new();
    collect_names(root, source, &mut names);
    Ok(names)
}

fn collect_names(node: Node, source: &str, names: &mut Vec<String>) {
    if node.kind() == "function_definition"
        && let Some(name) = node.child_by_field_name("name")
    {
        names.push(source[name.byte_range()].to_string());
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_names(child, source, names);
    }
}

/// Find the first error or missing node, pre-order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

fn parse_error(path: &Path, node: Option<Node>) -> ScanError {
    let position = node
        .map(|n| n.start_position())
        .unwrap_or(tree_sitter::Point { row: 0, column: 0 });
    ScanError::Parse {
        path: path.to_path_buf(),
        line: position.row + 1,
        column: position.column + 1,
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
