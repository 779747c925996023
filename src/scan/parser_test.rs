use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;

fn names(source: &str) -> Vec<String> {
    names_in_source(Path::new("test.py"), source).unwrap()
}

#[test]
fn collects_top_level_functions_in_order() {
    let source = "def alpha():\n    pass\n\ndef beta():\n    pass\n\ndef gamma():\n    pass\n";
    assert_eq!(names(source), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn collects_nested_functions_pre_order() {
    let source = "\
def outer():
    def inner():
        return 1
    return inner
";
    assert_eq!(names(source), vec!["outer", "inner"]);
}

#[test]
fn collects_methods_but_not_class_names() {
    let source = "\
class Widget:
    def render(self):
        pass

    def resize(self, w, h):
        pass
";
    assert_eq!(names(source), vec!["render", "resize"]);
}

#[test]
fn collects_async_functions() {
    let source = "async def fetch():\n    return 1\n";
    assert_eq!(names(source), vec!["fetch"]);
}

#[test]
fn ignores_lambdas_and_assignments() {
    let source = "x = lambda y: y\nfoo = 3\nbar = [1, 2]\n";
    assert!(names(source).is_empty());
}

#[test]
fn keeps_repeated_names_positionally() {
    let source = "def f():\n    pass\n\ndef g():\n    pass\n\ndef f():\n    pass\n";
    assert_eq!(names(source), vec!["f", "g", "f"]);
}

#[test]
fn empty_source_has_no_names() {
    assert!(names("").is_empty());
}

#[test]
fn syntax_error_is_fatal() {
    let err = names_in_source(Path::new("bad.py"), "def (:\n").unwrap_err();
    match err {
        ScanError::Parse { path, line, .. } => {
            assert_eq!(path, Path::new("bad.py"));
            assert!(line >= 1);
        }
        other => panic!("expected Parse error, got {other}"),
    }
}

#[test]
fn reads_names_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mod.py");
    fs::write(&path, "def loader():\n    return 1\n").unwrap();

    assert_eq!(function_names(&path).unwrap(), vec!["loader"]);
}

#[test]
fn unreadable_file_is_a_file_access_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.py");

    let err = function_names(&missing).unwrap_err();
    assert!(matches!(err, ScanError::FileAccess { .. }));
}
