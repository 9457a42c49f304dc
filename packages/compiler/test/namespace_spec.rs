//! Namespace Extraction Tests

use schegen_compiler::{Namespace, SchemaError};

fn not_found(name: &str) -> SchemaError {
    SchemaError::NamespaceNotFound {
        name: name.to_string(),
    }
}

#[test]
fn should_extract_namespace_block() {
    let source = "using System;\n\nnamespace FlatData\n{\n    public enum Color\n    {\n        Red = 0,\n    }\n}\n";
    let namespace = Namespace::extract(source, "FlatData").unwrap();

    assert_eq!(namespace.name, "FlatData");
    assert_eq!(
        namespace.code,
        "namespace FlatData\n{\n    public enum Color\n    {\n        Red = 0,\n    }\n}"
    );
}

#[test]
fn should_dedent_indented_namespace() {
    let source = "  namespace FlatData {\n    enum A { X }\n  }\n";
    let namespace = Namespace::extract(source, "FlatData").unwrap();
    assert_eq!(namespace.code, "namespace FlatData {\n  enum A { X }\n}");
}

#[test]
fn should_start_with_name_and_end_with_closing_brace() {
    let source = "namespace FlatData {\n      enum A { X }\n   }";
    let namespace = Namespace::extract(source, "FlatData").unwrap();

    let first = namespace.code.lines().next().unwrap();
    let last = namespace.code.lines().last().unwrap();
    assert!(first.contains("FlatData"));
    assert_eq!(last, "}");
}

#[test]
fn should_pick_the_requested_namespace() {
    let source = "namespace Other {\n  enum B { Y }\n}\nnamespace FlatData {\n  enum A { X }\n}";
    let namespace = Namespace::extract(source, "FlatData").unwrap();
    assert_eq!(namespace.name, "FlatData");
    assert_eq!(namespace.code, "namespace FlatData {\n  enum A { X }\n}");
}

#[test]
fn should_not_match_name_prefix() {
    let source = "namespace FlatDataExtra {\n}";
    assert_eq!(Namespace::extract(source, "FlatData"), Err(not_found("FlatData")));
}

#[test]
fn should_fail_when_namespace_missing() {
    assert_eq!(Namespace::extract("", "FlatData"), Err(not_found("FlatData")));
    assert_eq!(
        Namespace::extract("public enum A { X }", "FlatData"),
        Err(not_found("FlatData"))
    );
}

#[test]
fn should_fail_for_file_scoped_namespace() {
    let source = "namespace FlatData;\npublic enum A { X }";
    assert_eq!(Namespace::extract(source, "FlatData"), Err(not_found("FlatData")));
}

#[test]
fn should_fail_for_unbalanced_namespace() {
    let source = "namespace FlatData {\n  enum A {\n";
    assert_eq!(Namespace::extract(source, "FlatData"), Err(not_found("FlatData")));
}

#[test]
fn should_ignore_braces_in_comments() {
    let source = "namespace FlatData {\n  // }\n  enum A\n  {\n    X\n  }\n}";
    let namespace = Namespace::extract(source, "FlatData").unwrap();
    assert_eq!(namespace.typedefs().unwrap().len(), 1);
}

#[test]
fn should_skip_namespace_header_inside_comment() {
    let source = "/*\nnamespace FlatData was renamed\n*/\nnamespace FlatData\n{\n    enum E\n    {\n        A,\n    }\n}";
    let namespace = Namespace::extract(source, "FlatData").unwrap();
    assert_eq!(namespace.name, "FlatData");
    assert!(namespace.code.starts_with("namespace FlatData\n{"));
    assert_eq!(namespace.typedefs().unwrap().len(), 1);
}
