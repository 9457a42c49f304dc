//! Scope Scanner Tests

use schegen_compiler::scope::{
    blank_trivia, dedent, find_block_open, find_matching_brace, normalize_block,
};

#[test]
fn should_skip_nested_braces() {
    let text = "a { b { c } d } e";
    assert_eq!(find_matching_brace(text, 2), Some(14));
}

#[test]
fn should_ignore_braces_in_strings_and_chars() {
    let text = r#"{ var s = "}"; var c = '}'; }"#;
    assert_eq!(find_matching_brace(text, 0), Some(text.len() - 1));
}

#[test]
fn should_ignore_braces_in_comments() {
    let text = "{ // }\n /* } */ }";
    assert_eq!(find_matching_brace(text, 0), Some(text.len() - 1));
}

#[test]
fn should_treat_backslash_literally_in_verbatim_strings() {
    let text = r#"{ var p = @"C:\"; }"#;
    assert_eq!(find_matching_brace(text, 0), Some(text.len() - 1));
}

#[test]
fn should_report_unbalanced_regions() {
    assert_eq!(find_matching_brace("{ {", 0), None);
    assert_eq!(find_matching_brace("abc", 0), None);
}

#[test]
fn should_find_first_code_brace() {
    let text = "enum A // {\n{ X }";
    assert_eq!(find_block_open(text, 0), Some(12));
    assert_eq!(find_block_open("enum A;", 0), None);
}

#[test]
fn should_remove_common_indentation() {
    assert_eq!(dedent("    a\n      b\n\n    c"), "a\n  b\n\nc");
    assert_eq!(dedent("  a\n   \n  b"), "a\n\nb");
}

#[test]
fn should_trim_surrounding_blank_lines() {
    assert_eq!(normalize_block("\n\n    x {\n    }\n  \n"), "x {\n}");
}

#[test]
fn should_blank_comments_but_keep_offsets() {
    let text = "a /* x\ny */ b // c\nd";
    let blanked = blank_trivia(text);
    assert_eq!(blanked, "a     \n     b     \nd");
    assert_eq!(blanked.len(), text.len());
}

#[test]
fn should_blank_literals_with_multibyte_chars() {
    let text = "x = \"é{\"; }";
    let blanked = blank_trivia(text);
    assert_eq!(blanked.len(), text.len());
    assert_eq!(blanked.find('{'), None);
    assert_eq!(blanked.find('}'), text.find('}'));
}
