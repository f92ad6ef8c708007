//! Write documents back out as tab-indented text.
//!
//! [`emit_document`] serializes a parsed tree: one tab per level, lists
//! joined with commas and empty objects written as a bare name. Parsing the
//! output again gives back an equal tree, but the coerced values are printed,
//! not the text they came from.
//!
//! [`format_lines`] works on the source lines instead and keeps every value
//! exactly as written.

use super::indent::split_line;
use super::tree::{Node, Object};

/// Tidy document text without touching its values.
///
/// Blank lines are dropped and the whitespace between words collapses to a
/// single space. Depths, names and value text are kept, so `1,000` stays
/// `1,000` and a line that later gains children keeps its value.
pub fn format_lines(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.lines().filter_map(split_line) {
        for _ in 0..line.depth {
            out.push('\t');
        }
        out.push_str(&line.name);
        if !line.value.is_empty() {
            out.push(' ');
            out.push_str(&line.value);
        }
        out.push('\n');
    }
    out
}

/// Emit a tree as document text, ending with a newline when non-empty.
pub fn emit_document(tree: &Object) -> String {
    let mut out = String::new();
    emit_object(tree, 0, &mut out);
    out
}

fn emit_object(obj: &Object, depth: usize, out: &mut String) {
    for (key, node) in obj.iter() {
        for _ in 0..depth {
            out.push('\t');
        }
        out.push_str(key);
        match node {
            Node::Scalar(value) => {
                out.push(' ');
                out.push_str(&value.to_string());
                out.push('\n');
            }
            Node::Object(child) => {
                out.push('\n');
                emit_object(child, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tabbed_content;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_lines_keeps_value_text() {
        let source = "size 1,000\nv   007\n\nh 1e3\na regular\n\tb 1\n";
        assert_eq!(
            format_lines(source),
            "size 1,000\nv 007\nh 1e3\na regular\n\tb 1\n"
        );
    }

    #[test]
    fn test_format_lines_parses_the_same() {
        let source = "tokens\n\n\tcolor\n\t\tprimary   light  blue  \n\tsize 1,2";
        assert_eq!(
            parse_tabbed_content(&format_lines(source)),
            parse_tabbed_content(source)
        );
    }

    #[test]
    fn test_emit_nested() {
        let source = "tokens\n\tcolor\n\t\tprimary blue\n\tsize\n\t\tsm 3\nflags 1,2,3\nempty\n";
        let tree = parse_tabbed_content(source);
        assert_eq!(emit_document(&tree), source);
    }

    #[test]
    fn test_emit_normalizes_spacing() {
        let tree = parse_tabbed_content("\n\ncolor   light   blue  \n\n");
        assert_eq!(emit_document(&tree), "color light blue\n");
    }

    #[test]
    fn test_emit_then_parse_is_stable() {
        let source = "a\n\tb  true\n\tc -2.5\n\n\td x,y\ne \"quoted, text\"";
        let tree = parse_tabbed_content(source);
        let reparsed = parse_tabbed_content(&emit_document(&tree));
        assert_eq!(reparsed, tree);
    }

    #[test]
    fn test_emit_empty() {
        assert_eq!(emit_document(&Object::new()), "");
    }
}
