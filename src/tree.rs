//! YAML reading and writing for the hierarchical tree form.
//!
//! Reading goes through serde_yaml, so any standard YAML rendering of the
//! tree is accepted. Writing does not: the emitted layout is hand-formatted
//! to stay diff-friendly and human-editable —
//!
//! ```yaml
//! - category: Dev
//!   subcategories:
//!     - name: Tools
//!       bookmarks:
//!         - name: GitHub
//!           url: https://github.com
//!           tags: [git, code]
//!
//!         - name: Crates
//!           url: https://crates.io
//! ```
//!
//! `tags` is rendered as a bracketed inline list and only when present and
//! non-empty; sibling bookmarks, subcategories, and categories are separated
//! by blank lines. Scalars are written plain except where YAML would
//! misinterpret them (leading indicator characters, `: ` sequences, values
//! that parse as numbers or booleans, embedded quotes or backslashes,
//! newlines), which get double quotes with escaping.

use crate::model::Category;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("input file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("no bookmarks found in {0}")]
    Empty(PathBuf),
}

/// Load a bookmark tree from a YAML file.
pub fn load_tree(path: &Path) -> Result<Vec<Category>, TreeError> {
    if !path.exists() {
        return Err(TreeError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let content = content.trim_start_matches('\u{feff}');
    let tree = serde_yaml::from_str(content)?;
    Ok(tree)
}

/// Write a bookmark tree to `path` in the formatted layout.
pub fn write_tree(path: &Path, tree: &[Category]) -> Result<(), TreeError> {
    fs::write(path, format_tree(tree))?;
    Ok(())
}

/// Render the tree as formatted YAML text.
pub fn format_tree(tree: &[Category]) -> String {
    let mut out = String::new();

    for (ci, category) in tree.iter().enumerate() {
        if ci > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "- category: {}", scalar(&category.name));
        out.push_str("  subcategories:\n");

        for (si, subcategory) in category.subcategories.iter().enumerate() {
            if si > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "    - name: {}", scalar(&subcategory.name));
            out.push_str("      bookmarks:\n");

            for (bi, bookmark) in subcategory.bookmarks.iter().enumerate() {
                if bi > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "        - name: {}", scalar(&bookmark.name));
                let _ = writeln!(out, "          url: {}", scalar(&bookmark.url));
                if let Some(icon) = &bookmark.icon {
                    let _ = writeln!(out, "          icon: {}", scalar(icon));
                }
                if let Some(tags) = &bookmark.tags {
                    if !tags.is_empty() {
                        let joined: Vec<String> = tags.iter().map(|t| scalar(t)).collect();
                        let _ = writeln!(out, "          tags: [{}]", joined.join(", "));
                    }
                }
                if let Some(description) = &bookmark.description {
                    let _ = writeln!(out, "          description: {}", scalar(description));
                }
            }
        }
    }

    out
}

/// Render a string as a YAML scalar, quoting only when a plain scalar would
/// parse back as something else.
fn scalar(value: &str) -> String {
    if needs_quotes(value) {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn needs_quotes(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let first = value.chars().next().unwrap();
    if "-?:,[]{}#&*!|>'\"%@`".contains(first) {
        return true;
    }
    if value.starts_with(' ') || value.ends_with(' ') {
        return true;
    }
    // A colon followed by space (or at end) starts a mapping; " #" a comment.
    if value.contains(": ") || value.ends_with(':') || value.contains(" #") {
        return true;
    }
    // Flow indicators: tags are emitted inside [...], where these terminate
    // the scalar.
    if value.contains(',') || value.contains('[') || value.contains(']') {
        return true;
    }
    // Quotes and backslashes must go through the escaping branch; newlines
    // and other control characters would break the block layout entirely.
    if value.contains('"') || value.contains('\\') {
        return true;
    }
    if value.chars().any(char::is_control) {
        return true;
    }
    if matches!(
        value,
        "true" | "false" | "True" | "False" | "null" | "Null" | "~" | "yes" | "no"
    ) {
        return true;
    }
    // Bare numbers would deserialize as integers/floats, not strings.
    value.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bookmark, Subcategory};
    use tempfile::TempDir;

    fn sample_tree() -> Vec<Category> {
        vec![Category {
            name: "Dev".to_string(),
            subcategories: vec![Subcategory {
                name: "Tools".to_string(),
                bookmarks: vec![
                    Bookmark {
                        name: "GitHub".to_string(),
                        url: "https://github.com".to_string(),
                        icon: Some("https://github.com/favicon.ico".to_string()),
                        tags: Some(vec!["git".to_string(), "code".to_string()]),
                        description: Some("Code hosting".to_string()),
                    },
                    Bookmark {
                        name: "Crates".to_string(),
                        url: "https://crates.io".to_string(),
                        icon: None,
                        tags: None,
                        description: None,
                    },
                ],
            }],
        }]
    }

    #[test]
    fn formats_nested_layout() {
        let text = format_tree(&sample_tree());
        assert!(text.starts_with("- category: Dev\n  subcategories:\n"));
        assert!(text.contains("    - name: Tools\n      bookmarks:\n"));
        assert!(text.contains("        - name: GitHub\n          url: https://github.com\n"));
    }

    #[test]
    fn tags_render_as_inline_list() {
        let text = format_tree(&sample_tree());
        assert!(text.contains("tags: [git, code]"));
    }

    #[test]
    fn absent_optional_keys_are_not_written() {
        let text = format_tree(&sample_tree());
        // The second bookmark has no icon/tags/description: exactly one
        // occurrence of each key in the output.
        assert_eq!(text.matches("icon:").count(), 1);
        assert_eq!(text.matches("tags:").count(), 1);
        assert_eq!(text.matches("description:").count(), 1);
    }

    #[test]
    fn empty_tags_list_is_not_written() {
        let mut tree = sample_tree();
        tree[0].subcategories[0].bookmarks[1].tags = Some(vec![]);
        let text = format_tree(&tree);
        assert_eq!(text.matches("tags:").count(), 1);
    }

    #[test]
    fn blank_line_between_sibling_bookmarks() {
        let text = format_tree(&sample_tree());
        assert!(text.contains("description: Code hosting\n\n        - name: Crates\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn formatted_output_parses_back() {
        let tree = sample_tree();
        let parsed: Vec<Category> = serde_yaml::from_str(&format_tree(&tree)).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn awkward_scalars_are_quoted() {
        assert_eq!(scalar("plain value"), "plain value");
        assert_eq!(scalar("a: b"), "\"a: b\"");
        assert_eq!(scalar("3000"), "\"3000\"");
        assert_eq!(scalar("#hash"), "\"#hash\"");
        assert_eq!(scalar("true"), "\"true\"");
        assert_eq!(scalar("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(scalar("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(scalar("line one\nline two"), "\"line one\\nline two\"");
    }

    #[test]
    fn multiline_and_quoted_values_round_trip() {
        let mut tree = sample_tree();
        let b = &mut tree[0].subcategories[0].bookmarks[0];
        b.name = "say \"hi\"".to_string();
        b.description = Some("line one\nline two".to_string());
        b.tags = Some(vec!["a\nb".to_string(), "plain".to_string()]);

        let text = format_tree(&tree);
        // No raw newline escapes the block layout
        for line in text.lines() {
            assert!(
                line.is_empty() || line.starts_with(' ') || line.starts_with("- category:"),
                "stray line: {line:?}"
            );
        }
        let parsed: Vec<Category> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn quoted_scalars_survive_parsing() {
        let mut tree = sample_tree();
        tree[0].subcategories[0].bookmarks[0].name = "Rust: the book".to_string();
        tree[0].subcategories[0].bookmarks[1].name = "1984".to_string();
        let parsed: Vec<Category> = serde_yaml::from_str(&format_tree(&tree)).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = load_tree(&tmp.path().join("nope.yaml"));
        assert!(matches!(result, Err(TreeError::NotFound(_))));
    }

    #[test]
    fn load_rejects_bookmark_without_url() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.yaml");
        fs::write(
            &path,
            "- category: Dev\n  subcategories:\n    - name: Tools\n      bookmarks:\n        - name: GitHub\n",
        )
        .unwrap();
        assert!(matches!(load_tree(&path), Err(TreeError::Yaml(_))));
    }

    #[test]
    fn write_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bookmarks.yaml");
        let tree = sample_tree();
        write_tree(&path, &tree).unwrap();
        assert_eq!(load_tree(&path).unwrap(), tree);
    }
}
