//! CLI output formatting for all transforms.
//!
//! Output is information-centric: each success prints the converted content
//! as an indented category tree — positional index plus name plus counts —
//! followed by a totals line, so the summary doubles as a quick content
//! inventory.
//!
//! ```text
//! Categories
//! 001 Dev (2 subcategories, 12 bookmarks)
//!     001 Tools (5 bookmarks)
//!     002 Docs (7 bookmarks)
//! 002 News (1 subcategory, 3 bookmarks)
//!     001 Tech (3 bookmarks)
//!
//! 2 categories, 3 subcategories, 15 bookmarks
//! ```
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::model::{Category, Totals};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Pluralize a count noun: `1 category`, `2 categories`.
fn counted(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format a one-line totals summary.
pub fn format_totals(totals: Totals) -> String {
    format!(
        "{}, {}, {}",
        counted(totals.categories, "category", "categories"),
        counted(totals.subcategories, "subcategory", "subcategories"),
        counted(totals.bookmarks, "bookmark", "bookmarks"),
    )
}

/// Format the category tree summary shown after a successful transform.
pub fn format_tree_summary(tree: &[Category]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Categories".to_string());

    for (ci, category) in tree.iter().enumerate() {
        let bookmark_count: usize = category.subcategories.iter().map(|s| s.bookmarks.len()).sum();
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(ci + 1),
            category.name,
            counted(category.subcategories.len(), "subcategory", "subcategories"),
            counted(bookmark_count, "bookmark", "bookmarks"),
        ));
        for (si, subcategory) in category.subcategories.iter().enumerate() {
            lines.push(format!(
                "    {} {} ({})",
                format_index(si + 1),
                subcategory.name,
                counted(subcategory.bookmarks.len(), "bookmark", "bookmarks"),
            ));
        }
    }

    lines.push(String::new());
    lines.push(format_totals(Totals::of(tree)));
    lines
}

/// Print the tree summary to stdout.
pub fn print_tree_summary(tree: &[Category]) {
    for line in format_tree_summary(tree) {
        println!("{}", line);
    }
}
