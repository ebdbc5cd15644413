//! The core schema mapping between flat rows and the three-level tree.
//!
//! Both directions are pure functions over in-memory data — no I/O. The file
//! formats around them live in [`crate::table`] (CSV) and [`crate::tree`]
//! (YAML).
//!
//! ## Grouping order
//!
//! Categories and subcategories appear in the tree in the order their first
//! row appears in the table, and bookmarks keep row order. Rows with the same
//! (category, subcategory) key need not be contiguous; they merge into one
//! node. Grouping uses `Vec` buckets with linear key lookup rather than a
//! hash map, which keeps insertion order an explicit property of the
//! container. Bookmark collections are small enough that the linear scan is
//! irrelevant.
//!
//! ## The tags asymmetry
//!
//! `tags` round-trips asymmetrically, on purpose: a blank tabular tags cell
//! produces a bookmark with no `tags` key at all, while the reverse direction
//! always emits a tags cell (empty string for an absent or empty list). A
//! row→tree→row trip preserves the cell exactly; a tree→row→tree trip turns
//! absent tags into an empty cell and back into absent tags, but an
//! explicitly empty `tags: []` in the source tree comes back as absent. This
//! matches the historical behavior of the format and is asserted by the
//! round-trip tests rather than "fixed", since changing it would silently
//! alter existing pipelines.

use crate::model::{Bookmark, Category, Row, Subcategory};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
}

/// Group flat rows into the category → subcategory → bookmark tree.
///
/// Fails fast on the first row with a blank required field; no partial tree
/// is ever returned. `row` in the error is the 1-based data row number.
pub fn rows_to_tree(rows: &[Row]) -> Result<Vec<Category>, ConvertError> {
    let mut tree: Vec<Category> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;
        let category = required(&row.category, "category", row_number)?;
        let subcategory = required(&row.subcategory, "subcategory", row_number)?;

        let bookmark = Bookmark {
            name: required(&row.name, "name", row_number)?.to_string(),
            url: required(&row.url, "url", row_number)?.to_string(),
            icon: optional(&row.icon),
            tags: parse_tags(&row.tags),
            description: optional(&row.description),
        };

        let cat_idx = match tree.iter().position(|c| c.name == category) {
            Some(idx) => idx,
            None => {
                tree.push(Category {
                    name: category.to_string(),
                    subcategories: Vec::new(),
                });
                tree.len() - 1
            }
        };

        let subs = &mut tree[cat_idx].subcategories;
        let sub_idx = match subs.iter().position(|s| s.name == subcategory) {
            Some(idx) => idx,
            None => {
                subs.push(Subcategory {
                    name: subcategory.to_string(),
                    bookmarks: Vec::new(),
                });
                subs.len() - 1
            }
        };

        subs[sub_idx].bookmarks.push(bookmark);
    }

    Ok(tree)
}

/// Flatten a tree back into rows, depth-first: category → subcategory →
/// bookmark, one row per bookmark.
///
/// Optional fields become empty strings; `tags` is always serialized, joined
/// with `", "` even when the list is absent or empty.
pub fn tree_to_rows(tree: &[Category]) -> Vec<Row> {
    let mut rows = Vec::new();
    for category in tree {
        for subcategory in &category.subcategories {
            for bookmark in &subcategory.bookmarks {
                rows.push(Row {
                    category: category.name.clone(),
                    subcategory: subcategory.name.clone(),
                    name: bookmark.name.clone(),
                    url: bookmark.url.clone(),
                    icon: bookmark.icon.clone().unwrap_or_default(),
                    tags: join_tags(bookmark.tags.as_deref()),
                    description: bookmark.description.clone().unwrap_or_default(),
                });
            }
        }
    }
    rows
}

/// Parse a tabular tags cell: split on commas, trim each element.
///
/// A blank cell yields `None` — the tree form omits the key entirely rather
/// than carrying an empty list.
pub fn parse_tags(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split(',').map(|t| t.trim().to_string()).collect())
}

/// Join a tags list back into the tabular cell encoding.
pub fn join_tags(tags: Option<&[String]>) -> String {
    tags.map(|t| t.join(", ")).unwrap_or_default()
}

fn required<'a>(
    value: &'a str,
    field: &'static str,
    row: usize,
) -> Result<&'a str, ConvertError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::MissingField { row, field });
    }
    Ok(trimmed)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
