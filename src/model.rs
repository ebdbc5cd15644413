//! Shared types used across all transforms.
//!
//! The tree types (`Category` → `Subcategory` → `Bookmark`) are the YAML
//! pipeline format exchanged between the transforms and must deserialize
//! exactly what [`crate::tree`] writes. The flat [`Row`] type mirrors one CSV
//! record with the tabular string encoding intact: optional fields are empty
//! strings, `tags` is a single comma-separated string. The blank-vs-absent
//! rules live in [`crate::convert`], not here.

use serde::{Deserialize, Serialize};

/// One bookmark as a flat table record.
///
/// All fields are raw cell text; [`crate::convert`] trims and interprets them.
/// An empty `icon`/`tags`/`description` means the column was blank or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub category: String,
    pub subcategory: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub tags: String,
    pub description: String,
}

/// A top-level bookmark category.
///
/// The YAML key for the name is `category`, matching the pipeline format
/// (`- category: Tools`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub name: String,
    pub subcategories: Vec<Subcategory>,
}

/// A second-level grouping within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    pub bookmarks: Vec<Bookmark>,
}

/// A single bookmark entry.
///
/// `name` and `url` are required; a tree entry missing either fails
/// deserialization outright. The optional fields are omitted from the
/// serialized form when absent — never emitted as empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Aggregate counts over a tree, computed by summing leaf counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub categories: usize,
    pub subcategories: usize,
    pub bookmarks: usize,
}

impl Totals {
    pub fn of(tree: &[Category]) -> Self {
        Self {
            categories: tree.len(),
            subcategories: tree.iter().map(|c| c.subcategories.len()).sum(),
            bookmarks: tree
                .iter()
                .flat_map(|c| &c.subcategories)
                .map(|s| s.bookmarks.len())
                .sum(),
        }
    }
}
