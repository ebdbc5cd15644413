//! Bookmark collection converter and navigation site generator.
//!
//! Bookmarks move between three representations. A flat CSV table (one row
//! per bookmark) and a nested YAML tree (categories holding subcategories
//! holding bookmarks) are interchangeable editing formats; a single static
//! HTML page with client-side search is the rendering target.
//!
//! Module map:
//!
//! | Module    | Responsibility                                        |
//! |-----------|-------------------------------------------------------|
//! | `model`   | The shared data types: `Row`, `Category`, `Bookmark`  |
//! | `table`   | CSV reading and writing, header alias resolution      |
//! | `tree`    | YAML loading and hand-formatted YAML writing          |
//! | `convert` | Grouping rows into a tree and flattening back         |
//! | `render`  | Building the static HTML page with maud               |
//! | `config`  | Site title and color scheme from config.toml          |
//! | `output`  | Console summary formatting                            |
//!
//! Every transform is a pure batch job: read one file, build the result
//! fully in memory, then write one file. Nothing is written on error.

pub mod config;
pub mod convert;
pub mod model;
pub mod output;
pub mod render;
pub mod table;
pub mod tree;
