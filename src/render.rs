//! Static navigation page generation.
//!
//! Projects a bookmark tree into one self-contained HTML document: aggregate
//! counts in the header, category and subcategory tab strips, and a card per
//! bookmark. All interactivity (search, category filtering, the light/dark
//! toggle) is client-side, driven by the embedded script in `static/app.js`
//! against data attributes rendered here:
//!
//! - sections carry `data-category`, subcategory blocks `data-subcategory`,
//!   and tab buttons the matching attributes (`all` is the reserved
//!   show-everything value);
//! - every card carries lowercased `data-name`, `data-tags` (space-joined),
//!   and `data-description` for substring search.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! checked templates with automatic escaping, so bookmark names containing
//! markup end up inert. CSS and JS are embedded at compile time from
//! `static/`; theme colors are injected from config as CSS custom properties.
//! The page has no network dependency beyond the bookmark icon URLs.

use crate::config::{self, SiteConfig};
use crate::model::{Bookmark, Category, Subcategory, Totals};
use crate::tree::{self, TreeError};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/app.js");

/// Render the tree at `input` into a navigation page at `output`.
///
/// Returns the aggregate counts for the caller's summary line. The output
/// file is only opened once the full document string exists.
pub fn render(input: &Path, output: &Path, config_path: &Path) -> Result<Totals, RenderError> {
    let tree = tree::load_tree(input)?;
    let config = config::load_config(config_path)?;
    let page = render_page(&tree, &config).into_string();
    fs::write(output, page)?;
    Ok(Totals::of(&tree))
}

/// Render the full document.
pub fn render_page(tree: &[Category], config: &SiteConfig) -> Markup {
    let totals = Totals::of(tree);
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    html! {
        (DOCTYPE)
        html lang=(config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                style { (PreEscaped(css)) }
            }
            body {
                (page_header(&config.title, totals))
                (search_bar())
                (category_nav(tree))
                main.main-content {
                    div.container id="bookmarksContainer" {
                        @for category in tree {
                            (category_section(category))
                        }
                    }
                    div.no-results id="noResults" style="display: none;" {
                        div.no-results-icon { "🔍" }
                        div.no-results-text { "No bookmarks match your search" }
                    }
                }
                footer.footer {
                    div.container {
                        p { (config.title) " · " (totals.bookmarks) " bookmarks" }
                    }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Header with the title and aggregate stat counters.
fn page_header(title: &str, totals: Totals) -> Markup {
    html! {
        header.header {
            div.container {
                div.header-content {
                    h1 { (title) }
                    div.header-stats {
                        (stat_item(totals.bookmarks, "bookmarks"))
                        (stat_item(totals.categories, "categories"))
                        (stat_item(totals.subcategories, "subcategories"))
                        button.theme-toggle id="themeToggle" title="Toggle theme" {
                            span.theme-icon { "🌙" }
                        }
                    }
                }
            }
        }
    }
}

fn stat_item(value: usize, label: &str) -> Markup {
    html! {
        div.stat-item {
            div.stat-value { (value) }
            div.stat-label { (label) }
        }
    }
}

fn search_bar() -> Markup {
    html! {
        div.search-bar {
            div.container {
                input.search-input type="text" id="searchInput"
                    placeholder="Search bookmarks by name, tag, or description…";
            }
        }
    }
}

/// Category tab strip plus one hidden subcategory strip per category.
fn category_nav(tree: &[Category]) -> Markup {
    html! {
        nav.category-nav {
            div.container {
                div.category-tabs id="categoryTabs" {
                    button.category-tab.active data-category="all" { "All" }
                    @for category in tree {
                        button.category-tab data-category=(category.name) { (category.name) }
                    }
                }
                @for category in tree {
                    div.subcategory-tabs data-parent=(category.name) {
                        button.subcategory-tab.active data-subcategory="all"
                            data-parent=(category.name) { "All" }
                        @for subcategory in &category.subcategories {
                            button.subcategory-tab data-subcategory=(subcategory.name)
                                data-parent=(category.name) { (subcategory.name) }
                        }
                    }
                }
            }
        }
    }
}

fn category_section(category: &Category) -> Markup {
    html! {
        section.category data-category=(category.name) {
            h2.category-title { (category.name) }
            @for subcategory in &category.subcategories {
                (subcategory_block(subcategory))
            }
        }
    }
}

fn subcategory_block(subcategory: &Subcategory) -> Markup {
    html! {
        div.subcategory data-subcategory=(subcategory.name) {
            h3.subcategory-title { (subcategory.name) }
            div.bookmarks-grid {
                @for bookmark in &subcategory.bookmarks {
                    (bookmark_card(bookmark))
                }
            }
        }
    }
}

/// One bookmark card. The fallback badge renders for icon-less bookmarks and
/// sits hidden behind the icon otherwise, revealed by the `onerror` handler
/// when the icon fails to load.
fn bookmark_card(bookmark: &Bookmark) -> Markup {
    let initial = fallback_initial(&bookmark.name);
    let tags = bookmark.tags.as_deref().unwrap_or_default();
    let tags_attr = tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let description = bookmark.description.as_deref().unwrap_or_default();

    html! {
        a.bookmark-card href=(bookmark.url) target="_blank" rel="noopener noreferrer"
            data-name=(bookmark.name.to_lowercase())
            data-tags=(tags_attr)
            data-description=(description.to_lowercase()) {
            div.bookmark-header {
                @if let Some(icon) = &bookmark.icon {
                    img.bookmark-icon src=(icon) alt=(bookmark.name) loading="lazy"
                        onerror="this.style.display='none'; this.nextElementSibling.style.display='flex';";
                    div.bookmark-icon-fallback style="display:none;" { (initial) }
                } @else {
                    div.bookmark-icon-fallback { (initial) }
                }
                h4.bookmark-name { (bookmark.name) }
            }
            @if let Some(description) = &bookmark.description {
                p.bookmark-description { (description) }
            }
            @if !tags.is_empty() {
                div.bookmark-tags {
                    @for tag in tags {
                        span.tag { (tag) }
                    }
                }
            }
        }
    }
}

/// Single-letter badge shown when a bookmark has no usable icon: first
/// character of the name, uppercased.
fn fallback_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
