//! Site configuration for the rendered navigation page.
//!
//! An optional `config.toml` next to the input controls the page title,
//! language, and the light/dark color schemes. All keys are optional — a
//! missing file or a sparse one falls back to the stock defaults. Unknown
//! keys are rejected.
//!
//! ```toml
//! title = "My Bookmarks"
//!
//! [colors.light]
//! accent = "#d04040"
//! ```
//!
//! Colors become CSS custom properties in the generated page via
//! [`generate_color_css`]; the dark scheme is emitted under a
//! `[data-theme="dark"]` selector, which the page's theme toggle switches.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Page configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title, shown in the header and the browser tab.
    pub title: String,
    /// BCP 47 language tag for the `<html lang>` attribute.
    pub lang: String,
    /// Color schemes for the light and dark themes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Bookmarks".to_string(),
            lang: "en".to_string(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        self.colors.light.validate("colors.light")?;
        self.colors.dark.validate("colors.dark")?;
        Ok(())
    }
}

/// Color configuration for light and dark themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Header, search bar, and footer background.
    pub surface: String,
    /// Bookmark card background.
    pub card: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (descriptions, subcategory titles).
    pub text_secondary: String,
    /// Muted text (stat labels, footer).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Accent color (active tabs, stat values, fallback badges).
    pub accent: String,
    /// Accent hover color.
    pub accent_hover: String,
    /// Tag chip background.
    pub tag_bg: String,
    /// Tag chip text color.
    pub tag_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f5f7fa".to_string(),
            surface: "#ffffff".to_string(),
            card: "#ffffff".to_string(),
            text: "#2c3e50".to_string(),
            text_secondary: "#606266".to_string(),
            text_muted: "#909399".to_string(),
            border: "#e4e7ed".to_string(),
            accent: "#409eff".to_string(),
            accent_hover: "#66b1ff".to_string(),
            tag_bg: "#ecf5ff".to_string(),
            tag_text: "#409eff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1a1a1a".to_string(),
            surface: "#2d2d2d".to_string(),
            card: "#2d2d2d".to_string(),
            text: "#e8e8e8".to_string(),
            text_secondary: "#b8b8b8".to_string(),
            text_muted: "#888888".to_string(),
            border: "#404040".to_string(),
            accent: "#409eff".to_string(),
            accent_hover: "#66b1ff".to_string(),
            tag_bg: "#1e3a5f".to_string(),
            tag_text: "#66b1ff".to_string(),
        }
    }

    fn validate(&self, scheme: &str) -> Result<(), ConfigError> {
        let fields = [
            ("background", &self.background),
            ("surface", &self.surface),
            ("card", &self.card),
            ("text", &self.text),
            ("text_secondary", &self.text_secondary),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("accent", &self.accent),
            ("accent_hover", &self.accent_hover),
            ("tag_bg", &self.tag_bg),
            ("tag_text", &self.tag_text),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{scheme}.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Load config from `path`, falling back to stock defaults when no file
/// exists there.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# navmark configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Page title, shown in the header and the browser tab.
title = "My Bookmarks"

# Language tag for the <html lang> attribute (e.g. "en", "zh-CN").
lang = "en"

# ---------------------------------------------------------------------------
# Theme colors
# ---------------------------------------------------------------------------
# Each scheme only needs the keys it wants to override.

[colors.light]
background = "#f5f7fa"     # page background
surface = "#ffffff"        # header, search bar, footer
card = "#ffffff"           # bookmark cards
text = "#2c3e50"
text_secondary = "#606266" # descriptions, subcategory titles
text_muted = "#909399"     # stat labels, footer
border = "#e4e7ed"
accent = "#409eff"         # active tabs, stat values, fallback badges
accent_hover = "#66b1ff"
tag_bg = "#ecf5ff"
tag_text = "#409eff"

[colors.dark]
background = "#1a1a1a"
surface = "#2d2d2d"
card = "#2d2d2d"
text = "#e8e8e8"
text_secondary = "#b8b8b8"
text_muted = "#888888"
border = "#404040"
accent = "#409eff"
accent_hover = "#66b1ff"
tag_bg = "#1e3a5f"
tag_text = "#66b1ff"
"##
}

/// Generate CSS custom properties from color config.
///
/// The light scheme populates `:root`; the dark scheme is scoped to the
/// `data-theme="dark"` attribute the page's toggle sets on `<html>`.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{}}}\n\n[data-theme=\"dark\"] {{\n{}}}",
        scheme_vars(&colors.light),
        scheme_vars(&colors.dark),
    )
}

fn scheme_vars(scheme: &ColorScheme) -> String {
    let vars = [
        ("--bg-primary", &scheme.background),
        ("--bg-secondary", &scheme.surface),
        ("--bg-card", &scheme.card),
        ("--text-primary", &scheme.text),
        ("--text-secondary", &scheme.text_secondary),
        ("--text-muted", &scheme.text_muted),
        ("--border-color", &scheme.border),
        ("--accent-color", &scheme.accent),
        ("--accent-hover", &scheme.accent_hover),
        ("--tag-bg", &scheme.tag_bg),
        ("--tag-text", &scheme.tag_text),
    ];
    vars.iter()
        .map(|(name, value)| format!("    {name}: {value};\n"))
        .collect()
}
