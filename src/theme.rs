//! Theme system for the walkthrough
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/resterm/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::highlight::Category;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/resterm/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "dark", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Resterm Dark")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                        if seen_ids.insert(id.to_string()) {
                            let name = extract_theme_name(&path).unwrap_or_else(|| id.to_string());
                            themes.push(ThemeInfo {
                                id: id.to_string(),
                                name,
                                source: ThemeSource::User,
                            });
                        }
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// Extract theme name from YAML file without full parsing
fn extract_theme_name(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("name:") {
            let value = trimmed.strip_prefix("name:")?.trim();
            let value = value.trim_matches('"').trim_matches('\'');
            return Some(value.to_string());
        }
    }
    None
}

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color from RGB values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// ANSI truecolor foreground escape for this color
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// ANSI truecolor background escape for this color
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub syntax: SyntaxThemeData,
    pub ui: UiThemeData,
}

/// Syntax colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct SyntaxThemeData {
    pub foreground: String,
    pub keyword: String,
    pub string: String,
    pub comment: String,
    pub number: String,
}

/// UI chrome colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub heading: String,
    pub muted: String,
    pub border: String,
    pub success: String,
    pub info: String,
    pub warning: String,
    pub danger: String,
}

/// Resolved syntax colors
#[derive(Debug, Clone)]
pub struct SyntaxTheme {
    pub foreground: Color,
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
}

impl SyntaxTheme {
    /// Color for a lexical category
    pub fn color_for(&self, category: Category) -> Color {
        match category {
            Category::Keyword => self.keyword,
            Category::String => self.string,
            Category::Comment => self.comment,
            Category::Number => self.number,
            Category::Text => self.foreground,
        }
    }
}

/// Resolved UI chrome colors
#[derive(Debug, Clone)]
pub struct UiTheme {
    pub heading: Color,
    pub muted: Color,
    pub border: Color,
    /// GET badge / "response received" accents
    pub success: Color,
    /// POST badge
    pub info: Color,
    /// PUT badge
    pub warning: Color,
    /// DELETE badge
    pub danger: Color,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub syntax: SyntaxTheme,
    pub ui: UiTheme,
}

impl Theme {
    /// Parse and resolve a theme from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Theme, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(data)
    }

    /// Load a builtin theme by id
    pub fn from_builtin(id: &str) -> Result<Theme, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    fn from_data(data: ThemeData) -> Result<Theme, String> {
        Ok(Theme {
            name: data.name,
            syntax: SyntaxTheme {
                foreground: Color::from_hex(&data.syntax.foreground)?,
                keyword: Color::from_hex(&data.syntax.keyword)?,
                string: Color::from_hex(&data.syntax.string)?,
                comment: Color::from_hex(&data.syntax.comment)?,
                number: Color::from_hex(&data.syntax.number)?,
            },
            ui: UiTheme {
                heading: Color::from_hex(&data.ui.heading)?,
                muted: Color::from_hex(&data.ui.muted)?,
                border: Color::from_hex(&data.ui.border)?,
                success: Color::from_hex(&data.ui.success)?,
                info: Color::from_hex(&data.ui.info)?,
                warning: Color::from_hex(&data.ui.warning)?,
                danger: Color::from_hex(&data.ui.danger)?,
            },
        })
    }
}

impl Default for Theme {
    /// The embedded dark theme; builtin YAML is validated by tests
    fn default() -> Self {
        Theme::from_builtin("dark").unwrap_or_else(|e| {
            panic!("builtin dark theme must parse: {}", e);
        })
    }
}
