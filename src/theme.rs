use std::fs;
use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use ratatui::style::Color;
use serde::Deserialize;

const LOCAL_THEME_DIR: &str = "themes";
static EMBEDDED_THEMES: Dir = include_dir!("$CARGO_MANIFEST_DIR/themes");

#[derive(Debug, Clone)]
pub(crate) struct Theme {
    pub(crate) name: String,
    pub(crate) theme_type: String,
    pub(crate) bg: Color,
    pub(crate) bg_alt: Color,
    pub(crate) fg: Color,
    pub(crate) fg_muted: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) selection: Color,
    pub(crate) status_bg: Color,
    pub(crate) warning: Color,
    pub(crate) info: Color,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThemeFile {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) theme_type: String,
    pub(crate) colors: ThemeColors,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThemeColors {
    pub(crate) background: String,
    #[serde(rename = "backgroundAlt")]
    pub(crate) background_alt: String,
    pub(crate) foreground: String,
    #[serde(rename = "foregroundMuted")]
    pub(crate) foreground_muted: String,
    pub(crate) border: String,
    pub(crate) accent: String,
    pub(crate) selection: String,
    #[serde(default, rename = "statusBar")]
    pub(crate) status_bar: Option<String>,
    #[serde(default)]
    pub(crate) warning: Option<String>,
    #[serde(default)]
    pub(crate) info: Option<String>,
}

/// Parses `#rrggbb`. Anything else, including non-ASCII input, yields `fallback`.
pub(crate) fn color_from_hex(input: &str, fallback: Color) -> Color {
    let Some(digits) = input.trim().strip_prefix('#') else {
        return fallback;
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return fallback;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        Err(_) => fallback,
    }
}

fn optional_color(value: Option<&String>, fallback: Color) -> Color {
    value.map_or(fallback, |c| color_from_hex(c, fallback))
}

pub(crate) fn theme_from_file(tf: ThemeFile) -> Theme {
    let accent = color_from_hex(&tf.colors.accent, Color::Rgb(0, 122, 204));
    Theme {
        name: tf.name,
        theme_type: tf.theme_type,
        bg: color_from_hex(&tf.colors.background, Color::Rgb(30, 30, 30)),
        bg_alt: color_from_hex(&tf.colors.background_alt, Color::Rgb(37, 37, 38)),
        fg: color_from_hex(&tf.colors.foreground, Color::Rgb(212, 212, 212)),
        fg_muted: color_from_hex(&tf.colors.foreground_muted, Color::Rgb(133, 133, 133)),
        border: color_from_hex(&tf.colors.border, Color::Rgb(60, 60, 60)),
        accent,
        selection: color_from_hex(&tf.colors.selection, Color::Rgb(38, 79, 120)),
        status_bg: optional_color(tf.colors.status_bar.as_ref(), accent),
        warning: optional_color(tf.colors.warning.as_ref(), Color::Rgb(204, 167, 0)),
        info: optional_color(tf.colors.info.as_ref(), Color::Rgb(55, 148, 255)),
    }
}

fn parse_theme(raw: &str, source: &str) -> Option<Theme> {
    match serde_json::from_str::<ThemeFile>(raw) {
        Ok(tf) => Some(theme_from_file(tf)),
        Err(err) => {
            tracing::warn!(source, error = %err, "skipping invalid theme file");
            None
        }
    }
}

/// Themes from `./themes` when that directory has any, else the embedded set.
/// Dark themes sort first.
pub(crate) fn load_themes() -> Vec<Theme> {
    let mut themes = Vec::new();

    let theme_dir = PathBuf::from(LOCAL_THEME_DIR);
    if theme_dir.is_dir() {
        let mut paths: Vec<PathBuf> = fs::read_dir(&theme_dir)
            .ok()
            .into_iter()
            .flat_map(|rd| rd.filter_map(Result::ok))
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|e| e == "json"))
            .collect();
        paths.sort();
        for path in paths {
            let Ok(raw) = fs::read_to_string(&path) else {
                continue;
            };
            themes.extend(parse_theme(&raw, &path.display().to_string()));
        }
    }
    if themes.is_empty() {
        themes = embedded_themes();
    }
    themes.sort_by_key(|t| (t.theme_type != "dark", t.name.to_ascii_lowercase()));
    tracing::debug!(count = themes.len(), "themes loaded");
    themes
}

fn embedded_themes() -> Vec<Theme> {
    let mut files: Vec<_> = EMBEDDED_THEMES
        .files()
        .filter(|f| f.path().extension().is_some_and(|e| e == "json"))
        .collect();
    files.sort_by_key(|f| f.path());
    files
        .into_iter()
        .filter_map(|file| {
            let raw = file.contents_utf8()?;
            parse_theme(raw, &file.path().display().to_string())
        })
        .collect()
}
