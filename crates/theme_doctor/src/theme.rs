//! Terminal theme records and their on-disk JSON form.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AuditError, Result};

/// The 16 console-color keys a terminal scheme may define, in ANSI order.
pub const CONSOLE_COLOR_KEYS: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "purple",
    "cyan",
    "white",
    "brightBlack",
    "brightRed",
    "brightGreen",
    "brightYellow",
    "brightBlue",
    "brightPurple",
    "brightCyan",
    "brightWhite",
];

/// One terminal color scheme as found in a Windows-Terminal-style JSON file.
///
/// Every field is optional; the audit applies documented defaults for the
/// fields a check needs, and silently skips console colors the scheme does
/// not define.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub name: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub cursor_color: Option<String>,
    pub selection_background: Option<String>,
    pub black: Option<String>,
    pub red: Option<String>,
    pub green: Option<String>,
    pub yellow: Option<String>,
    pub blue: Option<String>,
    pub purple: Option<String>,
    pub cyan: Option<String>,
    pub white: Option<String>,
    pub bright_black: Option<String>,
    pub bright_red: Option<String>,
    pub bright_green: Option<String>,
    pub bright_yellow: Option<String>,
    pub bright_blue: Option<String>,
    pub bright_purple: Option<String>,
    pub bright_cyan: Option<String>,
    pub bright_white: Option<String>,
}

impl ThemeRecord {
    /// Look up a console color by its scheme key.
    ///
    /// `None` for keys the record does not define (a skipped check, not an
    /// error) and for strings outside [`CONSOLE_COLOR_KEYS`].
    #[must_use]
    pub fn console_color(&self, key: &str) -> Option<&str> {
        let slot = match key {
            "black" => &self.black,
            "red" => &self.red,
            "green" => &self.green,
            "yellow" => &self.yellow,
            "blue" => &self.blue,
            "purple" => &self.purple,
            "cyan" => &self.cyan,
            "white" => &self.white,
            "brightBlack" => &self.bright_black,
            "brightRed" => &self.bright_red,
            "brightGreen" => &self.bright_green,
            "brightYellow" => &self.bright_yellow,
            "brightBlue" => &self.bright_blue,
            "brightPurple" => &self.bright_purple,
            "brightCyan" => &self.bright_cyan,
            "brightWhite" => &self.bright_white,
            _ => return None,
        };
        slot.as_deref()
    }
}

/// File name of a theme source, used as the source identifier and the
/// fallback theme name.
#[must_use]
pub fn source_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Read and decode one theme JSON file.
///
/// Unreadable or undecodable sources yield [`AuditError::ThemeParse`] so the
/// session can record the failure and keep auditing.
pub fn load_theme_record(path: &Path) -> Result<ThemeRecord> {
    let raw = fs::read_to_string(path).map_err(|error| AuditError::ThemeParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|error| AuditError::ThemeParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    })
}
