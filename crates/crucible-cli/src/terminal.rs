//! Terminal styling and capability detection.
//!
//! Path overlays are colored with raw ANSI sequences and fall back to plain
//! ASCII glyphs when the terminal does not advertise Unicode support.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold yellow for path arrows.
    pub const PATH: &str = "\x1b[1;33m";
    /// Bold reverse green for the origin and goal cells.
    pub const ENDPOINT: &str = "\x1b[1;7;32m";
    /// Gray for cells off the path.
    pub const GRAY: &str = "\x1b[90m";
    /// Bright bold white for variant labels and costs.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub path: &'static str,
    pub endpoint: &'static str,
    pub gray: &'static str,
    pub white_bold: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            path: colors::PATH,
            endpoint: colors::ENDPOINT,
            gray: colors::GRAY,
            white_bold: colors::WHITE_BOLD,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            path: "",
            endpoint: "",
            gray: "",
            white_bold: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, else `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters via `LANG` / `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    if let Ok(lang) = std::env::var("LANG") {
        if lang.to_uppercase().contains("UTF") {
            return true;
        }
    }
    if let Ok(lc_all) = std::env::var("LC_ALL") {
        if lc_all.to_uppercase().contains("UTF") {
            return true;
        }
    }
    #[cfg(windows)]
    {
        if let Ok(term) = std::env::var("TERM") {
            return !term.eq_ignore_ascii_case("dumb");
        }
        return true;
    }
    #[cfg(not(windows))]
    {
        false
    }
}

/// Format a number with thousand separators (commas).
///
/// ```
/// # use crucible_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
