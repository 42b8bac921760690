//! Preview themes. A theme only affects the HTML preview; LaTeX output is
//! colorless.

use serde::Serialize;

/// Colors applied to the preview header band and section headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub primary_color: &'static str,
    pub header_text_color: &'static str,
    pub accent_color: &'static str,
}

/// The fixed named theme set. Selection is by name; the configs themselves
/// never change at runtime and are not derived from the document.
pub const THEMES: &[(&str, ThemeConfig)] = &[
    (
        "classic",
        ThemeConfig {
            primary_color: "#005f73",
            header_text_color: "#ffffff",
            accent_color: "#005f73",
        },
    ),
    (
        "modern",
        ThemeConfig {
            primary_color: "#1e293b",
            header_text_color: "#ffffff",
            accent_color: "#3b82f6",
        },
    ),
    (
        "emerald",
        ThemeConfig {
            primary_color: "#065f46",
            header_text_color: "#ffffff",
            accent_color: "#059669",
        },
    ),
];

pub const DEFAULT_THEME: &str = "classic";

pub fn theme_by_name(name: &str) -> Option<&'static ThemeConfig> {
    THEMES.iter().find(|(n, _)| *n == name).map(|(_, t)| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_exists() {
        assert!(theme_by_name(DEFAULT_THEME).is_some());
    }

    #[test]
    fn test_unknown_theme_is_none() {
        assert!(theme_by_name("neon").is_none());
    }

    #[test]
    fn test_classic_colors() {
        let theme = theme_by_name("classic").unwrap();
        assert_eq!(theme.primary_color, "#005f73");
        assert_eq!(theme.accent_color, "#005f73");
    }
}
