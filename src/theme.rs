//! Theme colors for the deck.
//!
//! Defaults to the SportPass brand palette; an optional kitty-style
//! color file at ~/.config/sportdeck/theme.conf overrides individual
//! entries so the deck can match a venue's terminal setup.

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // Brand green: active tabs, CTAs, highlights
    pub gold: Color,        // Secondary accent: eyebrows, prices
    pub text: Color,        // Primary copy
    pub text_dim: Color,    // Secondary copy, hidden blocks
    pub frame: Color,       // Phone frame, inactive borders
    pub heading: Color,     // Section headlines
    pub success: Color,     // Positive metrics
    pub danger: Color,      // Errors in the status line
    pub bg_selected: Color, // Active selector row background
}

impl Default for Theme {
    fn default() -> Self {
        // SportPass brand palette
        Self {
            accent: Color::Rgb(34, 197, 94),
            gold: Color::Rgb(255, 193, 7),
            text: Color::Rgb(226, 232, 240),
            text_dim: Color::Rgb(130, 140, 155),
            frame: Color::Rgb(71, 85, 105),
            heading: Color::Rgb(248, 250, 252),
            success: Color::Rgb(34, 197, 94),
            danger: Color::Rgb(239, 68, 68),
            bg_selected: Color::Rgb(30, 41, 59),
        }
    }
}

impl Theme {
    /// Load the palette, applying any overrides from the theme file.
    pub fn load() -> Self {
        match Self::load_override_file() {
            Some(colors) => Self::with_overrides(colors),
            None => Self::default(),
        }
    }

    fn load_override_file() -> Option<HashMap<String, Color>> {
        let path = dirs::config_dir()?.join("sportdeck/theme.conf");
        let content = fs::read_to_string(&path).ok()?;
        let colors = Self::parse_color_file(&content);
        if colors.is_empty() {
            None
        } else {
            Some(colors)
        }
    }

    fn with_overrides(colors: HashMap<String, Color>) -> Self {
        let base = Self::default();
        let pick = |key: &str, fallback: Color| colors.get(key).copied().unwrap_or(fallback);
        Self {
            accent: pick("accent", base.accent),
            gold: pick("gold", base.gold),
            text: pick("foreground", base.text),
            text_dim: pick("text_dim", base.text_dim),
            frame: pick("frame", base.frame),
            heading: pick("heading", base.heading),
            success: pick("success", base.success),
            danger: pick("danger", base.danger),
            bg_selected: pick("selection_background", base.bg_selected),
        }
    }

    /// Parse `key #hexcolor` lines, kitty.conf style.
    fn parse_color_file(content: &str) -> HashMap<String, Color> {
        let mut colors = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
            if parts.len() == 2 {
                if let Some(color) = Self::parse_hex_color(parts[1].trim()) {
                    colors.insert(parts[0].trim().to_string(), color);
                }
            }
        }

        colors
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            Theme::parse_hex_color("#22c55e"),
            Some(Color::Rgb(34, 197, 94))
        );
        assert_eq!(Theme::parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Theme::parse_hex_color("not-a-color"), None);
    }

    #[test]
    fn override_file_wins_over_defaults() {
        let colors = Theme::parse_color_file("accent #ff0000\n# comment\nforeground #ffffff\n");
        let theme = Theme::with_overrides(colors);
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.text, Color::Rgb(255, 255, 255));
        // Untouched entries keep the brand palette.
        assert_eq!(theme.gold, Theme::default().gold);
    }
}
