//! Theme colors, with optional overrides from the `[theme]` config table

use ratatui::style::Color;

use crate::config::ThemeConfig;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,   // Focused borders, button
    pub danger: Color,   // Errors
    pub warning: Color,  // Toast
    pub text: Color,     // Primary text
    pub text_dim: Color, // Placeholders, cultural notes
    pub badge: Color,    // Meaning badge background
    pub inactive: Color, // Unfocused borders
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(99, 179, 237),
            danger: Color::Rgb(243, 139, 168),
            warning: Color::Rgb(250, 179, 135),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            badge: Color::Rgb(49, 130, 206),
            inactive: Color::Rgb(88, 91, 112),
        }
    }
}

impl Theme {
    /// Build the theme from config, keeping the default for unset or invalid colors
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::default();
        let pick = |value: &Option<String>, fallback: Color| {
            value
                .as_deref()
                .and_then(|s| {
                    let color = Self::parse_hex_color(s);
                    if color.is_none() {
                        tracing::warn!("Ignoring invalid theme color '{}'", s);
                    }
                    color
                })
                .unwrap_or(fallback)
        };

        Self {
            accent: pick(&config.accent, base.accent),
            danger: pick(&config.danger, base.danger),
            warning: pick(&config.warning, base.warning),
            text: pick(&config.text, base.text),
            text_dim: pick(&config.text_dim, base.text_dim),
            badge: pick(&config.badge, base.badge),
            inactive: pick(&config.inactive, base.inactive),
        }
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }

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
