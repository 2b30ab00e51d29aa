use ratatui::style::Color;

use crate::model::UiConfig;

/// Light/dark preference, toggled at runtime and persisted in UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<ThemeMode> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Resolved color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Cards, list rows, the modal
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    /// Accent: header block, active filter, checked boxes
    pub primary: Color,
    /// Text on primary-colored surfaces
    pub button_text: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF4, 0xF5, 0xF7),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x17, 0x17, 0x17),
            text_secondary: Color::Rgb(0x8A, 0x8A, 0x8A),
            primary: Color::Rgb(0x3F, 0x51, 0xB5),
            button_text: Color::Rgb(0xFF, 0xFF, 0xFF),
            selection_bg: Color::Rgb(0xE8, 0xEA, 0xF6),
            search_match_bg: Color::Rgb(0x3F, 0x51, 0xB5),
            search_match_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x12, 0x12),
            surface: Color::Rgb(0x1E, 0x1E, 0x1E),
            text: Color::Rgb(0xE0, 0xE0, 0xE0),
            text_secondary: Color::Rgb(0x75, 0x75, 0x75),
            primary: Color::Rgb(0x5C, 0x6B, 0xC0),
            button_text: Color::Rgb(0xFF, 0xFF, 0xFF),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x3A),
            search_match_bg: Color::Rgb(0x5C, 0x6B, 0xC0),
            search_match_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }

    /// Resolve the palette for a mode, applying [ui.colors] overrides.
    pub fn from_config(mode: ThemeMode, ui: &UiConfig) -> Self {
        let mut theme = Theme::for_mode(mode);

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "surface" => theme.surface = color,
                    "text" => theme.text = color,
                    "text_secondary" => theme.text_secondary = color,
                    "primary" => theme.primary = color,
                    "button_text" => theme.button_text = color,
                    "selection_bg" => theme.selection_bg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

/// Parse a hex color string like "#3F51B5" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#3F51B5"),
            Some(Color::Rgb(0x3F, 0x51, 0xB5))
        );
        assert_eq!(parse_hex_color("#121212"), Some(Color::Rgb(0x12, 0x12, 0x12)));
        assert_eq!(parse_hex_color("3F51B5"), None); // missing #
        assert_eq!(parse_hex_color("#3F5"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_mode_toggle_round_trip() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::from_str("solarized"), None);
    }

    #[test]
    fn test_palettes_differ_where_it_matters() {
        let light = Theme::for_mode(ThemeMode::Light);
        let dark = Theme::for_mode(ThemeMode::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
        assert_ne!(light.primary, dark.primary);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("nonsense_slot".into(), "#112233".into());

        let theme = Theme::from_config(ThemeMode::Dark, &ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Unknown slots are ignored, the rest keeps its default
        assert_eq!(theme.text, Color::Rgb(0xE0, 0xE0, 0xE0));
    }
}
