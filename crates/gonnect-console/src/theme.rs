use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Borders;

use crate::error::ConsoleError;

pub const BUTTON_DEFAULT_THEME: &str = "toggle-button-default";
pub const BUTTON_ACTIVE_THEME: &str = "toggle-button-active";
pub const PANEL_FIRST_FRAME_THEME: &str = "panel-frame-theme-first";
pub const PANEL_DEFAULT_FRAME_THEME: &str = "panel-frame-theme-default";

/// Theme tokens for consistent styling across the TUI
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub normal: Style,
    pub muted: Style,
    pub danger: Style,
    pub key_hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            normal: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::DarkGray),
            danger: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Named look for a single widget: buttons use the styles, row frames use
/// the borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTheme {
    pub name: &'static str,
    pub normal: Style,
    pub focused: Style,
    pub borders: Borders,
}

impl WidgetTheme {
    pub fn style(&self, focused: bool) -> Style {
        if focused {
            self.focused
        } else {
            self.normal
        }
    }
}

/// Themes registered by name once at startup and looked up during panel init.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: HashMap<&'static str, WidgetTheme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the console's stock themes.
    pub fn stock() -> Self {
        let mut registry = Self::new();

        registry.register(WidgetTheme {
            name: BUTTON_DEFAULT_THEME,
            normal: Style::default().fg(Color::White).bg(Color::DarkGray),
            focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            borders: Borders::NONE,
        });

        let active = Style::default().fg(Color::White).bg(Color::Green);
        registry.register(WidgetTheme {
            name: BUTTON_ACTIVE_THEME,
            normal: active.add_modifier(Modifier::BOLD),
            focused: active.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            borders: Borders::NONE,
        });

        registry.register(WidgetTheme {
            name: PANEL_FIRST_FRAME_THEME,
            normal: Style::default().fg(Color::DarkGray),
            focused: Style::default().fg(Color::DarkGray),
            borders: Borders::TOP,
        });

        registry.register(WidgetTheme {
            name: PANEL_DEFAULT_FRAME_THEME,
            normal: Style::default().fg(Color::DarkGray),
            focused: Style::default().fg(Color::DarkGray),
            borders: Borders::NONE,
        });

        registry
    }

    pub fn register(&mut self, theme: WidgetTheme) {
        self.themes.insert(theme.name, theme);
    }

    pub fn get(&self, name: &str) -> Result<WidgetTheme, ConsoleError> {
        self.themes
            .get(name)
            .copied()
            .ok_or_else(|| ConsoleError::UnknownTheme(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_themes_registered() {
        let registry = ThemeRegistry::stock();
        for name in [
            BUTTON_DEFAULT_THEME,
            BUTTON_ACTIVE_THEME,
            PANEL_FIRST_FRAME_THEME,
            PANEL_DEFAULT_FRAME_THEME,
        ] {
            assert_eq!(registry.get(name).unwrap().name, name);
        }
        assert_eq!(
            registry.get(PANEL_FIRST_FRAME_THEME).unwrap().borders,
            Borders::TOP
        );
    }

    #[test]
    fn test_unknown_theme() {
        let err = ThemeRegistry::new().get("missing").unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownTheme(name) if name == "missing"));
    }
}
