//! Retained widget state
//!
//! Ratatui redraws from scratch every frame; these types hold the bits of
//! state the console mutates between frames (visibility, labels, themes,
//! focus, freeze depth).

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::theme::WidgetTheme;

/// Root of a panel or of the panel area.
#[derive(Debug, Clone, Default)]
pub struct Container {
    label: String,
    visible: bool,
    frozen: u32,
}

impl Container {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: false,
            frozen: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn freeze(&mut self) {
        self.frozen += 1;
    }

    pub fn thaw(&mut self) {
        self.frozen = self.frozen.saturating_sub(1);
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen > 0
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    key: String,
    label: String,
    theme: WidgetTheme,
    accelerator: Option<KeyCode>,
    tooltip: Option<&'static str>,
    focused: bool,
}

impl Button {
    pub fn new(key: impl Into<String>, label: impl Into<String>, theme: WidgetTheme) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            theme,
            accelerator: None,
            tooltip: None,
            focused: false,
        }
    }

    pub fn with_accelerator(mut self, accelerator: Option<KeyCode>) -> Self {
        self.accelerator = accelerator;
        self
    }

    pub fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn accelerator(&self) -> Option<KeyCode> {
        self.accelerator
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        self.tooltip
    }

    pub fn theme(&self) -> WidgetTheme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: WidgetTheme) {
        self.theme = theme;
    }

    pub fn grab_focus(&mut self) {
        self.focused = true;
    }

    pub fn release_focus(&mut self) {
        self.focused = false;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Columns needed to draw the label with one cell of padding each side.
    pub fn width(&self) -> u16 {
        u16::try_from(self.label.chars().count() + 2).unwrap_or(u16::MAX)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let p = Paragraph::new(self.label.as_str())
            .style(self.theme.style(self.focused))
            .alignment(Alignment::Center);
        frame.render_widget(p, area);
    }
}
