//! Console controller: window, panel stack, action bar and the global
//! refresh cycle.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error, info};

use crate::display::{Display, RedrawGuard, Window};
use crate::error::ConsoleError;
use crate::panel::{EventFlag, InitContext, Panel, PanelRegistry};
use crate::theme::{ThemeRegistry, WidgetTheme, BUTTON_ACTIVE_THEME, BUTTON_DEFAULT_THEME};
use crate::widgets::{Button, Container};

pub const QUIT_LABEL: &str = "Quit <F10>";
const QUIT_KEY: KeyCode = KeyCode::F(10);

/// Which part of the window receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    PanelArea,
    /// Index into the action bar; `toggles.len()` is the quit button.
    ActionBar(usize),
}

pub struct ConsoleController {
    display: Display,
    window: Window,
    panel_area: Container,
    panels: PanelRegistry,
    toggles: Vec<Button>,
    quit: Button,
    focus: Focus,
    default_theme: WidgetTheme,
    active_theme: WidgetTheme,
}

impl ConsoleController {
    /// Initialise every panel and build the action bar. The first registered
    /// panel starts active.
    pub fn new(
        display: Display,
        title: impl Into<String>,
        mut panels: PanelRegistry,
        themes: &ThemeRegistry,
    ) -> Result<Self, ConsoleError> {
        if panels.is_empty() {
            return Err(ConsoleError::NoPanels);
        }

        let default_theme = themes.get(BUTTON_DEFAULT_THEME)?;
        let active_theme = themes.get(BUTTON_ACTIVE_THEME)?;

        let ctx = InitContext { themes };
        let mut toggles = Vec::with_capacity(panels.len());
        for (index, panel) in panels.iter_mut().enumerate() {
            panel.init(&ctx)?;
            panel.hide();
            toggles.push(toggle_button(index, &**panel, default_theme));
            debug!(panel = panel.key(), "panel initialised");
        }
        panels.set_active(0);

        let mut panel_area = Container::new("");
        panel_area.show();

        Ok(Self {
            display,
            window: Window::new(title),
            panel_area,
            panels,
            toggles,
            quit: Button::new("quit", QUIT_LABEL, default_theme).with_accelerator(Some(QUIT_KEY)),
            focus: Focus::ActionBar(0),
            default_theme,
            active_theme,
        })
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn panel_area(&self) -> &Container {
        &self.panel_area
    }

    pub fn panels(&self) -> &PanelRegistry {
        &self.panels
    }

    pub fn toggles(&self) -> &[Button] {
        &self.toggles
    }

    pub fn quit_button(&self) -> &Button {
        &self.quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Rebuild the visible state under a redraw suspension: hide inactive
    /// panels, restyle the toggles, then show and refresh the active panel.
    pub async fn refresh(&mut self) {
        let guard = RedrawGuard::acquire(&mut self.window, &mut self.panel_area, &self.display);
        let ctx = guard.refresh_context();
        let active = self.panels.active_index();
        info!(panel = self.panels.active_key(), "refreshing console");

        for (index, (panel, toggle)) in self
            .panels
            .iter_mut()
            .zip(self.toggles.iter_mut())
            .enumerate()
        {
            if index != active {
                panel.hide();
            }
            toggle.set_theme(self.default_theme);
        }

        if let Some(panel) = self.panels.active_mut() {
            panel.show();
            if let Err(e) = panel.refresh(&ctx).await {
                error!(panel = panel.key(), "error refreshing panel: {}", e);
            }
        }
        if let Some(toggle) = self.toggles.get_mut(active) {
            toggle.set_theme(self.active_theme);
        }
        self.focus = Focus::ActionBar(active);

        drop(guard);
        self.sync_focus();
    }

    /// Route one terminal event.
    pub async fn handle_event(&mut self, event: Event) -> EventFlag {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let flag = self.handle_key(key).await;
                self.display.request_draw();
                flag
            }
            Event::Resize(w, h) => {
                info!(w, h, "terminal resized");
                self.display.set_screen_size(w, h);
                self.refresh().await;
                EventFlag::Stop
            }
            _ => EventFlag::Pass,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventFlag {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.quit();
        }
        if self.quit.accelerator() == Some(key.code) {
            return self.quit();
        }
        if let Some(index) = self
            .toggles
            .iter()
            .position(|t| t.accelerator().is_some_and(|a| a == key.code))
        {
            self.focus = Focus::ActionBar(index);
            return self.activate_toggle(index).await;
        }
        if matches!(key.code, KeyCode::F(_)) {
            return EventFlag::Pass;
        }

        match (self.focus, key.code) {
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) => {
                self.focus = match self.focus {
                    Focus::PanelArea => Focus::ActionBar(self.panels.active_index()),
                    Focus::ActionBar(_) => Focus::PanelArea,
                };
                self.sync_focus();
                EventFlag::Stop
            }
            (Focus::ActionBar(index), KeyCode::Left) => {
                self.focus = Focus::ActionBar(index.saturating_sub(1));
                self.sync_focus();
                EventFlag::Stop
            }
            (Focus::ActionBar(index), KeyCode::Right) => {
                self.focus = Focus::ActionBar((index + 1).min(self.toggles.len()));
                self.sync_focus();
                EventFlag::Stop
            }
            (Focus::ActionBar(_), KeyCode::Up) | (Focus::ActionBar(_), KeyCode::Down) => {
                self.focus = Focus::PanelArea;
                self.sync_focus();
                EventFlag::Stop
            }
            (Focus::ActionBar(index), KeyCode::Enter)
            | (Focus::ActionBar(index), KeyCode::Char(' ')) => {
                if index < self.toggles.len() {
                    self.activate_toggle(index).await
                } else {
                    self.quit()
                }
            }
            (Focus::ActionBar(_), _) => EventFlag::Pass,
            (Focus::PanelArea, _) => {
                let verdict = match self.panels.active_mut() {
                    Some(panel) => panel.handle_key(key).await,
                    None => return EventFlag::Pass,
                };
                if verdict.refresh {
                    self.refresh().await;
                }
                verdict.flag
            }
        }
    }

    /// Switch to the panel behind toggle `index` and refresh. The toggle
    /// lets the activation keep bubbling.
    pub async fn activate_toggle(&mut self, index: usize) -> EventFlag {
        if self.panels.set_active(index) {
            info!(panel = self.panels.active_key(), "panel activated");
            self.refresh().await;
        }
        EventFlag::Pass
    }

    fn quit(&mut self) -> EventFlag {
        info!("quit requested");
        self.display.request_quit();
        EventFlag::Stop
    }

    fn sync_focus(&mut self) {
        let bar_index = match self.focus {
            Focus::ActionBar(index) => Some(index),
            Focus::PanelArea => None,
        };
        for (index, toggle) in self.toggles.iter_mut().enumerate() {
            if bar_index == Some(index) {
                toggle.grab_focus();
            } else {
                toggle.release_focus();
            }
        }
        if bar_index == Some(self.toggles.len()) {
            self.quit.grab_focus();
        } else {
            self.quit.release_focus();
        }

        let panel_focused = self.focus == Focus::PanelArea;
        if let Some(panel) = self.panels.active_mut() {
            panel.set_focus(panel_focused);
        }
    }
}

fn toggle_button(index: usize, panel: &dyn Panel, theme: WidgetTheme) -> Button {
    let ordinal = index + 1;
    let accelerator = u8::try_from(ordinal)
        .ok()
        .filter(|n| (1..=9).contains(n))
        .map(KeyCode::F);
    Button::new(
        panel.key(),
        format!("{} <F{}>", panel.name(), ordinal),
        theme,
    )
    .with_accelerator(accelerator)
}
