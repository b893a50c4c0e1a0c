//! Panel contract and the ordered panel registry.

use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::display::RefreshContext;
use crate::error::ConsoleError;
use crate::theme::{Theme, ThemeRegistry};
use crate::widgets::Container;

/// Whether an event was consumed or should keep bubbling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlag {
    Stop,
    Pass,
}

/// Outcome of a panel key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub flag: EventFlag,
    /// Ask the controller to run a full refresh.
    pub refresh: bool,
}

impl Verdict {
    pub const fn pass() -> Self {
        Self {
            flag: EventFlag::Pass,
            refresh: false,
        }
    }

    pub const fn stop() -> Self {
        Self {
            flag: EventFlag::Stop,
            refresh: false,
        }
    }

    pub const fn stop_and_refresh() -> Self {
        Self {
            flag: EventFlag::Stop,
            refresh: true,
        }
    }
}

/// Handed to every panel during one-time setup.
pub struct InitContext<'a> {
    pub themes: &'a ThemeRegistry,
}

/// One switchable page of the console.
#[async_trait]
pub trait Panel: Send {
    /// Stable identifier.
    fn key(&self) -> &str;

    /// Human label, used for the action bar toggle.
    fn name(&self) -> &str;

    fn init(&mut self, ctx: &InitContext<'_>) -> Result<(), ConsoleError>;

    fn container(&self) -> &Container;

    fn container_mut(&mut self) -> &mut Container;

    fn show(&mut self) {
        self.container_mut().show();
    }

    fn hide(&mut self) {
        self.container_mut().hide();
    }

    /// Rebuild contents from external state. Safe to call repeatedly.
    async fn refresh(&mut self, ctx: &RefreshContext) -> Result<(), ConsoleError>;

    /// Handle a key while the panel area has focus.
    async fn handle_key(&mut self, key: KeyEvent) -> Verdict;

    fn set_focus(&mut self, _focused: bool) {}

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// Panels in registration order with exactly one marked active.
#[derive(Default)]
pub struct PanelRegistry {
    panels: Vec<Box<dyn Panel>>,
    active: usize,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, panel: Box<dyn Panel>) {
        self.panels.push(panel);
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Panel> {
        self.panels.iter().map(|p| -> &dyn Panel { p.as_ref() })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Panel>> {
        self.panels.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Panel> {
        self.panels.get(index).map(|p| -> &dyn Panel { p.as_ref() })
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.key() == key)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_key(&self) -> &str {
        self.panels.get(self.active).map_or("", |p| p.key())
    }

    pub fn active(&self) -> Option<&dyn Panel> {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Box<dyn Panel>> {
        self.panels.get_mut(self.active)
    }

    /// Mark the panel at `index` active. Out of range is ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.panels.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn activate(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => self.set_active(index),
            None => false,
        }
    }
}
