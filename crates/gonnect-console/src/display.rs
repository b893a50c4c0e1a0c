//! Display handle, window state and the scoped redraw suspension.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::widgets::Container;

#[derive(Debug, Default)]
struct DisplayState {
    width: u16,
    height: u16,
    quit_requested: bool,
    draw_requested: bool,
    show_requested: bool,
    startup_complete: bool,
}

/// Shared handle to the terminal display. Cloning is cheap; every clone sees
/// the same requests.
#[derive(Debug, Clone, Default)]
pub struct Display {
    state: Arc<Mutex<DisplayState>>,
}

impl Display {
    pub fn new(width: u16, height: u16) -> Self {
        let display = Self::default();
        display.set_screen_size(width, height);
        display
    }

    fn lock(&self) -> MutexGuard<'_, DisplayState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn screen_size(&self) -> (u16, u16) {
        let state = self.lock();
        (state.width, state.height)
    }

    pub fn set_screen_size(&self, width: u16, height: u16) {
        let mut state = self.lock();
        state.width = width;
        state.height = height;
    }

    pub fn request_quit(&self) {
        self.lock().quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.lock().quit_requested
    }

    pub fn request_draw(&self) {
        self.lock().draw_requested = true;
    }

    /// Consume a pending draw request.
    pub fn take_draw_request(&self) -> bool {
        std::mem::take(&mut self.lock().draw_requested)
    }

    pub fn request_show(&self) {
        self.lock().show_requested = true;
    }

    /// Consume a pending show request.
    pub fn take_show_request(&self) -> bool {
        std::mem::take(&mut self.lock().show_requested)
    }

    pub fn notify_startup_complete(&self) {
        self.lock().startup_complete = true;
    }

    pub fn startup_complete(&self) -> bool {
        self.lock().startup_complete
    }
}

/// Top-level window: title, visibility and freeze depth.
#[derive(Debug, Clone, Default)]
pub struct Window {
    title: String,
    visible: bool,
    frozen: u32,
    layouts: u64,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show(&mut self) {
        self.visible = true;
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

    /// Invalidate the layout; the next draw recomputes every area.
    pub fn resize(&mut self) {
        self.layouts += 1;
    }

    pub fn layout_generation(&self) -> u64 {
        self.layouts
    }
}

/// What a panel may look at while it rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshContext {
    pub screen_width: u16,
    pub screen_height: u16,
    /// True when the window and panel area are frozen around the rebuild.
    pub frozen: bool,
}

/// Freezes the window and the panel area for as long as it lives. Dropping it
/// thaws both in reverse order, re-lays out the window and asks the display
/// for a redraw and re-show, on every exit path.
pub struct RedrawGuard<'a> {
    window: &'a mut Window,
    area: &'a mut Container,
    display: &'a Display,
}

impl<'a> RedrawGuard<'a> {
    pub fn acquire(window: &'a mut Window, area: &'a mut Container, display: &'a Display) -> Self {
        window.freeze();
        area.freeze();
        Self {
            window,
            area,
            display,
        }
    }

    pub fn refresh_context(&self) -> RefreshContext {
        let (screen_width, screen_height) = self.display.screen_size();
        RefreshContext {
            screen_width,
            screen_height,
            frozen: self.window.is_frozen() && self.area.is_frozen(),
        }
    }
}

impl Drop for RedrawGuard<'_> {
    fn drop(&mut self) {
        self.area.thaw();
        self.window.thaw();
        self.window.resize();
        self.display.request_draw();
        self.display.request_show();
    }
}
