//! Read-only listing of the add-ons published by host features.

use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use gonnect_core::AddonDescriptor;

use crate::display::RefreshContext;
use crate::error::ConsoleError;
use crate::host::Host;
use crate::panel::{InitContext, Panel, Verdict};
use crate::theme::Theme;
use crate::widgets::Container;

pub const KEY: &str = "app-info";
pub const NAME: &str = "App Info";

const PAGE: u16 = 10;

/// Grouped listing of descriptors plus its counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppListing {
    pub text: String,
    pub applications: usize,
    pub versions: usize,
}

impl AppListing {
    pub fn label(&self) -> String {
        format!(
            "{} applications, {} total versions",
            self.applications, self.versions
        )
    }
}

/// Group descriptors by name in order of first appearance; one
/// `" - [<version>] <url>"` line per descriptor, groups separated by a blank
/// line.
pub fn list_applications(descriptors: &[AddonDescriptor]) -> AppListing {
    let mut groups: Vec<(&str, Vec<&AddonDescriptor>)> = Vec::new();
    for descriptor in descriptors {
        match groups.iter_mut().find(|(name, _)| *name == descriptor.name) {
            Some((_, members)) => members.push(descriptor),
            None => groups.push((descriptor.name.as_str(), vec![descriptor])),
        }
    }

    let text = groups
        .iter()
        .map(|(name, members)| {
            let mut block = name.to_string();
            for d in members {
                block.push_str(&format!("\n - [{}] {}", d.version, d.installation_url));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    AppListing {
        text,
        applications: groups.len(),
        versions: descriptors.len(),
    }
}

pub struct AppInfoPanel {
    host: Arc<Host>,
    container: Container,
    listing: Option<AppListing>,
    scroll: u16,
}

impl AppInfoPanel {
    pub fn new(host: Arc<Host>) -> Self {
        Self {
            host,
            container: Container::new("Application Info"),
            listing: None,
            scroll: 0,
        }
    }

    pub fn listing(&self) -> Option<&AppListing> {
        self.listing.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn max_scroll(&self) -> u16 {
        self.listing
            .as_ref()
            .map(|l| l.text.lines().count().saturating_sub(1))
            .and_then(|n| u16::try_from(n).ok())
            .unwrap_or(u16::MAX)
    }
}

#[async_trait]
impl Panel for AppInfoPanel {
    fn key(&self) -> &str {
        KEY
    }

    fn name(&self) -> &str {
        NAME
    }

    fn init(&mut self, _ctx: &InitContext<'_>) -> Result<(), ConsoleError> {
        self.container.set_label("Application Info");
        Ok(())
    }

    fn container(&self) -> &Container {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    async fn refresh(&mut self, _ctx: &RefreshContext) -> Result<(), ConsoleError> {
        let listing = list_applications(&self.host.addon_descriptors());
        self.container.set_label(listing.label());
        debug!(
            applications = listing.applications,
            versions = listing.versions,
            "app info refreshed"
        );
        self.listing = Some(listing);
        self.scroll = self.scroll.min(self.max_scroll());
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Verdict {
        let max = self.max_scroll();
        self.scroll = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.saturating_add(1).min(max),
            KeyCode::PageUp => self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll.saturating_add(PAGE).min(max),
            _ => return Verdict::pass(),
        };
        Verdict::stop()
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(format!(" {} ", self.container.label()))
            .title_style(theme.title);
        let text = self.listing.as_ref().map_or("", |l| l.text.as_str());
        let body = Paragraph::new(text)
            .style(theme.normal)
            .block(block)
            .scroll((self.scroll, 0));
        frame.render_widget(body, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::AddonFeature;
    use crate::testing::{buffer_text, key};
    use ratatui::{backend::TestBackend, Terminal};

    fn descriptor(name: &str, version: &str) -> AddonDescriptor {
        AddonDescriptor::new(
            name,
            version,
            &format!("https://addons.example/{}/{}", name, version),
        )
    }

    fn host() -> Arc<Host> {
        let mut host = Host::new("gonnect-console", "0.1.0");
        for (name, version) in [("calendar", "1.0"), ("wiki", "3.1"), ("calendar", "1.1")] {
            host.add_feature(Box::new(AddonFeature::new(descriptor(name, version))));
        }
        Arc::new(host)
    }

    const CTX: RefreshContext = RefreshContext {
        screen_width: 80,
        screen_height: 24,
        frozen: true,
    };

    #[test]
    fn test_groups_by_first_appearance() {
        let listing = list_applications(&[
            descriptor("calendar", "1.0"),
            descriptor("wiki", "3.1"),
            descriptor("calendar", "1.1"),
        ]);
        assert_eq!(listing.applications, 2);
        assert_eq!(listing.versions, 3);
        assert_eq!(
            listing.text,
            "calendar\n - [1.0] https://addons.example/calendar/1.0\n - [1.1] https://addons.example/calendar/1.1\n\nwiki\n - [3.1] https://addons.example/wiki/3.1"
        );
        assert_eq!(listing.label(), "2 applications, 3 total versions");
    }

    #[test]
    fn test_no_descriptors() {
        let listing = list_applications(&[]);
        assert_eq!(listing.text, "");
        assert_eq!(listing.label(), "0 applications, 0 total versions");
    }

    #[tokio::test]
    async fn test_refresh_reads_host_features() {
        let mut panel = AppInfoPanel::new(host());
        assert_eq!(panel.container().label(), "Application Info");

        panel.refresh(&CTX).await.unwrap();
        assert_eq!(panel.container().label(), "2 applications, 3 total versions");
        assert_eq!(panel.listing().unwrap().versions, 3);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|f| panel.render(f, f.area(), &Theme::default()))
            .unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("2 applications, 3 total versions"));
        assert!(screen.contains(" - [3.1] https://addons.example/wiki/3.1"));
    }

    #[tokio::test]
    async fn test_scroll_is_bounded() {
        let mut panel = AppInfoPanel::new(host());
        panel.refresh(&CTX).await.unwrap();

        assert_eq!(panel.handle_key(key(KeyCode::Up)).await, Verdict::stop());
        assert_eq!(panel.scroll(), 0);
        panel.handle_key(key(KeyCode::PageDown)).await;
        assert_eq!(panel.scroll(), 5);
        panel.handle_key(key(KeyCode::Char('k'))).await;
        assert_eq!(panel.scroll(), 4);
        assert_eq!(panel.handle_key(key(KeyCode::Enter)).await, Verdict::pass());
    }
}
