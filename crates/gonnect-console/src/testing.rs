//! Fakes shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use gonnect_core::{DomainError, Tenant, TenantStore};

use crate::display::RefreshContext;
use crate::error::ConsoleError;
use crate::panel::{InitContext, Panel, Verdict};
use crate::theme::Theme;
use crate::widgets::Container;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn tenant(id: i64, base_url: &str, context: &str) -> Tenant {
    let at = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 0).unwrap();
    Tenant {
        id,
        client_key: format!("client-{}", id),
        base_url: base_url.to_string(),
        product_type: "jira".to_string(),
        description: String::new(),
        addon_installed: true,
        context: context.to_string(),
        created_at: at,
        updated_at: at,
    }
}

/// Records how often it was refreshed and whether the redraw suspension was
/// held at the time; the container label carries the last observation.
pub struct ProbePanel {
    key: String,
    name: String,
    container: Container,
    refreshes: usize,
    fail_init: bool,
}

impl ProbePanel {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            container: Container::new(""),
            refreshes: 0,
            fail_init: false,
        }
    }
}

pub fn failing_panel() -> ProbePanel {
    ProbePanel {
        fail_init: true,
        ..ProbePanel::new("broken", "Broken")
    }
}

#[async_trait]
impl Panel for ProbePanel {
    fn key(&self) -> &str {
        &self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, _ctx: &InitContext<'_>) -> Result<(), ConsoleError> {
        if self.fail_init {
            return Err(ConsoleError::PanelInit {
                key: self.key.clone(),
                reason: "probe refused to build".to_string(),
            });
        }
        Ok(())
    }

    fn container(&self) -> &Container {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    async fn refresh(&mut self, ctx: &RefreshContext) -> Result<(), ConsoleError> {
        self.refreshes += 1;
        let state = if ctx.frozen { "frozen" } else { "thawed" };
        self.container.set_label(format!(
            "refreshed {}x {} {}x{}",
            self.refreshes, state, ctx.screen_width, ctx.screen_height
        ));
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Verdict {
        match key.code {
            KeyCode::Char('r') => Verdict::stop_and_refresh(),
            _ => Verdict::pass(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _theme: &Theme) {
        frame.render_widget(Paragraph::new(self.container.label()), area);
    }
}

/// In-memory tenant table.
#[derive(Default)]
pub struct MemoryStore {
    tenants: Mutex<Vec<Tenant>>,
    saves: Mutex<Vec<Tenant>>,
}

impl MemoryStore {
    pub fn with_tenants(tenants: Vec<Tenant>) -> Self {
        Self {
            tenants: Mutex::new(tenants),
            saves: Mutex::default(),
        }
    }

    pub fn saves(&self) -> Vec<Tenant> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl TenantStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Tenant>, DomainError> {
        Ok(self.tenants.lock().unwrap().clone())
    }

    async fn save(&self, tenant: &Tenant) -> Result<(), DomainError> {
        let mut tenants = self.tenants.lock().unwrap();
        let row = tenants
            .iter_mut()
            .find(|t| t.id == tenant.id)
            .ok_or(DomainError::TenantNotFound(tenant.id))?;
        *row = tenant.clone();
        self.saves.lock().unwrap().push(tenant.clone());
        Ok(())
    }
}

/// Rendered buffer as text, one line per row.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
