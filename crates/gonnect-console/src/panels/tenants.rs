//! Tenants panel: one framed row per installed tenant with debug and
//! unlicensed toggles.

use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use tracing::{debug, error, info};

use gonnect_core::{Tenant, TenantContext, TenantStore};

use crate::display::RefreshContext;
use crate::error::ConsoleError;
use crate::panel::{InitContext, Panel, Verdict};
use crate::theme::{
    Theme, WidgetTheme, BUTTON_DEFAULT_THEME, PANEL_DEFAULT_FRAME_THEME, PANEL_FIRST_FRAME_THEME,
};
use crate::widgets::{Button, Container};

pub const KEY: &str = "tenants";
pub const NAME: &str = "Tenants";
pub const EMPTY_LABEL: &str = "(no gonnectian installations present";

pub const ROW_HEIGHT: u16 = 5;
pub const BUTTON_WIDTH: u16 = 23;

const ENABLE_DEBUG_TOOLTIP: &str = "Click to enable per-tenant UI debugging";
const DISABLE_DEBUG_TOOLTIP: &str = "Click to disable per-tenant UI debugging";
const ALLOW_UNLICENSED_TOOLTIP: &str = "Click to allow unlicensed installations for this tenant";
const REJECT_UNLICENSED_TOOLTIP: &str = "Click to reject unlicensed installations for this tenant";

/// Per-row buttons, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Debug,
    Unlicensed,
}

impl RowAction {
    const ALL: [RowAction; 2] = [RowAction::Debug, RowAction::Unlicensed];
}

#[derive(Debug, Clone, Copy)]
struct RowThemes {
    first_frame: WidgetTheme,
    default_frame: WidgetTheme,
    button: WidgetTheme,
}

/// A rendered tenant and the decoded context its buttons act on.
pub struct TenantRow {
    tenant: Tenant,
    context: TenantContext,
    text: String,
    frame: WidgetTheme,
    debug: Button,
    unlicensed: Button,
}

impl TenantRow {
    fn new(index: usize, tenant: Tenant, themes: &RowThemes) -> Self {
        let context = TenantContext::decode(&tenant.context);
        let text = row_text(index + 1, &tenant, &context);
        let frame = if index == 0 {
            themes.first_frame
        } else {
            themes.default_frame
        };

        let debug = if context.debug_enabled() {
            Button::new("debug", "Disable Debug", themes.button).with_tooltip(DISABLE_DEBUG_TOOLTIP)
        } else {
            Button::new("debug", "Enable Debug", themes.button).with_tooltip(ENABLE_DEBUG_TOOLTIP)
        };
        let unlicensed = if context.allowed_unlicensed() {
            Button::new("unlicensed", "Reject Unlicensed", themes.button)
                .with_tooltip(REJECT_UNLICENSED_TOOLTIP)
        } else {
            Button::new("unlicensed", "Allow Unlicensed", themes.button)
                .with_tooltip(ALLOW_UNLICENSED_TOOLTIP)
        };

        Self {
            tenant,
            context,
            text,
            frame,
            debug,
            unlicensed,
        }
    }

    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frame_theme(&self) -> WidgetTheme {
        self.frame
    }

    pub fn button(&self, action: RowAction) -> &Button {
        match action {
            RowAction::Debug => &self.debug,
            RowAction::Unlicensed => &self.unlicensed,
        }
    }

    fn button_mut(&mut self, action: RowAction) -> &mut Button {
        match action {
            RowAction::Debug => &mut self.debug,
            RowAction::Unlicensed => &mut self.unlicensed,
        }
    }
}

/// Three-line summary shown to the left of a row's buttons.
pub fn row_text(ordinal: usize, tenant: &Tenant, context: &TenantContext) -> String {
    let installed = if tenant.addon_installed {
        "installed"
    } else {
        "not installed"
    };
    let unlicensed = if context.allowed_unlicensed() {
        " allowed unlicensed, "
    } else {
        ""
    };
    let debugging = if context.debug_enabled() {
        " debugging enabled"
    } else {
        " debugging disabled"
    };
    format!(
        "[{}] {} (lic={})\n (c={} / u={})\n  ({}, {}{})",
        ordinal,
        tenant.base_url,
        context.license_display(),
        tenant.created_at_display(),
        tenant.updated_at_display(),
        installed,
        unlicensed,
        debugging,
    )
}

/// Size request for the row list: width after window, frame and scrollbar
/// columns, height of every row stacked. The scrollbar column is given back
/// when everything fits.
pub fn list_size(screen_width: u16, screen_height: u16, tenants: usize) -> (u16, u16) {
    let height = i64::try_from(tenants)
        .unwrap_or(i64::MAX)
        .saturating_mul(i64::from(ROW_HEIGHT));
    let mut width = i64::from(screen_width) - 2 - 2 - 1;
    if height < i64::from(screen_height) - 7 {
        width += 1;
    } else {
        width -= 1;
    }
    (clamp_u16(width), clamp_u16(height))
}

fn clamp_u16(value: i64) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// First row to draw so that `cursor_row` stays inside a viewport of
/// `visible` rows.
fn first_visible_row(cursor_row: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    (cursor_row + 1).saturating_sub(visible)
}

pub struct TenantsPanel {
    store: Arc<dyn TenantStore>,
    container: Container,
    themes: Option<RowThemes>,
    rows: Vec<TenantRow>,
    list_size: (u16, u16),
    scrollbar: bool,
    cursor: usize,
    focused: bool,
    status: Option<String>,
}

impl TenantsPanel {
    pub fn new(store: Arc<dyn TenantStore>) -> Self {
        Self {
            store,
            container: Container::new("tenants"),
            themes: None,
            rows: Vec::new(),
            list_size: (0, 0),
            scrollbar: false,
            cursor: 0,
            focused: false,
            status: None,
        }
    }

    pub fn rows(&self) -> &[TenantRow] {
        &self.rows
    }

    pub fn list_size(&self) -> (u16, u16) {
        self.list_size
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Row and button under the cursor.
    pub fn selection(&self) -> Option<(usize, RowAction)> {
        if self.rows.is_empty() {
            return None;
        }
        Some((self.cursor / 2, RowAction::ALL[self.cursor % 2]))
    }

    fn move_cursor(&mut self, forward: bool) {
        let last = (self.rows.len() * 2).saturating_sub(1);
        self.cursor = if forward {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        let selected = self.selection();
        let focused = self.focused;
        for (index, row) in self.rows.iter_mut().enumerate() {
            for action in RowAction::ALL {
                let button = row.button_mut(action);
                if focused && selected == Some((index, action)) {
                    button.grab_focus();
                } else {
                    button.release_focus();
                }
            }
        }
    }

    /// Flip one flag on a tenant's context and persist it. The caller
    /// refreshes on success; failures leave the rendered state untouched.
    pub async fn activate(&mut self, row: usize, action: RowAction) -> Verdict {
        let Some(current) = self.rows.get(row) else {
            return Verdict::pass();
        };
        let mut tenant = current.tenant.clone();
        let mut context = current.context.clone();

        match action {
            RowAction::Debug => {
                let enabled = context.toggle_debug();
                debug!(tenant = %tenant.base_url, enabled, "toggling tenant debug");
            }
            RowAction::Unlicensed => {
                let allowed = context.toggle_unlicensed();
                debug!(tenant = %tenant.base_url, allowed, "toggling tenant unlicensed use");
            }
        }

        tenant.context = match context.encode_string() {
            Ok(encoded) => encoded,
            Err(e) => {
                error!("error encoding tenant context change: {}", e);
                self.status = Some(format!("error encoding tenant context change: {}", e));
                return Verdict::stop();
            }
        };

        if let Err(e) = self.store.save(&tenant).await {
            error!("error saving tenant database change: {}", e);
            self.status = Some(format!("error saving tenant database change: {}", e));
            return Verdict::stop();
        }

        info!(tenant = %tenant.base_url, ?action, "tenant context updated");
        Verdict::stop_and_refresh()
    }

    fn render_rows(&self, frame: &mut Frame, body: Rect, theme: &Theme) {
        let visible = usize::from(body.height / ROW_HEIGHT).max(1);
        let cursor_row = self.cursor / 2;
        let first = first_visible_row(cursor_row, visible);

        let mut list = body;
        if self.scrollbar && list.width > 0 {
            list.width -= 1;
        }
        list.width = list.width.min(self.list_size.0);

        for (slot, row) in self.rows.iter().skip(first).take(visible).enumerate() {
            let Ok(offset) = u16::try_from(slot) else {
                break;
            };
            let y = list.y + offset * ROW_HEIGHT;
            if y >= list.bottom() {
                break;
            }
            let area = Rect {
                x: list.x,
                y,
                width: list.width,
                height: ROW_HEIGHT.min(list.bottom() - y),
            };
            render_row(frame, area, row, theme);
        }

        if self.scrollbar {
            let mut state = ScrollbarState::new(self.rows.len()).position(cursor_row);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                body,
                &mut state,
            );
        }
    }

    fn status_line(&self, theme: &Theme) -> Paragraph<'_> {
        if let Some(status) = &self.status {
            return Paragraph::new(status.as_str()).style(theme.danger);
        }
        let tooltip = self
            .selection()
            .filter(|_| self.focused)
            .and_then(|(row, action)| self.rows[row].button(action).tooltip());
        match tooltip {
            Some(text) => Paragraph::new(text).style(theme.muted),
            None => Paragraph::new(" ↑/↓ select  Enter toggle  Tab action bar").style(theme.key_hint),
        }
    }
}

fn render_row(frame: &mut Frame, area: Rect, row: &TenantRow, theme: &Theme) {
    let block = Block::default()
        .borders(row.frame.borders)
        .border_style(row.frame.normal);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, buttons_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)]).areas(inner);

    frame.render_widget(Paragraph::new(row.text.as_str()).style(theme.normal), text_area);

    for (line, action) in RowAction::ALL.into_iter().enumerate() {
        let Ok(line) = u16::try_from(line) else {
            break;
        };
        if line >= buttons_area.height {
            break;
        }
        let area = Rect {
            y: buttons_area.y + line,
            height: 1,
            ..buttons_area
        };
        row.button(action).render(frame, area);
    }
}

#[async_trait]
impl Panel for TenantsPanel {
    fn key(&self) -> &str {
        KEY
    }

    fn name(&self) -> &str {
        NAME
    }

    fn init(&mut self, ctx: &InitContext<'_>) -> Result<(), ConsoleError> {
        self.themes = Some(RowThemes {
            first_frame: ctx.themes.get(PANEL_FIRST_FRAME_THEME)?,
            default_frame: ctx.themes.get(PANEL_DEFAULT_FRAME_THEME)?,
            button: ctx.themes.get(BUTTON_DEFAULT_THEME)?,
        });
        self.container.set_label("tenants");
        Ok(())
    }

    fn container(&self) -> &Container {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    async fn refresh(&mut self, ctx: &RefreshContext) -> Result<(), ConsoleError> {
        let themes = self.themes.ok_or_else(|| ConsoleError::PanelInit {
            key: KEY.to_string(),
            reason: "refreshed before init".to_string(),
        })?;

        self.rows.clear();
        self.status = None;
        self.list_size = (0, 0);
        self.scrollbar = false;

        let tenants = match self.store.list().await {
            Ok(tenants) => tenants,
            Err(e) => {
                self.status = Some(format!("error listing tenants: {}", e));
                return Err(e.into());
            }
        };
        let count = tenants.len();
        self.container.set_label(format!("{} tenants found:", count));

        if count > 0 {
            self.list_size = list_size(ctx.screen_width, ctx.screen_height, count);
            self.scrollbar = i64::from(self.list_size.1) >= i64::from(ctx.screen_height) - 7;
            self.rows = tenants
                .into_iter()
                .enumerate()
                .map(|(index, tenant)| TenantRow::new(index, tenant, &themes))
                .collect();
        }

        self.cursor = self.cursor.min((count * 2).saturating_sub(1));
        self.sync_cursor();
        debug!(count, "tenants panel refreshed");
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Verdict {
        if self.rows.is_empty() {
            return Verdict::pass();
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false);
                Verdict::stop()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true);
                Verdict::stop()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selection() {
                Some((row, action)) => self.activate(row, action).await,
                None => Verdict::pass(),
            },
            _ => Verdict::pass(),
        }
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        self.sync_cursor();
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(format!(" {} ", self.container.label()))
            .title_style(theme.title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        if self.rows.is_empty() {
            let middle = Rect {
                y: body.y + body.height / 2,
                height: body.height.min(1),
                ..body
            };
            let empty = Paragraph::new(EMPTY_LABEL)
                .style(theme.muted)
                .alignment(Alignment::Center);
            frame.render_widget(empty, middle);
        } else {
            self.render_rows(frame, body, theme);
        }

        frame.render_widget(self.status_line(theme), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{buffer_text, key, tenant, MemoryStore};
    use crate::theme::ThemeRegistry;
    use gonnect_core::DomainError;
    use mockall::mock;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;

    mock! {
        pub Store {}

        #[async_trait]
        impl TenantStore for Store {
            async fn list(&self) -> Result<Vec<Tenant>, DomainError>;
            async fn save(&self, tenant: &Tenant) -> Result<(), DomainError>;
        }
    }

    const CTX: RefreshContext = RefreshContext {
        screen_width: 100,
        screen_height: 40,
        frozen: true,
    };

    async fn panel_with(store: Arc<dyn TenantStore>) -> TenantsPanel {
        let themes = ThemeRegistry::stock();
        let mut panel = TenantsPanel::new(store);
        panel.init(&InitContext { themes: &themes }).unwrap();
        panel.refresh(&CTX).await.unwrap();
        panel
    }

    fn context_of(t: &Tenant) -> serde_json::Value {
        serde_json::from_str(&t.context).unwrap()
    }

    fn render(panel: &TenantsPanel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| panel.render(f, f.area(), &Theme::default()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[tokio::test]
    async fn test_empty_table() {
        let panel = panel_with(Arc::new(MemoryStore::default())).await;
        assert_eq!(panel.container().label(), "0 tenants found:");
        assert!(panel.rows().is_empty());
        assert_eq!(panel.selection(), None);

        let screen = render(&panel);
        assert!(screen.contains(EMPTY_LABEL));
        assert!(!screen.contains("(no gonnectian installations present)"));
    }

    #[tokio::test]
    async fn test_single_tenant_default_context() {
        let store = Arc::new(MemoryStore::with_tenants(vec![tenant(1, "https://a.example", "")]));
        let panel = panel_with(store).await;

        assert_eq!(panel.container().label(), "1 tenants found:");
        assert_eq!(panel.list_size(), (96, 5));
        let row = &panel.rows()[0];
        assert_eq!(row.tenant().id, 1);
        assert_eq!(
            row.text(),
            "[1] https://a.example (lic=<nil>)\n (c=2023-01-02 03:04 UTC / u=2023-01-02 03:04 UTC)\n  (installed,  debugging disabled)"
        );
        assert_eq!(row.button(RowAction::Debug).label(), "Enable Debug");
        assert_eq!(row.button(RowAction::Unlicensed).label(), "Allow Unlicensed");
        assert_eq!(row.button(RowAction::Debug).tooltip(), Some(ENABLE_DEBUG_TOOLTIP));

        let screen = render(&panel);
        assert!(screen.contains("[1] https://a.example (lic=<nil>)"));
        assert!(screen.contains("Enable Debug"));
    }

    #[tokio::test]
    async fn test_toggle_debug_saves_and_refreshes() {
        let store = Arc::new(MemoryStore::with_tenants(vec![tenant(1, "https://a.example", "")]));
        let mut panel = panel_with(store.clone()).await;

        let verdict = panel.activate(0, RowAction::Debug).await;
        assert_eq!(verdict, Verdict::stop_and_refresh());

        let saves = store.saves();
        assert_eq!(saves.len(), 1);
        assert_eq!(context_of(&saves[0]), json!({"debug": "true"}));

        panel.refresh(&CTX).await.unwrap();
        let row = &panel.rows()[0];
        assert!(row.text().ends_with(" debugging enabled)"));
        assert_eq!(row.button(RowAction::Debug).label(), "Disable Debug");
        assert_eq!(row.button(RowAction::Debug).tooltip(), Some(DISABLE_DEBUG_TOOLTIP));

        panel.activate(0, RowAction::Debug).await;
        assert_eq!(context_of(&store.saves()[1]), json!({"debug": "false"}));
    }

    #[tokio::test]
    async fn test_allow_unlicensed_clears_reject() {
        let ctx = r#"{"debug":"false","allowed-unlicensed":false,"reject":"reason"}"#;
        let store = Arc::new(MemoryStore::with_tenants(vec![tenant(1, "https://a.example", ctx)]));
        let mut panel = panel_with(store.clone()).await;

        panel.activate(0, RowAction::Unlicensed).await;
        assert_eq!(
            context_of(&store.saves()[0]),
            json!({"debug": "false", "allowed-unlicensed": true})
        );

        panel.refresh(&CTX).await.unwrap();
        let row = &panel.rows()[0];
        assert_eq!(
            row.text().lines().last(),
            Some("  (installed,  allowed unlicensed,  debugging disabled)")
        );
        assert_eq!(row.button(RowAction::Unlicensed).label(), "Reject Unlicensed");
    }

    #[tokio::test]
    async fn test_reject_unlicensed_keeps_reject_and_foreign_keys() {
        let ctx = r#"{"allowed-unlicensed":true,"reject":"old","sen":{"a":[1,2]},"license":"active"}"#;
        let store = Arc::new(MemoryStore::with_tenants(vec![tenant(1, "https://a.example", ctx)]));
        let mut panel = panel_with(store.clone()).await;
        assert!(panel.rows()[0].text().starts_with("[1] https://a.example (lic=active)"));

        panel.activate(0, RowAction::Unlicensed).await;
        assert_eq!(
            context_of(&store.saves()[0]),
            json!({
                "allowed-unlicensed": false,
                "reject": "old",
                "sen": {"a": [1, 2]},
                "license": "active"
            })
        );
    }

    #[tokio::test]
    async fn test_rows_are_numbered_in_store_order() {
        let store = Arc::new(MemoryStore::with_tenants(vec![
            tenant(7, "https://c.example", ""),
            tenant(3, "https://a.example", "{}"),
            tenant(5, "https://b.example", "not json"),
        ]));
        let panel = panel_with(store).await;

        let headers: Vec<String> = panel
            .rows()
            .iter()
            .map(|r| r.text().lines().next().unwrap().to_string())
            .collect();
        assert_eq!(
            headers,
            [
                "[1] https://c.example (lic=<nil>)",
                "[2] https://a.example (lic=<nil>)",
                "[3] https://b.example (lic=<nil>)",
            ]
        );
        assert_eq!(panel.rows()[0].frame_theme().name, PANEL_FIRST_FRAME_THEME);
        assert_eq!(panel.rows()[1].frame_theme().name, PANEL_DEFAULT_FRAME_THEME);
        assert_eq!(panel.rows()[2].frame_theme().borders, Borders::NONE);

        // malformed context falls back to defaults
        let row = &panel.rows()[2];
        assert!(row.text().ends_with("(installed,  debugging disabled)"));
        assert_eq!(row.button(RowAction::Unlicensed).label(), "Allow Unlicensed");
    }

    #[tokio::test]
    async fn test_save_failure_keeps_state() {
        let mut store = MockStore::new();
        store
            .expect_list()
            .times(2)
            .returning(|| Ok(vec![tenant(1, "https://a.example", "")]));
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(DomainError::DatabaseError("connection reset".into())));

        let mut panel = panel_with(Arc::new(store)).await;
        let verdict = panel.activate(0, RowAction::Debug).await;

        assert_eq!(verdict, Verdict::stop());
        assert_eq!(
            panel.status(),
            Some("error saving tenant database change: Database error: connection reset")
        );
        assert_eq!(panel.rows()[0].button(RowAction::Debug).label(), "Enable Debug");
        assert!(render(&panel).contains("error saving tenant database change"));

        panel.refresh(&CTX).await.unwrap();
        assert!(panel.status().is_none());
        assert!(!render(&panel).contains("error saving tenant database change"));
    }

    #[tokio::test]
    async fn test_list_failure_surfaces_status() {
        let mut store = MockStore::new();
        store
            .expect_list()
            .returning(|| Err(DomainError::DatabaseError("gone".into())));

        let themes = ThemeRegistry::stock();
        let mut panel = TenantsPanel::new(Arc::new(store));
        panel.init(&InitContext { themes: &themes }).unwrap();
        let err = panel.refresh(&CTX).await.unwrap_err();

        assert!(matches!(err, ConsoleError::Store(_)));
        assert!(panel.rows().is_empty());
        assert!(panel.status().unwrap().starts_with("error listing tenants"));
    }

    #[tokio::test]
    async fn test_cursor_walks_buttons_row_major() {
        let store = Arc::new(MemoryStore::with_tenants(vec![
            tenant(1, "https://a.example", ""),
            tenant(2, "https://b.example", ""),
        ]));
        let mut panel = panel_with(store.clone()).await;
        panel.set_focus(true);

        assert_eq!(panel.selection(), Some((0, RowAction::Debug)));
        assert!(panel.rows()[0].button(RowAction::Debug).has_focus());

        for _ in 0..5 {
            panel.handle_key(key(KeyCode::Down)).await;
        }
        assert_eq!(panel.selection(), Some((1, RowAction::Unlicensed)));
        assert!(!panel.rows()[0].button(RowAction::Debug).has_focus());
        assert!(render(&panel).contains(ALLOW_UNLICENSED_TOOLTIP));

        panel.handle_key(key(KeyCode::Char('k'))).await;
        assert_eq!(panel.selection(), Some((1, RowAction::Debug)));

        let verdict = panel.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(verdict, Verdict::stop_and_refresh());
        assert_eq!(store.saves()[0].base_url, "https://b.example");

        assert_eq!(panel.handle_key(key(KeyCode::Char('x'))).await, Verdict::pass());
    }

    #[test]
    fn test_list_size() {
        // fits: scrollbar column handed back
        assert_eq!(list_size(100, 40, 2), (96, 10));
        // overflows: scrollbar column reserved
        assert_eq!(list_size(100, 40, 7), (94, 35));
        assert_eq!(list_size(100, 17, 2), (94, 10));
        // tiny screens clamp instead of underflowing
        assert_eq!(list_size(3, 2, 1), (0, 5));
        assert_eq!(list_size(0, 0, 0), (0, 0));
    }

    #[test]
    fn test_first_visible_row() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(5, 3), 3);
        assert_eq!(first_visible_row(4, 0), 4);
    }
}
