//! The console as a host feature: configuration, lifecycle and the terminal
//! session.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use ratatui::DefaultTerminal;
use tracing::{debug, error, info};

use gonnect_core::TenantStore;
use gonnect_infrastructure::PgTenantStore;

use crate::controller::ConsoleController;
use crate::display::Display;
use crate::error::ConsoleError;
use crate::event;
use crate::host::{DatabaseFeature, Host};
use crate::panel::PanelRegistry;
use crate::panels::{AppInfoPanel, TenantsPanel};
use crate::theme::{Theme, ThemeRegistry};
use crate::ui;

pub const TAG: &str = "AtlasGonnect";
pub const NAME: &str = "atlas-gonnect";
pub const VERSION: &str = "0.1.0";

const DEPENDS: &[&str] = &[DatabaseFeature::TAG];

/// Time the display gets to settle before a failed startup tears it down.
const STARTUP_SETTLE: Duration = Duration::from_millis(100);
const POLL_INTERVAL_MS: u64 = 100;

/// Unconfigured console. Both setters must be called before `make`.
#[derive(Debug, Default)]
pub struct ConsoleFeature {
    db_tag: Option<String>,
    table: Option<String>,
    prefix: String,
    bin_name: String,
    bin_version: String,
}

impl ConsoleFeature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_db_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.db_tag = Some(tag.into());
        self
    }

    pub fn set_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    pub fn tag(&self) -> &'static str {
        TAG
    }

    pub fn depends(&self) -> &'static [&'static str] {
        DEPENDS
    }

    pub fn build(&self) {
        debug!("{} (v{}) build", TAG, VERSION);
    }

    /// Receive the `--prefix` flag and the host's identity.
    pub fn setup(&mut self, prefix: &str, host: &Host) {
        self.prefix = prefix.to_string();
        self.bin_name = host.bin_name().to_string();
        self.bin_version = host.version().to_string();
    }

    pub fn title(&self) -> String {
        let mut title = format!(
            "Atlas-Gonnect v{} ({} {})",
            VERSION, self.bin_name, self.bin_version
        );
        if !self.prefix.is_empty() {
            title.push_str(&format!(" [{}]", self.prefix));
        }
        title
    }

    pub fn make(&self, host: Arc<Host>) -> Result<Console, ConsoleError> {
        let db_tag = self
            .db_tag
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(ConsoleError::MissingDatabaseTag)?;
        let table = self
            .table
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(ConsoleError::MissingTableName)?;

        Ok(Console {
            host,
            db_tag,
            table,
            title: self.title(),
            store: None,
        })
    }
}

/// A configured console, ready to connect and run.
pub struct Console {
    host: Arc<Host>,
    db_tag: String,
    table: String,
    title: String,
    store: Option<Arc<dyn TenantStore>>,
}

impl Console {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn db_tag(&self) -> &str {
        &self.db_tag
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Use `store` instead of connecting to the tagged database.
    pub fn with_store(mut self, store: Arc<dyn TenantStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Obtain the tagged database and bind the tenant store to the table.
    pub async fn prepare(&mut self) -> Result<Arc<dyn TenantStore>, ConsoleError> {
        let pool = self
            .host
            .databases()
            .connect(&self.db_tag)
            .await
            .map_err(|source| ConsoleError::DatabaseUnavailable {
                tag: self.db_tag.clone(),
                source,
            })?;
        let store: Arc<dyn TenantStore> = Arc::new(PgTenantStore::new(pool, &self.table)?);
        info!(tag = %self.db_tag, table = %self.table, "tenant store ready");
        self.store = Some(store.clone());
        Ok(store)
    }

    /// Panels in toggle order.
    pub fn panels(&self, store: Arc<dyn TenantStore>) -> PanelRegistry {
        let mut panels = PanelRegistry::new();
        panels.add(Box::new(AppInfoPanel::new(self.host.clone())));
        panels.add(Box::new(TenantsPanel::new(store)));
        panels
    }

    /// Build the controller and bring up the first panel. On failure the
    /// display is told to quit and given a moment to settle.
    pub async fn startup(
        &self,
        display: &Display,
        panels: PanelRegistry,
        themes: &ThemeRegistry,
    ) -> Result<ConsoleController, ConsoleError> {
        match ConsoleController::new(display.clone(), self.title.as_str(), panels, themes) {
            Ok(mut controller) => {
                controller.refresh().await;
                controller.window_mut().show();
                display.notify_startup_complete();
                info!(title = %self.title, "console started");
                Ok(controller)
            }
            Err(e) => {
                error!("error constructing console: {}", e);
                display.notify_startup_complete();
                display.request_quit();
                tokio::time::sleep(STARTUP_SETTLE).await;
                Err(e)
            }
        }
    }

    /// Own the terminal until the operator quits. Exits with 1 when the
    /// interface cannot be built.
    pub async fn run(mut self) -> Result<ExitCode, ConsoleError> {
        let store = match self.store.clone() {
            Some(store) => store,
            None => self.prepare().await?,
        };

        let mut terminal = ratatui::init();
        let result = self.session(&mut terminal, store).await;
        ratatui::restore();

        match result {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(SessionError::Startup(e)) => {
                report_startup_failure(&e, &mut io::stderr().lock());
                Ok(ExitCode::from(1))
            }
            Err(SessionError::Runtime(e)) => Err(e),
        }
    }

    async fn session(
        &self,
        terminal: &mut DefaultTerminal,
        store: Arc<dyn TenantStore>,
    ) -> Result<(), SessionError> {
        let size = terminal
            .size()
            .map_err(|e| SessionError::Runtime(e.into()))?;
        let display = Display::new(size.width, size.height);
        let themes = ThemeRegistry::stock();

        let controller = self
            .startup(&display, self.panels(store), &themes)
            .await
            .map_err(SessionError::Startup)?;
        event_loop(terminal, controller)
            .await
            .map_err(SessionError::Runtime)
    }
}

enum SessionError {
    Startup(ConsoleError),
    Runtime(ConsoleError),
}

/// Draw when asked, route events until quit is requested.
async fn event_loop(
    terminal: &mut DefaultTerminal,
    mut controller: ConsoleController,
) -> Result<(), ConsoleError> {
    let theme = Theme::default();

    loop {
        if controller.display().take_show_request() {
            terminal.autoresize()?;
        }
        if !controller.window().is_frozen() && controller.display().take_draw_request() {
            terminal.draw(|frame| ui::render(frame, &controller, &theme))?;
        }

        if controller.display().quit_requested() {
            info!("console shutting down");
            break;
        }

        if let Some(evt) = event::poll_event(POLL_INTERVAL_MS)? {
            controller.handle_event(evt).await;
        }
    }
    Ok(())
}

pub fn report_startup_failure(err: &ConsoleError, out: &mut impl Write) {
    let _ = writeln!(out, "error constructing curses user interface: {}", err);
}
