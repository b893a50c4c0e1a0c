use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::controller::ConsoleController;
use crate::theme::Theme;
use crate::widgets::Button;

/// Window frame, the visible panel and the action bar.
pub fn render(frame: &mut Frame, console: &ConsoleController, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(format!(" {} ", console.window().title()))
        .title_style(theme.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [panel_area, action_bar] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    if console.panel_area().is_visible() {
        for panel in console.panels().iter() {
            if panel.container().is_visible() {
                panel.render(frame, panel_area, theme);
            }
        }
    }

    render_action_bar(frame, action_bar, console.toggles(), console.quit_button(), theme);
}

/// Toggles packed from the left, separator and quit button on the right.
fn render_action_bar(
    frame: &mut Frame,
    area: Rect,
    toggles: &[Button],
    quit: &Button,
    theme: &Theme,
) {
    let mut constraints: Vec<Constraint> = toggles
        .iter()
        .map(|t| Constraint::Length(t.width()))
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(quit.width()));

    let areas = Layout::horizontal(constraints).spacing(1).split(area);

    for (toggle, slot) in toggles.iter().zip(areas.iter()) {
        toggle.render(frame, *slot);
    }
    let n = toggles.len();
    frame.render_widget(Paragraph::new("│").style(theme.muted), areas[n + 1]);
    quit.render(frame, areas[n + 2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Display;
    use crate::panel::PanelRegistry;
    use crate::testing::{buffer_text, ProbePanel};
    use crate::theme::ThemeRegistry;
    use ratatui::{backend::TestBackend, Terminal};

    #[tokio::test]
    async fn test_render_window() {
        let mut panels = PanelRegistry::new();
        panels.add(Box::new(ProbePanel::new("app-info", "App Info")));
        panels.add(Box::new(ProbePanel::new("tenants", "Tenants")));
        let mut console = ConsoleController::new(
            Display::new(100, 20),
            "Atlas-Gonnect v0.1.0 (gonnect-console 0.1.0) [dev]",
            panels,
            &ThemeRegistry::stock(),
        )
        .unwrap();
        console.refresh().await;

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| render(f, &console, &Theme::default()))
            .unwrap();
        let screen = buffer_text(terminal.backend().buffer());

        assert!(screen.contains("Atlas-Gonnect v0.1.0 (gonnect-console 0.1.0) [dev]"));
        assert!(screen.contains("refreshed 1x frozen 100x20"));
        assert!(screen.contains("App Info <F1>"));
        assert!(screen.contains("Tenants <F2>"));
        assert!(screen.contains("Quit <F10>"));
    }
}
