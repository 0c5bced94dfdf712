//! Context-sensitive help component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use showcase_core::RouteId;

use crate::ui::{layout::centered_rect, Theme};

/// Help content for each screen
pub struct HelpContent {
    /// Screen title
    pub title: &'static str,
    /// Description
    pub description: &'static str,
    /// Key bindings
    pub keys: &'static [(&'static str, &'static str)],
}

/// Get help content for a route
pub fn help_for_route(route: RouteId) -> HelpContent {
    match route {
        RouteId::Login => HelpContent {
            title: "Sign In",
            description: "Enter your email and password to reach the dashboard. \
                         Both fields are required.",
            keys: &[
                ("Tab/↑/↓", "Switch field"),
                ("Enter", "Sign in"),
                ("F1", "Help"),
                ("Esc", "Quit"),
            ],
        },
        RouteId::Dashboard => HelpContent {
            title: "Dashboard",
            description: "The dashboard lists the technologies in this app's stack. \
                         Open one to read more about it.",
            keys: &[
                ("↑/↓ j/k", "Navigate list"),
                ("g/G", "First/last item"),
                ("Enter/→", "View details"),
                ("L", "Logout"),
                ("?", "Help"),
                ("Q", "Quit"),
            ],
        },
        RouteId::Detail => HelpContent {
            title: "Details",
            description: "A closer look at one technology: what it is and its key features.",
            keys: &[
                ("↑/↓", "Scroll"),
                ("Esc/←/B", "Back to dashboard"),
                ("?", "Help"),
                ("Q", "Quit"),
            ],
        },
    }
}

/// Render the help overlay for a route
pub fn render(frame: &mut Frame, area: Rect, route: RouteId, theme: &Theme) {
    let dialog_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, dialog_area);
    render_help(frame, dialog_area, &help_for_route(route), theme);
}

/// Render help content
pub fn render_help(frame: &mut Frame, area: Rect, content: &HelpContent, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Help: {} ", content.title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Description
            Constraint::Min(3),    // Key bindings
            Constraint::Length(1), // Close hint
        ])
        .split(inner);

    let desc = Paragraph::new(content.description)
        .style(theme.text())
        .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    let keys_text: String = content
        .keys
        .iter()
        .map(|(key, action)| format!("  [{:^9}]  {}", key, action))
        .collect::<Vec<_>>()
        .join("\n");

    let keys = Paragraph::new(keys_text).style(theme.text_secondary());
    frame.render_widget(keys, chunks[1]);

    let close = Paragraph::new("[Esc] Close")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(close, chunks[2]);
}
