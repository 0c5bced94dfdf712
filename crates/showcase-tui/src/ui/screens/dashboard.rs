//! Dashboard screen - catalog list

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use showcase_core::CatalogItem;
use unicode_width::UnicodeWidthStr;

use crate::app::AppState;
use crate::ui::layout::{render_footer, render_header, ScreenLayout};
use crate::ui::Theme;

/// Columns reserved for an item icon
const ICON_COLUMNS: usize = 3;

/// Render the dashboard
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, items: &[CatalogItem]) {
    let theme = &state.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, state.context.navigator(), theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Welcome
            Constraint::Min(4),    // Catalog
        ])
        .split(layout.content);

    render_welcome(frame, chunks[0], theme);

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| catalog_row(item, i == state.dashboard_index, theme))
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Tech Stack "),
        )
        .highlight_style(theme.menu_item(true));

    let mut list_state = ListState::default().with_selected(Some(state.dashboard_index));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    render_footer(
        frame,
        layout.footer,
        &[
            ("↑↓", "Navigate"),
            ("Enter", "View"),
            ("L", "Logout"),
            ("?", "Help"),
            ("Q", "Quit"),
        ],
        theme,
    );
}

fn render_welcome(frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(area);

    let welcome = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Welcome back!", theme.title())),
        Line::from(Span::styled("Explore our tech stack", theme.text_secondary())),
    ])
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(welcome, chunks[0]);

    let logout = Paragraph::new(vec![Line::from(""), Line::from("[ Logout ]")])
        .style(theme.danger())
        .alignment(Alignment::Right);
    frame.render_widget(logout, chunks[1]);
}

/// Two-line row: icon and title, then the description
fn catalog_row<'a>(item: &'a CatalogItem, selected: bool, theme: &Theme) -> ListItem<'a> {
    let pad = " ".repeat(ICON_COLUMNS.saturating_sub(item.icon.width()));
    let marker = if selected { "›" } else { " " };

    let title = Line::from(vec![
        Span::styled(format!(" {} ", marker), theme.accent_fg(item.color)),
        Span::raw(item.icon),
        Span::raw(pad),
        Span::styled(item.title, theme.accent_fg(item.color).add_modifier(Modifier::BOLD)),
    ]);
    let description = Line::from(vec![
        Span::raw(" ".repeat(3 + ICON_COLUMNS)),
        Span::styled(item.description, theme.text_muted()),
    ]);

    ListItem::new(vec![title, description]).style(theme.menu_item(selected))
}
