//! Detail screen for one catalog item

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use showcase_core::ItemDetail;
use unicode_width::UnicodeWidthStr;

use crate::app::AppState;
use crate::ui::layout::{render_footer, render_header, section_title, ScreenLayout};
use crate::ui::Theme;

/// Render the detail screen
///
/// Also records how far the body can scroll at the current size.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    detail: &'static ItemDetail,
) {
    let layout = ScreenLayout::new(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hero
            Constraint::Min(4),    // Body
        ])
        .split(layout.content);

    let lines = body_lines(detail, &state.theme);

    // Side borders take two columns
    let rows = wrapped_height(&lines, chunks[1].width.saturating_sub(2));
    state.detail_scroll_max = rows.saturating_sub(chunks[1].height);
    state.detail_scroll = state.detail_scroll.min(state.detail_scroll_max);

    let theme = &state.theme;
    render_header(frame, layout.header, state.context.navigator(), theme);

    // Hero block in the item's color
    let hero_style = theme.accent_fill(detail.color);
    let hero = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("{}  {}", detail.icon, detail.title)),
        Line::from(detail.description),
    ])
    .style(hero_style)
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0]);

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(theme.border()),
        )
        .wrap(Wrap { trim: true })
        .scroll((state.detail_scroll, 0));
    frame.render_widget(body, chunks[1]);

    render_footer(
        frame,
        layout.footer,
        &[("Esc", "Back to Dashboard"), ("↑↓", "Scroll"), ("?", "Help"), ("Q", "Quit")],
        theme,
    );
}

/// About text followed by the feature list
fn body_lines(detail: &'static ItemDetail, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        section_title("About", theme),
        Line::from(Span::styled(detail.details, theme.text())),
        Line::from(""),
        section_title("Key Features", theme),
    ];
    lines.extend(detail.features.iter().map(|feature| {
        Line::from(vec![
            Span::styled("  ● ", theme.accent_fg(detail.color)),
            Span::styled(*feature, theme.text_secondary()),
        ])
    }));
    lines
}

/// Rows the lines take once word-wrapped to `width` columns
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width);
    if width == 0 {
        return 0;
    }

    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_rows(&text, width)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn wrapped_rows(text: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if used == 0 {
            used = word_width;
        } else if used + 1 + word_width <= width {
            used += 1 + word_width;
        } else {
            rows += 1;
            used = word_width;
        }

        // Words longer than a row break across rows
        while used > width {
            rows += 1;
            used -= width;
        }
    }
    rows
}
