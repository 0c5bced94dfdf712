//! Modal notice dialog

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::Notice;
use crate::ui::{layout::centered_rect_fixed, Theme};

/// Render a notice over the current screen
pub fn render(frame: &mut Frame, area: Rect, notice: &Notice, theme: &Theme) {
    let dialog_area = centered_rect_fixed(44, 7, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .title_style(theme.danger())
        .borders(Borders::ALL)
        .border_style(theme.danger());

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    let message = Paragraph::new(notice.message.as_str())
        .style(theme.text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let help = Paragraph::new("[Enter] OK")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
