//! Sign-in screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, LoginField};
use crate::ui::layout::centered_rect_fixed;
use crate::ui::Theme;

const MASK: char = '•';

/// Draw the sign-in screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let form = &state.login;

    let dialog = centered_rect_fixed(48, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Logo
            Constraint::Length(1), // Title
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(2), // Button
            Constraint::Min(1),    // Hint
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let logo = Paragraph::new("◆")
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(logo, chunks[0]);

    let title = Paragraph::new("Maestro App")
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let subtitle = Paragraph::new("Sign in to continue")
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[2]);

    render_field(
        frame,
        chunks[3],
        "Email",
        &form.email,
        "Enter your email",
        form.focus == LoginField::Email,
        theme,
    );

    let masked: String = form.password.chars().map(|_| MASK).collect();
    render_field(
        frame,
        chunks[4],
        "Password",
        &masked,
        "Enter your password",
        form.focus == LoginField::Password,
        theme,
    );

    let button = Paragraph::new(Line::from(vec![
        Span::raw("[ "),
        Span::styled("Sign In", theme.text_highlight()),
        Span::raw(" ]"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(button, chunks[5]);

    if state.show_login_hint {
        let hint = Paragraph::new(format!(
            "Hint: {} / {}",
            showcase_core::ACCEPTED_EMAIL,
            showcase_core::ACCEPTED_PASSWORD
        ))
        .style(theme.text_muted())
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[6]);
    }

    let help = Paragraph::new("[Tab] Field  [Enter] Sign in  [Esc] Quit")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);
}

/// One labelled input box; an empty value shows its placeholder
fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(theme.text_secondary())
        .borders(Borders::ALL)
        .border_style(border);

    let line = if value.is_empty() {
        Line::from(Span::styled(placeholder, theme.text_muted()))
    } else if focused {
        Line::from(vec![Span::raw(value), Span::styled("▏", theme.text_highlight())])
    } else {
        Line::from(value)
    };

    let input = Paragraph::new(line)
        .style(theme.input(focused))
        .block(block);
    frame.render_widget(input, area);
}
