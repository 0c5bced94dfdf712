//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;
use showcase_core::View;

use crate::app::AppState;

/// Main render function - draws the visible route, then any overlays
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let view = state.context.current_view();
    match view {
        View::Login => screens::login::render(frame, area, state),
        View::Dashboard { items } => screens::dashboard::render(frame, area, state, items),
        View::Detail { detail, .. } => screens::detail::render(frame, area, state, detail),
    }

    if state.show_help {
        components::help::render(frame, area, state.current_route(), &state.theme);
    }

    if let Some(notice) = &state.notice {
        components::notice::render(frame, area, notice, &state.theme);
    }

    state.notifications.render(frame, area, &state.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Notice;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_login_screen_renders() {
        let screen = draw(&mut AppState::default());
        assert!(screen.contains("Maestro App"));
        assert!(screen.contains("Sign in to continue"));
        assert!(screen.contains("Hint: test@example.com / password"));
    }

    #[test]
    fn test_login_hint_can_be_hidden() {
        let mut state = AppState::new(Theme::default(), false);
        assert!(!draw(&mut state).contains("Hint:"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut state = AppState::default();
        state.login.focus = crate::app::LoginField::Password;
        for c in "secret".chars() {
            state.login.push_char(c);
        }
        let screen = draw(&mut state);
        assert!(!screen.contains("secret"));
        assert!(screen.contains("••••••"));
    }

    #[test]
    fn test_dashboard_and_detail_render() {
        let mut state = AppState::default();
        state.context.login("test@example.com", "password").unwrap();

        let screen = draw(&mut state);
        assert!(screen.contains("Welcome back!"));
        assert!(screen.contains("React Native"));
        assert!(screen.contains("Expo Router"));

        state.context.open_item("3").unwrap();
        let screen = draw(&mut state);
        assert!(screen.contains("TypeScript"));
        assert!(screen.contains("Key Features"));
        assert!(screen.contains("Back"));
    }

    #[test]
    fn test_detail_scroll_limit_follows_content() {
        let mut state = AppState::default();
        state.context.login("test@example.com", "password").unwrap();
        state.context.open_item("1").unwrap();

        let mut terminal = Terminal::new(TestBackend::new(160, 60)).unwrap();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert_eq!(state.detail_scroll_max, 0);

        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert!(state.detail_scroll_max > 0);

        state.detail_scroll = u16::MAX;
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert_eq!(state.detail_scroll, state.detail_scroll_max);
    }

    #[test]
    fn test_notice_overlay_renders() {
        let mut state = AppState::default();
        state.notice = Some(Notice::error("Invalid email or password"));
        let screen = draw(&mut state);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Invalid email or password"));
    }
}
