//! Application state and event handling

mod config;
mod events;
mod state;

pub use config::{ConfigError, ThemeChoice, TuiConfig};
pub use events::{Event, EventHandler};
pub use state::{AppState, LoginField, LoginForm, Notice, MAX_FIELD_LEN};

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use showcase_core::RouteId;

use crate::ui;
use crate::ui::components::notification::Notification;

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter
    pub tick: u64,

    /// Time between ticks
    tick_rate: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&TuiConfig::default())
    }
}

impl App {
    /// Create a new application instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(
                ui::Theme::from_choice(config.theme),
                config.show_login_hint,
            ),
            should_quit: false,
            tick: 0,
            tick_rate: config.tick_rate(),
        }
    }

    /// Run the application main loop
    ///
    /// Navigation errors are defects in the key handlers and end the loop.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &mut self.state))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key)?,
                Event::Resize => {}
                Event::Tick => self.on_tick(),
            }
        }

        Ok(())
    }

    /// Advance timers
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.state.notifications.tick(self.tick_rate);
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit handler
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        // A notice swallows everything until dismissed
        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.notice = None;
            }
            return Ok(());
        }

        if self.state.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?')
            ) {
                self.state.show_help = false;
            }
            return Ok(());
        }

        if key.code == KeyCode::F(1) {
            self.state.show_help = true;
            return Ok(());
        }

        // Delegate to screen-specific handlers
        match self.state.current_route() {
            RouteId::Login => self.handle_login_key(key),
            RouteId::Dashboard => self.handle_dashboard_key(key),
            RouteId::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.state.login.focus = self.state.login.focus.toggle();
            }
            KeyCode::Enter => self.submit_login()?,
            KeyCode::Backspace => self.state.login.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.login.push_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        let last = self.state.context.catalog().len().saturating_sub(1);

        match key.code {
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.dashboard_index = self.state.dashboard_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.dashboard_index < last {
                    self.state.dashboard_index += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.state.dashboard_index = 0,
            KeyCode::End | KeyCode::Char('G') => self.state.dashboard_index = last,
            KeyCode::Enter | KeyCode::Right => self.open_selected()?,
            KeyCode::Char('l' | 'L') => self.logout()?,
            KeyCode::Esc => {
                self.state.context.back();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.show_help = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b' | 'B') => {
                self.state.context.back();
                self.state.detail_scroll = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.detail_scroll = self.state.detail_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.detail_scroll =
                    (self.state.detail_scroll + 1).min(self.state.detail_scroll_max);
            }
            _ => {}
        }
        Ok(())
    }

    /// Tell the user their config file was not used
    pub fn report_config_error(&mut self, error: &ConfigError) {
        self.state.notifications.push(Notification::warning(format!(
            "Using default settings: {error}"
        )));
    }

    /// Follow a deep link, e.g. from `--open`
    ///
    /// A link opened before login waits for the user to sign in.
    pub fn open_link(&mut self, path: &str) -> Result<()> {
        self.state.context.open_deep_link(path)?;
        if self.state.context.pending_link().is_some() {
            self.state
                .notifications
                .push(Notification::warning(format!("Sign in to open {path}")));
        } else {
            self.state.detail_scroll = 0;
        }
        Ok(())
    }

    /// Check the login form against the session gate
    fn submit_login(&mut self) -> Result<()> {
        let decision = self
            .state
            .context
            .login(&self.state.login.email, &self.state.login.password)?;

        match decision.deny_reason() {
            None => {
                self.state.login.reset();
                self.state.dashboard_index = 0;
                self.state.detail_scroll = 0;
                self.state
                    .notifications
                    .push(Notification::success("Welcome back!"));
            }
            Some(reason) => {
                // Input stays in place for correction
                self.state.notice = Some(Notice::error(reason.notice()));
            }
        }
        Ok(())
    }

    /// Open the detail screen for the highlighted catalog entry
    fn open_selected(&mut self) -> Result<()> {
        if let Some(id) = self.state.selected_item_id() {
            self.state.context.open_item(id)?;
            self.state.detail_scroll = 0;
        }
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        self.state.context.logout()?;
        self.state.login.reset();
        self.state.notifications.push(Notification::info("Signed out"));
        Ok(())
    }
}
