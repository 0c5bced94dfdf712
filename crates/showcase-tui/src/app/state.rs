//! Application state

use showcase_core::{AppContext, RouteId};
use zeroize::Zeroizing;

use crate::ui::components::notification::NotificationManager;
use crate::ui::Theme;

/// Maximum characters accepted in a login field
pub const MAX_FIELD_LEN: usize = 64;

/// Which login field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Login form input
#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: Zeroizing<String>,
    pub focus: LoginField,
}

impl LoginForm {
    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        let field = self.focused_mut();
        if field.chars().count() < MAX_FIELD_LEN {
            field.push(c);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Clear both fields and focus the email field
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.focus = LoginField::Email;
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut *self.password,
        }
    }
}

/// Blocking notice shown over the current screen until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Application state
pub struct AppState {
    /// Navigation, session and data
    pub context: AppContext,

    /// Login form input
    pub login: LoginForm,

    /// Dashboard selection index
    pub dashboard_index: usize,

    /// Detail screen scroll offset
    pub detail_scroll: u16,

    /// Furthest the detail body can scroll, set when it is drawn
    pub detail_scroll_max: u16,

    /// Modal notice, blocks all other input
    pub notice: Option<Notice>,

    /// Toast notifications
    pub notifications: NotificationManager,

    /// Help overlay visibility
    pub show_help: bool,

    /// Whether the login screen shows the demo credentials
    pub show_login_hint: bool,

    /// Active theme
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), true)
    }
}

impl AppState {
    /// Create new application state on the login screen
    pub fn new(theme: Theme, show_login_hint: bool) -> Self {
        Self {
            context: AppContext::new(),
            login: LoginForm::default(),
            dashboard_index: 0,
            detail_scroll: 0,
            detail_scroll_max: 0,
            notice: None,
            notifications: NotificationManager::new(),
            show_help: false,
            show_login_hint,
            theme,
        }
    }

    /// Route of the visible screen
    pub fn current_route(&self) -> RouteId {
        self.context.navigator().current().route
    }

    /// Catalog identifier under the dashboard cursor
    pub fn selected_item_id(&self) -> Option<&'static str> {
        self.context
            .catalog()
            .get(self.dashboard_index)
            .map(|item| item.id)
    }
}
