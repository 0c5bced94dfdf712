//! Session gate and session state
//!
//! The gate compares a submitted credential against a single fixed pair.
//! This is placeholder authentication for a demo shell: no hashing, no
//! lockout, no attempt counting.

use std::fmt;

use zeroize::Zeroizing;

use crate::{ACCEPTED_EMAIL, ACCEPTED_PASSWORD};

/// A submitted email/password pair, held only for one login attempt
#[derive(Clone)]
pub struct Credential {
    email: String,
    password: Zeroizing<String>,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Both fields contain something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Why a login attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// One or both fields were empty after trimming
    MissingCredentials,
    /// The pair did not match. Deliberately does not say which field.
    InvalidCredentials,
}

impl DenyReason {
    /// Text for the blocking notice shown to the user
    pub fn notice(&self) -> &'static str {
        match self {
            DenyReason::MissingCredentials => "Please enter both email and password",
            DenyReason::InvalidCredentials => "Invalid email or password",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::MissingCredentials => write!(f, "missing credentials"),
            DenyReason::InvalidCredentials => write!(f, "invalid credentials"),
        }
    }
}

/// Outcome of a gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Admit,
    Deny(DenyReason),
}

impl AuthDecision {
    pub fn is_admit(&self) -> bool {
        matches!(self, AuthDecision::Admit)
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            AuthDecision::Admit => None,
            AuthDecision::Deny(reason) => Some(*reason),
        }
    }
}

/// Checks credentials against one accepted pair
#[derive(Clone)]
pub struct SessionGate {
    accepted_email: String,
    accepted_password: Zeroizing<String>,
}

impl SessionGate {
    /// Gate accepting a custom pair
    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            accepted_email: email.into(),
            accepted_password: Zeroizing::new(password.into()),
        }
    }

    /// Decide whether a credential is admitted
    ///
    /// Emptiness is judged on trimmed input, but the comparison itself is
    /// exact and case-sensitive on the raw input.
    pub fn authenticate(&self, credential: &Credential) -> AuthDecision {
        if !credential.is_complete() {
            return AuthDecision::Deny(DenyReason::MissingCredentials);
        }

        if credential.email() == self.accepted_email
            && credential.password() == self.accepted_password.as_str()
        {
            AuthDecision::Admit
        } else {
            AuthDecision::Deny(DenyReason::InvalidCredentials)
        }
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::with_credentials(ACCEPTED_EMAIL, ACCEPTED_PASSWORD)
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate").finish_non_exhaustive()
    }
}

/// Authentication status of the current user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(email: &str, password: &str) -> AuthDecision {
        SessionGate::default().authenticate(&Credential::new(email, password))
    }

    #[test]
    fn test_deny_reason() {
        assert_eq!(check("test@example.com", "password").deny_reason(), None);
        assert_eq!(
            check("", "password").deny_reason(),
            Some(DenyReason::MissingCredentials)
        );
        assert_eq!(
            check("test@example.com", "nope").deny_reason(),
            Some(DenyReason::InvalidCredentials)
        );
    }

    #[test]
    fn test_accepted_pair_admits() {
        assert_eq!(check("test@example.com", "password"), AuthDecision::Admit);
    }

    #[test]
    fn test_empty_fields_are_missing() {
        let missing = AuthDecision::Deny(DenyReason::MissingCredentials);
        assert_eq!(check("", "password"), missing);
        assert_eq!(check("test@example.com", ""), missing);
        assert_eq!(check("   ", "password"), missing);
        assert_eq!(check("test@example.com", "\t "), missing);
        assert_eq!(check("", ""), missing);
    }

    #[test]
    fn test_mismatch_is_invalid() {
        let invalid = AuthDecision::Deny(DenyReason::InvalidCredentials);
        assert_eq!(check("test@example.com", "Password"), invalid);
        assert_eq!(check("TEST@example.com", "password"), invalid);
        assert_eq!(check("other@example.com", "password"), invalid);
    }

    #[test]
    fn test_surrounding_whitespace_is_not_trimmed_for_comparison() {
        assert_eq!(
            check(" test@example.com", "password"),
            AuthDecision::Deny(DenyReason::InvalidCredentials)
        );
        assert_eq!(
            check("test@example.com", "password "),
            AuthDecision::Deny(DenyReason::InvalidCredentials)
        );
    }

    #[test]
    fn test_debug_redacts() {
        let rendered = format!("{:?}", Credential::new("test@example.com", "hunter2"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("test@example.com"));
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(DenyReason::MissingCredentials.to_string(), "missing credentials");
        assert_eq!(DenyReason::InvalidCredentials.to_string(), "invalid credentials");
        assert_eq!(
            DenyReason::InvalidCredentials.notice(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_custom_gate() {
        let gate = SessionGate::with_credentials("a@b.c", "pw");
        assert!(gate.authenticate(&Credential::new("a@b.c", "pw")).is_admit());
        assert!(!gate
            .authenticate(&Credential::new("test@example.com", "password"))
            .is_admit());
    }

    #[test]
    fn test_session_default() {
        assert!(!SessionState::default().is_authenticated());
    }
}
