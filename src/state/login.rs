//! Login form state and its submission transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `LoginView` backs the whole page. A submit is split in two so the
//! network call can sit between them:
//! [`LoginView::begin_submit`] runs the local checks and marks the form
//! busy, [`LoginView::finish_submit`] records the outcome and frees the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::health::{HealthState, HealthStatus};
use crate::messages;
use crate::net::error::ClientError;
use crate::net::types::{LoginResponse, User};

/// Form inputs, updated on every keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl Credentials {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
        }
    }
}

/// Validated input for one login request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginAttempt {
    /// Trimmed username.
    pub username: String,
    /// Password exactly as typed.
    pub password: String,
}

/// All view state for the access page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginView {
    pub health: HealthState,
    pub credentials: Credentials,
    /// True while a login request is outstanding; disables the form.
    pub loading: bool,
    pub error: Option<String>,
    pub user: Option<User>,
}

impl LoginView {
    /// Record the health probe result. Only the first result is kept.
    pub fn apply_health(&mut self, health: HealthState) {
        if self.health.status != HealthStatus::Checking {
            return;
        }
        self.health = health;
    }

    /// Validate the form and mark it busy.
    ///
    /// Returns `None` when no request should be sent: a request is already
    /// outstanding, the backend is not healthy, or a field is empty. The
    /// last two set a local error.
    pub fn begin_submit(&mut self) -> Option<LoginAttempt> {
        if self.loading {
            return None;
        }
        if !self.health.is_ok() {
            self.error = Some(messages::API_UNAVAILABLE.to_owned());
            return None;
        }

        let username = self.credentials.username.trim();
        let password = &self.credentials.password;
        if username.is_empty() || password.is_empty() {
            self.error = Some(messages::CREDENTIALS_REQUIRED.to_owned());
            return None;
        }

        let attempt = LoginAttempt { username: username.to_owned(), password: password.clone() };
        self.loading = true;
        self.error = None;
        Some(attempt)
    }

    /// Record the login outcome and release the form.
    pub fn finish_submit(&mut self, result: Result<LoginResponse, ClientError>) {
        match result {
            Ok(resp) => {
                log::info!("signed in as {} (id {})", resp.user.username, resp.user.id);
                self.user = Some(resp.user);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message(messages::UNEXPECTED_ERROR).to_owned());
                self.user = None;
            }
        }
        self.loading = false;
    }

    /// What the feedback area under the form should show.
    #[must_use]
    pub fn feedback(&self) -> Feedback<'_> {
        if let Some(error) = &self.error {
            return Feedback::Error(error);
        }
        match &self.user {
            Some(user) => Feedback::Welcome(WelcomeCard::for_user(user)),
            None => Feedback::Empty,
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { messages::SUBMIT_BUSY } else { messages::SUBMIT_IDLE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback<'a> {
    Empty,
    Error(&'a str),
    Welcome(WelcomeCard),
}

/// Rendered identity of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WelcomeCard {
    pub heading: String,
    pub role: String,
    /// Omitted entirely when the user has no (or an empty) email.
    pub email: Option<String>,
}

impl WelcomeCard {
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            heading: messages::welcome(&user.username),
            role: messages::role_line(user.role.as_deref()),
            email: user.email.as_deref().filter(|e| !e.is_empty()).map(messages::email_line),
        }
    }
}
