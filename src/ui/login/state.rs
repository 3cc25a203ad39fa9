//! State for the login screen.

use crate::models::Credentials;
use crate::ui::form::{Alert, SubmitPhase, TextField};
use crate::ui::mvi::UiState;
use crate::ui::screen::{Route, ScreenState};

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    LoginButton,
    RegisterButton,
}

impl LoginField {
    pub const ORDER: [LoginField; 4] = [
        LoginField::Username,
        LoginField::Password,
        LoginField::LoginButton,
        LoginField::RegisterButton,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub phase: SubmitPhase,
    /// Set when the screen should be replaced.
    pub route: Option<Route>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            username: TextField::default(),
            password: TextField::masked(),
            focus: LoginField::default(),
            phase: SubmitPhase::default(),
            route: None,
        }
    }
}

impl UiState for LoginState {}

impl LoginState {
    /// Request body for the current field values.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.value.clone(), self.password.value.clone())
    }
}

impl ScreenState for LoginState {
    fn is_awaiting(&self) -> bool {
        self.phase.is_awaiting()
    }

    fn pending_route(&self) -> Option<Route> {
        self.route
    }

    fn alert(&self) -> Option<Alert<'_>> {
        self.phase.alert("Login")
    }
}
