use crate::models::RegistrationRequest;
use crate::ui::form::{Alert, SubmitPhase, TextField};
use crate::ui::mvi::UiState;
use crate::ui::screen::{Route, ScreenState};
use crate::validation::SignupFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Username,
    Name,
    Email,
    Password,
    ConfirmPassword,
    SignUpButton,
    BackButton,
}

impl SignupField {
    pub const ORDER: [SignupField; 7] = [
        SignupField::Username,
        SignupField::Name,
        SignupField::Email,
        SignupField::Password,
        SignupField::ConfirmPassword,
        SignupField::SignUpButton,
        SignupField::BackButton,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupState {
    pub username: TextField,
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub focus: SignupField,
    pub phase: SubmitPhase,
    pub route: Option<Route>,
}

impl Default for SignupState {
    fn default() -> Self {
        Self {
            username: TextField::default(),
            name: TextField::default(),
            email: TextField::default(),
            password: TextField::masked(),
            confirm_password: TextField::masked(),
            focus: SignupField::default(),
            phase: SubmitPhase::default(),
            route: None,
        }
    }
}

impl UiState for SignupState {}

impl SignupState {
    pub fn field_mut(&mut self, field: SignupField) -> Option<&mut TextField> {
        match field {
            SignupField::Username => Some(&mut self.username),
            SignupField::Name => Some(&mut self.name),
            SignupField::Email => Some(&mut self.email),
            SignupField::Password => Some(&mut self.password),
            SignupField::ConfirmPassword => Some(&mut self.confirm_password),
            SignupField::SignUpButton | SignupField::BackButton => None,
        }
    }

    pub fn passwords_visible(&self) -> bool {
        !self.password.masked
    }

    pub fn fields(&self) -> SignupFields<'_> {
        SignupFields {
            username: &self.username.value,
            name: &self.name.value,
            email: &self.email.value,
            password: &self.password.value,
            confirm_password: &self.confirm_password.value,
        }
    }

    pub fn registration_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: self.username.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            name: self.name.value.clone(),
        }
    }
}

impl ScreenState for SignupState {
    fn is_awaiting(&self) -> bool {
        self.phase.is_awaiting()
    }

    fn pending_route(&self) -> Option<Route> {
        self.route
    }

    fn alert(&self) -> Option<Alert<'_>> {
        self.phase.alert("Sign Up")
    }
}
