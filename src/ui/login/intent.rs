//! Intents for the login screen.

use crate::api::ApiFailure;
use crate::ui::form::{FieldEdit, Step};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Edit the focused text field.
    Edit(FieldEdit),

    /// Move focus between fields and buttons.
    Focus(Step),

    /// Enter pressed: submits, or opens registration when the Register
    /// button is focused.
    Activate,

    /// Validate and start the login request.
    Submit,

    /// `POST /api/login` finished.
    Completed(Result<(), ApiFailure>),

    /// User closed the alert.
    DismissAlert,
}

impl Intent for LoginIntent {}
