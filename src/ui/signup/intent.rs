use crate::api::ApiFailure;
use crate::ui::form::{FieldEdit, Step};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SignupIntent {
    Edit(FieldEdit),
    Focus(Step),

    /// Enter: submit on the Sign Up button, back on the Back button,
    /// otherwise move to the next field.
    Activate,

    Submit,

    /// Show or hide both password fields.
    TogglePasswordVisibility,

    /// `POST /api/register` finished.
    Completed(Result<(), ApiFailure>),

    DismissAlert,

    /// Return to the login screen.
    Back,
}

impl Intent for SignupIntent {}
