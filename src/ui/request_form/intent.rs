use crate::api::ApiFailure;
use crate::ui::form::{FieldEdit, Step};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RequestFormIntent {
    Edit(FieldEdit),
    Focus(Step),

    /// Left/Right on the course or date picker.
    Adjust(Step),

    Activate,
    Submit,

    /// `GET /api/courses` result. A failed fetch arrives as an empty list.
    CoursesLoaded(Vec<String>),

    /// `POST /api/feedback_requests` finished.
    Completed(Result<(), ApiFailure>),

    DismissAlert,
}

impl Intent for RequestFormIntent {}
