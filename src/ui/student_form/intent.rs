use crate::api::ApiFailure;
use crate::models::FeedbackInfo;
use crate::ui::form::{FieldEdit, Step};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StudentFormIntent {
    Edit(FieldEdit),
    Focus(Step),
    Activate,
    Submit,

    /// `GET /api/feedback_info` result; `None` when the fetch failed.
    InfoLoaded(Option<FeedbackInfo>),

    /// `POST /api/student_feedbacks` finished.
    Completed(Result<(), ApiFailure>),

    DismissAlert,
}

impl Intent for StudentFormIntent {}
