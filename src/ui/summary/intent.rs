use crate::models::FeedbackInfo;
use crate::ui::form::Step;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummaryIntent {
    Focus(Step),
    Adjust(Step),

    /// Enter; opens the details when the Details button is focused.
    Activate,

    /// `GET /api/feedback_info` result; `None` when the fetch failed.
    InfoLoaded(Option<FeedbackInfo>),

    /// `GET /api/courses` result. A failed fetch arrives as an empty list.
    CoursesLoaded(Vec<String>),
}

impl Intent for SummaryIntent {}
