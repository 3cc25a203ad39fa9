use crate::models::{FeedbackDetail, FeedbackInfo};
use crate::ui::form::Step;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Move the list by one entry.
    Scroll(Step),

    /// `GET /api/stu_feedback` result; `None` when the fetch failed.
    DetailsLoaded(Option<Vec<FeedbackDetail>>),

    /// `GET /api/feedback_info` result; `None` when the fetch failed.
    InfoLoaded(Option<FeedbackInfo>),

    /// Return to the summarized list.
    Back,
}

impl Intent for DetailIntent {}
