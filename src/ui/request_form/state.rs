use chrono::NaiveDate;

use crate::models::FeedbackRequest;
use crate::ui::form::{Alert, FetchStatus, SubmitPhase, TextField};
use crate::ui::mvi::UiState;
use crate::ui::screen::{Route, ScreenState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestField {
    #[default]
    Course,
    Date,
    Topic,
    Submit,
}

impl RequestField {
    pub const ORDER: [RequestField; 4] = [
        RequestField::Course,
        RequestField::Date,
        RequestField::Topic,
        RequestField::Submit,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestFormState {
    pub courses: Vec<String>,
    /// Index into `courses`.
    pub selected_course: usize,
    pub courses_status: FetchStatus,
    pub date: NaiveDate,
    pub topic: TextField,
    pub focus: RequestField,
    pub phase: SubmitPhase,
}

impl UiState for RequestFormState {}

impl RequestFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            ..Self::default()
        }
    }

    pub fn selected_course(&self) -> Option<&str> {
        self.courses.get(self.selected_course).map(String::as_str)
    }

    /// Request body for the current selection. No course selected sends an
    /// empty course name.
    pub fn feedback_request(&self) -> FeedbackRequest {
        FeedbackRequest {
            topic: self.topic.value.clone(),
            date: self.date,
            course_name: self.selected_course().unwrap_or_default().to_string(),
        }
    }
}

impl ScreenState for RequestFormState {
    fn is_awaiting(&self) -> bool {
        self.phase.is_awaiting()
    }

    fn pending_route(&self) -> Option<Route> {
        None
    }

    fn alert(&self) -> Option<Alert<'_>> {
        self.phase.alert("Submission Status")
    }
}
