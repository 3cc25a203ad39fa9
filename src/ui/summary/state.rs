use chrono::NaiveDate;

use crate::ui::form::{Alert, FetchStatus, RequestSummary};
use crate::ui::mvi::UiState;
use crate::ui::screen::{Route, ScreenState};

/// Label of the filter entry that selects no particular course.
pub const ALL_COURSES: &str = "All Courses";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryField {
    #[default]
    Course,
    Date,
    Details,
}

impl SummaryField {
    pub const ORDER: [SummaryField; 3] = [
        SummaryField::Course,
        SummaryField::Date,
        SummaryField::Details,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryState {
    pub courses: Vec<String>,
    /// 0 is "All Courses"; `n` is `courses[n - 1]`.
    pub course_filter: usize,
    /// The card's date doubles as the date picker value.
    pub summary: RequestSummary,
    pub summary_status: FetchStatus,
    pub focus: SummaryField,
    pub route: Option<Route>,
}

impl UiState for SummaryState {}

impl SummaryState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            summary: RequestSummary::new(today),
            ..Self::default()
        }
    }

    /// Number of filter entries, including "All Courses".
    pub fn filter_len(&self) -> usize {
        self.courses.len() + 1
    }

    pub fn filter_label(&self) -> &str {
        match self.course_filter {
            0 => ALL_COURSES,
            n => self
                .courses
                .get(n - 1)
                .map(String::as_str)
                .unwrap_or(ALL_COURSES),
        }
    }
}

impl ScreenState for SummaryState {
    fn is_awaiting(&self) -> bool {
        false
    }

    fn pending_route(&self) -> Option<Route> {
        self.route
    }

    fn alert(&self) -> Option<Alert<'_>> {
        None
    }
}
