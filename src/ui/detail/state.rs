use chrono::NaiveDate;

use crate::models::FeedbackDetail;
use crate::ui::form::{Alert, FetchStatus, RequestSummary};
use crate::ui::mvi::UiState;
use crate::ui::screen::{Route, ScreenState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailState {
    pub summary: RequestSummary,
    pub summary_status: FetchStatus,
    pub details: Vec<FeedbackDetail>,
    pub details_status: FetchStatus,
    /// Index of the first entry shown.
    pub scroll: usize,
    pub route: Option<Route>,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            summary: RequestSummary::new(today),
            ..Self::default()
        }
    }

    pub fn visible_details(&self) -> &[FeedbackDetail] {
        self.details.get(self.scroll..).unwrap_or(&[])
    }
}

impl ScreenState for DetailState {
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
