//! Building blocks shared by the form screens: editable fields, the
//! submit phase machine, alerts and the feedback request summary.

use chrono::{Days, NaiveDate};

use crate::api::ApiFailure;
use crate::models::FeedbackInfo;

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    pub value: String,
    /// Rendered as bullets when true.
    pub masked: bool,
}

impl TextField {
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Insert(ch) => self.value.push(ch),
            FieldEdit::Backspace => {
                self.value.pop();
            }
        }
    }

    /// Text to draw for this field.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Edit applied to the focused text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
}

/// Direction for pickers (course, date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

/// Lifecycle of a form submission.
///
/// `Idle → AwaitingResponse → Succeeded | Failed`. Validation failures go
/// straight from `Idle` to `Failed`. Dismissing the alert of a finished
/// submission returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    AwaitingResponse,
    Succeeded { message: String },
    Failed { message: String },
}

impl SubmitPhase {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::AwaitingResponse)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// Phase after a request completes. `context` prefixes failure text.
    pub fn complete(result: Result<(), ApiFailure>, success: &str, context: &str) -> Self {
        match result {
            Ok(()) => Self::Succeeded {
                message: success.to_string(),
            },
            Err(failure) => Self::Failed {
                message: failure.describe(context),
            },
        }
    }

    pub fn alert(&self, title: &'static str) -> Option<Alert<'_>> {
        match self {
            Self::Succeeded { message } => Some(Alert {
                title,
                message,
                is_error: false,
            }),
            Self::Failed { message } => Some(Alert {
                title,
                message,
                is_error: true,
            }),
            _ => None,
        }
    }
}

/// Modal message shown over the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert<'a> {
    pub title: &'static str,
    pub message: &'a str,
    pub is_error: bool,
}

/// Read-only header of the open feedback request, filled from
/// `GET /api/feedback_info`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestSummary {
    pub topic: String,
    pub date: NaiveDate,
    pub course_name: String,
}

impl RequestSummary {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            topic: String::new(),
            date: today,
            course_name: String::new(),
        }
    }

    /// Copies the fetched header. An unparseable date keeps the current one.
    pub fn apply(&mut self, info: &FeedbackInfo) {
        self.topic = info.topic.clone();
        self.course_name = info.course_name.clone();
        if let Some(date) = info.request_date() {
            self.date = date;
        }
    }
}

/// Progress of a display-only fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded,
    Unavailable,
}

/// Next focus index with wrap-around.
pub fn cycle(current: usize, len: usize, step: Step) -> usize {
    if len == 0 {
        return 0;
    }
    match step {
        Step::Forward => {
            if current + 1 >= len {
                0
            } else {
                current + 1
            }
        }
        Step::Back => {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        }
    }
}

/// Moves a date one day in `step` direction, saturating at the calendar ends.
pub fn shift_date(date: NaiveDate, step: Step) -> NaiveDate {
    let shifted = match step {
        Step::Forward => date.checked_add_days(Days::new(1)),
        Step::Back => date.checked_sub_days(Days::new(1)),
    };
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn text_field_edits() {
        let mut field = TextField::default();
        field.apply(FieldEdit::Insert('h'));
        field.apply(FieldEdit::Insert('i'));
        assert_eq!(field.value, "hi");
        field.apply(FieldEdit::Backspace);
        assert_eq!(field.value, "h");
        field.apply(FieldEdit::Backspace);
        field.apply(FieldEdit::Backspace);
        assert_eq!(field.value, "");
    }

    #[test]
    fn masked_field_hides_content() {
        let mut field = TextField::masked();
        field.apply(FieldEdit::Insert('p'));
        field.apply(FieldEdit::Insert('w'));
        assert_eq!(field.display(), "••");
        field.masked = false;
        assert_eq!(field.display(), "pw");
    }

    #[test]
    fn complete_maps_results() {
        let ok = SubmitPhase::complete(Ok(()), "Done", "Error");
        assert_eq!(
            ok,
            SubmitPhase::Succeeded {
                message: "Done".into()
            }
        );

        let failed = SubmitPhase::complete(
            Err(ApiFailure::Status {
                status: 500,
                body: "boom".into(),
            }),
            "Done",
            "Error",
        );
        assert_eq!(
            failed,
            SubmitPhase::Failed {
                message: "Error: boom".into()
            }
        );
    }

    #[test]
    fn alert_only_for_finished_phases() {
        assert!(SubmitPhase::Idle.alert("T").is_none());
        assert!(SubmitPhase::AwaitingResponse.alert("T").is_none());
        let failed = SubmitPhase::Failed {
            message: "bad".into(),
        };
        let alert = failed.alert("T").unwrap();
        assert!(alert.is_error);
        assert_eq!(alert.message, "bad");
    }

    #[test]
    fn summary_applies_info() {
        let mut summary = RequestSummary::new(date(2024, 6, 1));
        summary.apply(&FeedbackInfo {
            topic: "Midterm".into(),
            request_date: "2024-05-01".into(),
            course_name: "SENG384".into(),
        });
        assert_eq!(summary.topic, "Midterm");
        assert_eq!(summary.date, date(2024, 5, 1));
        assert_eq!(summary.course_name, "SENG384");
    }

    #[test]
    fn summary_keeps_date_when_unparseable() {
        let mut summary = RequestSummary::new(date(2024, 6, 1));
        summary.apply(&FeedbackInfo {
            topic: "Final".into(),
            request_date: "June 1st".into(),
            course_name: "SENG306".into(),
        });
        assert_eq!(summary.topic, "Final");
        assert_eq!(summary.date, date(2024, 6, 1));
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(0, 3, Step::Forward), 1);
        assert_eq!(cycle(2, 3, Step::Forward), 0);
        assert_eq!(cycle(0, 3, Step::Back), 2);
        assert_eq!(cycle(0, 0, Step::Back), 0);
    }

    #[test]
    fn shift_date_crosses_month() {
        assert_eq!(shift_date(date(2024, 5, 31), Step::Forward), date(2024, 6, 1));
        assert_eq!(shift_date(date(2024, 3, 1), Step::Back), date(2024, 2, 29));
    }
}
