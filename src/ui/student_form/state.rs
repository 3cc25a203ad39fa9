use chrono::NaiveDate;

use crate::models::StudentFeedback;
use crate::ui::form::{Alert, FetchStatus, RequestSummary, SubmitPhase, TextField};
use crate::ui::mvi::UiState;
use crate::ui::screen::{Route, ScreenState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentField {
    #[default]
    CourseQuality,
    CourseContent,
    TeachingMethodology,
    Submit,
}

impl StudentField {
    pub const ORDER: [StudentField; 4] = [
        StudentField::CourseQuality,
        StudentField::CourseContent,
        StudentField::TeachingMethodology,
        StudentField::Submit,
    ];

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentFormState {
    pub summary: RequestSummary,
    pub summary_status: FetchStatus,
    pub course_quality: TextField,
    pub course_content: TextField,
    pub teaching_methodology: TextField,
    pub focus: StudentField,
    pub phase: SubmitPhase,
}

impl UiState for StudentFormState {}

impl StudentFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            summary: RequestSummary::new(today),
            ..Self::default()
        }
    }

    pub fn field_mut(&mut self, field: StudentField) -> Option<&mut TextField> {
        match field {
            StudentField::CourseQuality => Some(&mut self.course_quality),
            StudentField::CourseContent => Some(&mut self.course_content),
            StudentField::TeachingMethodology => Some(&mut self.teaching_methodology),
            StudentField::Submit => None,
        }
    }

    pub fn student_feedback(&self) -> StudentFeedback {
        StudentFeedback {
            course_quality_feedback: self.course_quality.value.clone(),
            course_content_feedback: self.course_content.value.clone(),
            teaching_methodology_feedback: self.teaching_methodology.value.clone(),
        }
    }
}

impl ScreenState for StudentFormState {
    fn is_awaiting(&self) -> bool {
        self.phase.is_awaiting()
    }

    fn pending_route(&self) -> Option<Route> {
        None
    }

    fn alert(&self) -> Option<Alert<'_>> {
        self.phase.alert("Feedback")
    }
}
