use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// Format of `request_date` in `GET /api/feedback_info`.
pub const REQUEST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of `POST /api/feedback_requests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub topic: String,
    /// Sent as an ISO-8601 timestamp at midnight UTC.
    #[serde(serialize_with = "serialize_iso8601")]
    pub date: NaiveDate,
    pub course_name: String,
}

fn serialize_iso8601<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%dT00:00:00Z"))
}

/// Body of `POST /api/student_feedbacks`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFeedback {
    pub course_quality_feedback: String,
    pub course_content_feedback: String,
    pub teaching_methodology_feedback: String,
}

/// One entry of `GET /api/stu_feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct FeedbackDetail {
    pub course_quality: String,
    pub course_content: String,
    pub teaching_methodology: String,
}

/// Header of the currently open feedback request (`GET /api/feedback_info`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedbackInfo {
    pub topic: String,
    pub request_date: String,
    pub course_name: String,
}

impl FeedbackInfo {
    /// Parsed `request_date`, or `None` when it is not `yyyy-MM-dd`.
    pub fn request_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.request_date, REQUEST_DATE_FORMAT).ok()
    }
}

/// Ordered course names from `GET /api/courses`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct CourseList(pub Vec<String>);

impl CourseList {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
