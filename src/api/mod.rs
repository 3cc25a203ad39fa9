//! HTTP client for the course feedback service.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiFailure};

/// Endpoint paths, relative to the configured base origin.
pub mod endpoints {
    pub const LOGIN: &str = "api/login";
    pub const REGISTER: &str = "api/register";
    pub const FEEDBACK_REQUESTS: &str = "api/feedback_requests";
    pub const STUDENT_FEEDBACKS: &str = "api/student_feedbacks";
    pub const FEEDBACK_INFO: &str = "api/feedback_info";
    pub const STUDENT_FEEDBACK: &str = "api/stu_feedback";
    pub const COURSES: &str = "api/courses";
    pub const STUDENTS: &str = "api/students";
}
