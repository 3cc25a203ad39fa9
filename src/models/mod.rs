//! Wire types exchanged with the feedback service.
//!
//! Request bodies serialize with the exact camelCase keys the service
//! expects; response bodies deserialize from its snake_case keys.

mod auth;
mod feedback;

pub use auth::{Credentials, RegistrationRequest};
pub use feedback::{
    CourseList, FeedbackDetail, FeedbackInfo, FeedbackRequest, StudentFeedback,
    REQUEST_DATE_FORMAT,
};
