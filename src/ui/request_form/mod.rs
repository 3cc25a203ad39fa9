//! Feedback request form: course picker, date picker and topic.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::RequestFormIntent;
pub use reducer::RequestFormReducer;
pub use state::{RequestField, RequestFormState};
pub use view::render_request_form;
