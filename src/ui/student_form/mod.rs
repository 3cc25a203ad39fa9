//! Student feedback form.
//!
//! Shows the open request's header (fetched on display) and three free-text
//! comments submitted together.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::StudentFormIntent;
pub use reducer::StudentFormReducer;
pub use state::{StudentField, StudentFormState};
pub use view::render_student_form;
