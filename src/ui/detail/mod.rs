//! Feedback detail: request header plus every submitted student feedback.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailState;
pub use view::render_detail;
