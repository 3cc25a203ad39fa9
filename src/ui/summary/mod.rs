//! Summarized feedback list: course filter, date picker and the summary
//! card of the open request, with a link to the detail screen.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SummaryIntent;
pub use reducer::SummaryReducer;
pub use state::{SummaryField, SummaryState, ALL_COURSES};
pub use view::render_summary;
