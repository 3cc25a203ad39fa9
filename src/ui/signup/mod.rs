//! Registration screen.
//!
//! Same MVI layout as the login screen.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SignupIntent;
pub use reducer::SignupReducer;
pub use state::{SignupField, SignupState};
pub use view::render_signup;
