//! Login screen.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - fields, focus and submit phase
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginState};
pub use view::render_login;
