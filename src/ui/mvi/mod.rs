//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! # Architecture
//!
//! ```text
//! key / API result ──→ Intent ──→ Reducer ──→ State ──→ View
//!        ↑                                      │
//!        └──── App spawns request when state ───┘
//!              enters awaiting-response
//! ```
//!
//! - **State**: immutable snapshot of one screen
//! - **Intent**: user action or completed request
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
