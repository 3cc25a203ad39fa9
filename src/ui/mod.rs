//! Terminal UI: screens, event loop and rendering.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod render;
pub mod request_form;
pub mod runtime;
pub mod screen;
pub mod signup;
pub mod student_form;
pub mod summary;
pub mod tasks;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;

pub use runtime::run;
