//! Terminal client for the course feedback service.
//!
//! - [`api`]: HTTP client and error types
//! - [`models`]: request and response payloads
//! - [`validation`]: client-side form checks
//! - [`config`]: TOML configuration
//! - [`ui`]: screens, event loop and rendering

pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod ui;
pub mod validation;
