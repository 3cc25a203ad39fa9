//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use course_feedback::api::ApiClient;
use course_feedback::config::ApiConfig;
use course_feedback::ui::app::{App, FormKey};
use course_feedback::ui::events::AppEvent;
use course_feedback::ui::form::{FieldEdit, Step};
use course_feedback::ui::screen::Route;
use tempfile::TempDir;
use tokio::runtime::Runtime;

use mock_backend::{CapturedRequest, MockBackend, MockResponse};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

pub fn api_client(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: 5,
    };
    ApiClient::new(&config).expect("valid test config")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a mock backend, with the event channel exposed.
///
/// Field order matters: the app and backend drop before the runtime.
pub struct Harness {
    pub app: App,
    pub backend: MockBackend,
    pub events: Receiver<AppEvent>,
    pub runtime: Runtime,
}

impl Harness {
    /// Starts the mock backend with `responses` queued, then opens `start`.
    pub fn start(start: Route, responses: Vec<(&str, MockResponse)>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("runtime");
        let backend = runtime.block_on(MockBackend::start());
        for (path, response) in responses {
            runtime.block_on(backend.respond(path, response));
        }

        let (tx, events) = mpsc::channel();
        let api = Arc::new(api_client(&backend.base_url()));
        let app = App::new(
            api,
            runtime.handle().clone(),
            tx,
            "Eda Poyraz".to_string(),
            today(),
            start,
        );

        Self {
            app,
            backend,
            events,
            runtime,
        }
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.app.on_form_key(FormKey::Edit(FieldEdit::Insert(ch)));
        }
    }

    pub fn next_field(&mut self) {
        self.app.on_form_key(FormKey::Focus(Step::Forward));
    }

    pub fn press(&mut self, key: FormKey) {
        self.app.on_form_key(key);
    }

    /// Feeds task results into the app until `done` holds.
    pub fn pump_until<F>(&mut self, timeout: Duration, mut done: F) -> bool
    where
        F: FnMut(&App) -> bool,
    {
        let deadline = Instant::now() + timeout;
        while !done(&self.app) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.events.recv_timeout(remaining) {
                Ok(AppEvent::Screen {
                    generation,
                    message,
                }) => self.app.on_screen_event(generation, message),
                Ok(_) => {}
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    /// Feeds every result that arrives within `window`.
    pub fn pump_for(&mut self, window: Duration) {
        let _ = self.pump_until(window, |_| false);
    }

    pub fn requests_to(&self, path: &str) -> Vec<CapturedRequest> {
        self.runtime.block_on(self.backend.requests_to(path))
    }
}
