//! Request tasks owned by the visible screen.
//!
//! A `ScreenTasks` scope is created on every navigation. Dropping it aborts
//! whatever is still running, and the generation it stamps on result events
//! lets the app discard a result that finished just before the abort.

use std::future::Future;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::events::AppEvent;
use crate::ui::screen::ScreenMessage;

pub struct ScreenTasks {
    generation: u64,
    runtime: Handle,
    events: Sender<AppEvent>,
    handles: Vec<JoinHandle<()>>,
}

impl ScreenTasks {
    pub fn new(generation: u64, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            generation,
            runtime,
            events,
            handles: Vec::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs `task` on the runtime and posts its message back to the event
    /// loop, tagged with this scope's generation.
    pub fn spawn<F>(&mut self, label: &'static str, task: F)
    where
        F: Future<Output = ScreenMessage> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());

        let events = self.events.clone();
        let generation = self.generation;
        let handle = self.runtime.spawn(async move {
            let message = task.await;
            if events
                .send(AppEvent::Screen {
                    generation,
                    message,
                })
                .is_err()
            {
                tracing::debug!(task = label, generation, "Event loop closed, result dropped");
            }
        });
        tracing::debug!(task = label, generation, "Task spawned");
        self.handles.push(handle);
    }

    /// Tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn cancel_all(&mut self) {
        let pending = self.in_flight();
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        if pending > 0 {
            tracing::debug!(generation = self.generation, pending, "Cancelled screen tasks");
        }
    }
}

impl Drop for ScreenTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
