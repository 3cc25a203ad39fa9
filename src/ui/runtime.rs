use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

use chrono::Local;
use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::screen::Route;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the terminal UI until the user quits.
///
/// Request tasks run on `runtime`; the UI itself stays on the calling thread.
pub fn run(api: Arc<ApiClient>, runtime: Handle, ui: &UiConfig, start: Route) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        api,
        runtime,
        events.sender(),
        ui.teacher_name.clone(),
        Local::now().date_naive(),
        start,
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Screen {
                generation,
                message,
            }) => app.on_screen_event(generation, message),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Shutting down");
    drop(app);
    drop(guard);
    Ok(())
}
