use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use ratatui::DefaultTerminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the UI until the user quits.
///
/// `ratatui::init` enters raw mode and the alternate screen and installs a
/// panic hook that puts the terminal back; `ratatui::restore` does the same on
/// a normal exit, including when the loop fails.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let mut terminal = ratatui::init();
    tracing::info!(?tick_rate, "UI started");

    let result = event_loop(&mut terminal, &mut app, tick_rate);

    ratatui::restore();
    match &result {
        Ok(()) => tracing::info!(count = app.count(), "UI stopped"),
        Err(err) => tracing::error!(error = %err, "UI stopped on terminal error"),
    }
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tick_rate: Duration) -> io::Result<()> {
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
