//! Terminal front-end for the kiosk journey.
//!
//! A synchronous event loop owns the [`App`] (and with it the session
//! store); keyboard input, ticks, and settled backend requests all arrive
//! over one channel and are applied in order, so no two transitions ever
//! interleave.

pub mod app;
pub mod events;
mod footer;
mod header;
mod layout;
mod render;
mod screens;
mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let client = ApiClient::new(&config.backend);
    let mut app = App::new(config, client, events.sender(), runtime);
    app.probe_backend();

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(event) => app.on_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
