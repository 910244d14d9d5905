pub mod app;
pub mod events;
pub mod footer;
pub mod generator;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::WorkerCommandSender;
use std::io;
use std::time::Duration;

/// Run the UI loop until the user quits.
///
/// `events` must be the same handler whose sender was given to the
/// worker, so backend results interleave with input on one channel.
pub fn run(config: &Config, commands: WorkerCommandSender, events: EventHandler) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config, commands);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::CounterLoaded(count)) => app.on_counter_loaded(count),
            Ok(AppEvent::QuoteGenerated { seq, quote, count }) => {
                app.on_quote_generated(seq, quote, count)
            }
            Ok(AppEvent::QuoteFailed { seq, message }) => app.on_quote_failed(seq, message),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
