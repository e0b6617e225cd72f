use crate::ui::app::App;
use crate::ui::events::{forward_state_changes, AppEvent, EventHandler};
use crate::ui::home::MarsViewModel;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
pub fn run(view_model: MarsViewModel, tick_rate: Duration, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    // Subscribe before App takes its snapshot so no transition is missed.
    let forwarder = forward_state_changes(view_model.subscribe(), events.sender(), &runtime);
    let mut app = App::new(view_model);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::StateChanged(state)) => app.on_state_changed(state),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    forwarder.abort();
    drop(guard);
    Ok(())
}
