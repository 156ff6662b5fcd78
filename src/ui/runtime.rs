use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::clipboard::system_clipboard;
use crate::composer::Composer;
use crate::config::UiConfig;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler, EventSender};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the TUI until the user quits.
///
/// Must be called from a current-thread runtime: requests are spawned as
/// tasks that interleave with input handling on the same thread.
pub async fn run(composer: Arc<Composer>, ui: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let mut app = App::new(
        Arc::clone(&composer),
        system_clipboard(),
        Duration::from_secs(ui.notice_seconds),
    );
    let mut events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };
        match event {
            AppEvent::Key(key) => {
                if let Some(command) = handle_key(&mut app, key) {
                    spawn_command(&composer, command, events.sender());
                }
            }
            AppEvent::Paste(text) => app.on_paste(&text),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
            AppEvent::RequestFinished(outcome) => app.on_request_finished(&outcome),
        }
    }

    drop(events);
    drop(guard);
    Ok(())
}

fn spawn_command(composer: &Arc<Composer>, command: UiCommand, tx: EventSender) {
    let composer = Arc::clone(composer);
    tokio::spawn(async move {
        let outcome = match command {
            UiCommand::Generate => composer.generate().await,
            UiCommand::Refine => composer.refine().await,
        };
        tracing::debug!(?command, ?outcome, "Request finished");
        let _ = tx.send(AppEvent::RequestFinished(outcome));
    });
}
