/*
[INPUT]:  Adapter client, operator identity, and terminal key events
[OUTPUT]: Ratatui run loop driving both console screens
[POS]:    TUI runtime loop
[UPDATE]: When changing tick cadence, input handling, or startup loads
*/

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{Event as CrosstermEvent, KeyEventKind, poll, read};
use rosterdesk_adapter::{ConsoleClient, Role};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::app::App;
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::draw_ui;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run(client: ConsoleClient, user_id: i64, role_filter: Vec<Role>) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = App::new(client, user_id, role_filter);

    reload_accounts(&mut terminal, &mut app).await?;
    app.wizard.load_classrooms(&app.client, app.user_id).await;
    app.sync_wizard_selects();

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    if key.kind == KeyEventKind::Press
                        && handle_key_event(&mut app, key).await
                    {
                        should_quit = true;
                    }
                }
            }
        }

        // Key handlers only arm reloads; the loading frame is drawn here so
        // the indicator is visible for every fetch, not just the first.
        if app.take_reload_request() {
            reload_accounts(&mut terminal, &mut app).await?;
        }

        terminal.draw(|frame| draw_ui(frame, &app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

/// Full table fetch with the blocking indicator: mark the screen loading,
/// draw that frame, then await the fetch.
async fn reload_accounts(terminal: &mut TerminalGuard, app: &mut App) -> Result<()> {
    app.accounts.begin_load();
    terminal.draw(|frame| draw_ui(frame, app))?;
    app.accounts.finish_load(&app.client).await;
    Ok(())
}
