/*
[INPUT]:  Crossterm key events and App state
[OUTPUT]: Screen transitions and backend operations per keypress
[POS]:    TUI key routing
[UPDATE]: When hotkeys or screen flows change
*/

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Screen, WizardFocus, handle_editor_key};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if app.editor.is_some() {
        handle_editor_mode(app, key).await;
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('1') => {
            app.screen = Screen::Accounts;
            return false;
        }
        KeyCode::Char('2') => {
            app.screen = Screen::Import;
            return false;
        }
        KeyCode::Tab => {
            app.screen = app.screen.toggled();
            return false;
        }
        _ => {}
    }

    match app.screen {
        Screen::Accounts => handle_accounts_key(app, key).await,
        Screen::Import => handle_import_key(app, key).await,
    }
    false
}

async fn handle_editor_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.submit_edit().await,
        _ => {
            if let Some(editor) = app.editor.as_mut() {
                handle_editor_key(editor, key);
            }
        }
    }
}

async fn handle_accounts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.accounts.previous_row(),
        KeyCode::Down | KeyCode::Char('j') => app.accounts.next_row(),
        KeyCode::Enter => app.start_edit(),
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Char('x') => {
            app.accounts.unmap_selected(&app.client).await;
            // A confirmed unmap is reconciled by one full re-fetch.
            if app.accounts.take_pending_refresh() {
                app.request_reload();
            }
        }
        _ => {}
    }
}

async fn handle_import_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') => {
            app.wizard.toggle_tab();
            app.wizard_focus = WizardFocus::Classroom;
        }
        KeyCode::Left => app.wizard_focus = WizardFocus::Classroom,
        KeyCode::Right => app.wizard_focus = WizardFocus::Assignment,
        KeyCode::Char('u') => app.wizard.request_import(),
        KeyCode::Char('r') => {
            app.wizard.load_classrooms(&app.client, app.user_id).await;
            app.sync_wizard_selects();
        }
        _ => match app.effective_wizard_focus() {
            WizardFocus::Classroom => {
                if let Some(choice) = app.classroom_select.handle_key(key) {
                    app.wizard
                        .choose_classroom(&app.client, Some(choice.id))
                        .await;
                    app.sync_wizard_selects();
                }
            }
            WizardFocus::Assignment => {
                if let Some(choice) = app.assignment_select.handle_key(key) {
                    app.wizard.select_assignment(choice.id());
                    app.sync_wizard_selects();
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use rosterdesk_adapter::{ClientConfig, ConsoleClient, Role};

    use crate::accounts::LoadState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        // No request may ever reach this address; handlers only arm state.
        let client =
            ConsoleClient::with_config_and_base_url(ClientConfig::default(), "http://127.0.0.1:9")
                .expect("test client");
        App::new(client, 9, vec![Role::Student])
    }

    #[tokio::test]
    async fn refresh_key_arms_a_deferred_reload() {
        let mut app = app();

        let quit = handle_key_event(&mut app, key(KeyCode::Char('r'))).await;

        assert!(!quit);
        assert!(app.take_reload_request());
        // The handler must not fetch; the runtime owns the loading sequence.
        assert_eq!(app.accounts.load_state(), LoadState::Idle);
    }

    #[tokio::test]
    async fn reload_request_is_one_shot() {
        let mut app = app();
        app.request_reload();

        assert!(app.take_reload_request());
        assert!(!app.take_reload_request());
    }

    #[tokio::test]
    async fn unmap_on_an_empty_table_arms_nothing() {
        let mut app = app();

        handle_key_event(&mut app, key(KeyCode::Char('x'))).await;

        assert!(!app.take_reload_request());
    }
}
