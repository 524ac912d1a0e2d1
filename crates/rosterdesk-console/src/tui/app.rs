/*
[INPUT]:  Screen state machines, adapter client, inline editor state
[OUTPUT]: Mutable App consumed by rendering and key routing
[POS]:    TUI application state aggregate
[UPDATE]: When adding screens or editor behaviors
*/

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rosterdesk_adapter::{ConsoleClient, Role};
use tui_input::{Input, InputRequest};

use crate::accounts::{AccountsScreen, SidCell};
use crate::import::{AssignmentChoice, ClassroomChoice, ImportWizard};
use crate::tui::ui::select::SingleSelect;

/// Which screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Accounts,
    Import,
}

impl Screen {
    pub fn toggled(self) -> Self {
        match self {
            Screen::Accounts => Screen::Import,
            Screen::Import => Screen::Accounts,
        }
    }
}

/// Which wizard selector takes navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardFocus {
    Classroom,
    Assignment,
}

/// Inline SID editor attached to one student row
#[derive(Debug)]
pub struct SidEditor {
    pub row_index: usize,
    pub user_id: i64,
    /// Last known-good value, shown while the input is empty.
    pub placeholder: String,
    pub input: Input,
}

/// Main application state
pub struct App {
    pub client: ConsoleClient,
    pub user_id: i64,
    pub screen: Screen,
    pub accounts: AccountsScreen,
    pub wizard: ImportWizard,
    pub editor: Option<SidEditor>,
    pub wizard_focus: WizardFocus,
    pub classroom_select: SingleSelect<ClassroomChoice>,
    pub assignment_select: SingleSelect<AssignmentChoice>,
    reload_requested: bool,
}

impl App {
    pub fn new(client: ConsoleClient, user_id: i64, role_filter: Vec<Role>) -> Self {
        Self {
            client,
            user_id,
            screen: Screen::Accounts,
            accounts: AccountsScreen::new(role_filter),
            wizard: ImportWizard::new(),
            editor: None,
            wizard_focus: WizardFocus::Classroom,
            classroom_select: SingleSelect::new("Classroom", "No classrooms"),
            assignment_select: SingleSelect::new("Assignment", "No assignments"),
            reload_requested: false,
        }
    }

    /// Ask the runtime to re-fetch the accounts table. Key handlers never
    /// fetch inline; the runtime draws the loading indicator first.
    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    /// True exactly once per armed reload request.
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Rebuild selector options from wizard state, keeping confirmed
    /// selections marked.
    pub fn sync_wizard_selects(&mut self) {
        self.classroom_select
            .set_options(self.wizard.classroom_choices());
        if let Some(id) = self.wizard.selected_classroom() {
            if let Some(choice) = self
                .wizard
                .classroom_choices()
                .into_iter()
                .find(|choice| choice.id == id)
            {
                self.classroom_select.set_selected_value(&choice);
            }
        }

        self.assignment_select
            .set_options(self.wizard.assignment_choices());
        let selected = match self.wizard.selected_assignment() {
            Some(id) => self
                .wizard
                .assignment_choices()
                .into_iter()
                .find(|choice| choice.id() == Some(id)),
            None => Some(AssignmentChoice::None),
        };
        if let Some(choice) = selected {
            self.assignment_select.set_selected_value(&choice);
        }
    }

    /// Open the inline editor on the row under the cursor, student rows only.
    pub fn start_edit(&mut self) {
        let Some(row) = self.accounts.selected_row() else {
            return;
        };
        match self.accounts.sid_cell(row) {
            SidCell::Editable(_) => {
                self.editor = Some(SidEditor {
                    row_index: self.accounts.cursor(),
                    user_id: row.user_id,
                    placeholder: self.accounts.sid_cell(row).display().to_string(),
                    input: Input::default(),
                });
            }
            SidCell::Unmappable => {}
        }
    }

    /// Submit the editor value; the edit transition owns validation and
    /// revert semantics.
    pub async fn submit_edit(&mut self) {
        if let Some(editor) = self.editor.take() {
            self.accounts
                .save_sid(&self.client, editor.user_id, editor.input.value())
                .await;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Effective wizard focus; the students tab has no assignment selector.
    pub fn effective_wizard_focus(&self) -> WizardFocus {
        match self.wizard.tab {
            crate::import::ImportTab::Students => WizardFocus::Classroom,
            crate::import::ImportTab::Scores => self.wizard_focus,
        }
    }

    /// Periodic tick: notification decay.
    pub fn tick(&mut self) {
        self.accounts.notifications.tick();
        self.wizard.notifications.tick();
    }
}

/// Translate a key event into an editor input request.
pub fn handle_editor_key(editor: &mut SidEditor, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let request = match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char(ch) if !ctrl => Some(InputRequest::InsertChar(ch)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    };
    if let Some(request) = request {
        editor.input.handle(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn editor() -> SidEditor {
        SidEditor {
            row_index: 0,
            user_id: 9,
            placeholder: "<NULL>".to_string(),
            input: Input::default(),
        }
    }

    #[test]
    fn editor_collects_typed_characters() {
        let mut editor = editor();
        for ch in "new123".chars() {
            handle_editor_key(&mut editor, key(KeyCode::Char(ch)));
        }
        assert_eq!(editor.input.value(), "new123");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut editor = editor();
        handle_editor_key(&mut editor, key(KeyCode::Char('a')));
        handle_editor_key(&mut editor, key(KeyCode::Char('b')));
        handle_editor_key(&mut editor, key(KeyCode::Backspace));
        assert_eq!(editor.input.value(), "a");
    }

    #[test]
    fn ctrl_u_clears_the_line() {
        let mut editor = editor();
        for ch in "abc".chars() {
            handle_editor_key(&mut editor, key(KeyCode::Char(ch)));
        }
        let clear = KeyEvent {
            code: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_editor_key(&mut editor, clear);
        assert_eq!(editor.input.value(), "");
    }

    #[test]
    fn screen_toggle_round_trips() {
        assert_eq!(Screen::Accounts.toggled(), Screen::Import);
        assert_eq!(Screen::Import.toggled(), Screen::Accounts);
    }
}
