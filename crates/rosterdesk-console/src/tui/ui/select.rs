/*
[INPUT]:  Option list, focus flag, and navigation/confirmation key events
[OUTPUT]: Confirmed choice plus list rendering with cursor and selection marks
[POS]:    Single-choice selector used by the import wizard
[UPDATE]: When selector navigation or the confirmation marker changes
*/

use std::fmt::Display;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// List selector distinguishing the browsing cursor from the confirmed
/// choice: the cursor moves freely, the confirmed entry keeps its marker
/// until another entry is confirmed or the options change under it.
#[derive(Debug, Clone)]
pub struct SingleSelect<T> {
    title: String,
    empty_text: String,
    options: Vec<T>,
    cursor: usize,
    confirmed: Option<usize>,
}

impl<T> SingleSelect<T>
where
    T: Clone + Display,
{
    pub fn new(title: impl Into<String>, empty_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            empty_text: empty_text.into(),
            options: Vec::new(),
            cursor: 0,
            confirmed: None,
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Replace the option list. The cursor is clamped into the new list and
    /// a confirmation pointing past its end is dropped rather than silently
    /// landing on a different entry.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.cursor = self.cursor.min(self.options.len().saturating_sub(1));
        if self.confirmed.is_some_and(|index| index >= self.options.len()) {
            self.confirmed = None;
        }
    }

    /// Mark the entry equal to `value` as confirmed and park the cursor on it.
    pub fn set_selected_value(&mut self, value: &T)
    where
        T: PartialEq,
    {
        if let Some(index) = self.options.iter().position(|option| option == value) {
            self.cursor = index;
            self.confirmed = Some(index);
        }
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<T> {
        self.confirmed
            .and_then(|index| self.options.get(index))
            .cloned()
    }

    /// Returns the confirmed value on Enter, `None` for navigation keys.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<T> {
        if self.options.is_empty() {
            return None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(self.options.len() - 1);
                None
            }
            KeyCode::Enter => {
                self.confirmed = Some(self.cursor);
                self.options.get(self.cursor).cloned()
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let items: Vec<ListItem> = if self.options.is_empty() {
            vec![ListItem::new(Line::from(self.empty_text.as_str()))]
        } else {
            self.options
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let marker = if self.confirmed == Some(index) {
                        "● "
                    } else {
                        "  "
                    };
                    ListItem::new(Line::from(format!("{marker}{option}")))
                })
                .collect()
        };

        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Blue)
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if !self.options.is_empty() {
            state.select(Some(self.cursor));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }
}
