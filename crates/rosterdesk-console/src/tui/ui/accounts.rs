/*
[INPUT]:  Accounts screen rows, SID cache, and the optional inline editor
[OUTPUT]: Accounts table rendered into the ratatui frame
[POS]:    Accounts screen rendering
[UPDATE]: When table columns or the inline editor presentation change
*/

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::accounts::LoadState;
use crate::tui::app::App;
use crate::tui::ui::{border_style, header_style};

pub(in crate::tui) fn draw_accounts(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let screen = &app.accounts;

    let header = Row::new(vec!["ID", "Name", "Email", "Role", "SID", "Created"])
        .style(header_style());

    let editing_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<Row> = screen
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let sid_cell = match app.editor.as_ref().filter(|e| e.row_index == index) {
                Some(editor) => {
                    let value = if editor.input.value().is_empty() {
                        format!("{}▏", editor.placeholder)
                    } else {
                        format!("{}▏", editor.input.value())
                    };
                    Cell::from(value).style(editing_style)
                }
                None => Cell::from(screen.sid_cell(row).display().to_string()),
            };
            Row::new(vec![
                Cell::from(row.account_id.to_string()),
                Cell::from(row.name.clone()),
                Cell::from(row.email.clone()),
                Cell::from(row.role.label()),
                sid_cell,
                Cell::from(row.created_day.clone()),
            ])
        })
        .collect();

    let title = match screen.load_state() {
        LoadState::Failed => "Accounts (load failed)",
        _ => "Accounts",
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(20),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    )
    .row_highlight_style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !screen.rows().is_empty() {
        state.select(Some(screen.cursor()));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
