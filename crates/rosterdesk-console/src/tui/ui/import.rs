/*
[INPUT]:  Import wizard tab state and the cascading selectors
[OUTPUT]: Import screen rendered into the ratatui frame
[POS]:    Import wizard rendering
[UPDATE]: When the wizard gains the actual file upload surface
*/

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::import::ImportTab;
use crate::tui::app::{App, WizardFocus};
use crate::tui::ui::border_style;

pub(in crate::tui) fn draw_import(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    draw_wizard_tabs(frame, layout[0], app.wizard.tab);

    let focus = app.effective_wizard_focus();
    match app.wizard.tab {
        ImportTab::Students => {
            app.classroom_select.render(frame, layout[1], true);
        }
        ImportTab::Scores => {
            let selects = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(layout[1]);
            app.classroom_select
                .render(frame, selects[0], focus == WizardFocus::Classroom);
            app.assignment_select
                .render(frame, selects[1], focus == WizardFocus::Assignment);
        }
    }

    draw_selection_summary(frame, layout[2], app);
}

fn draw_wizard_tabs(frame: &mut ratatui::Frame, area: Rect, tab: ImportTab) {
    let titles = vec![
        Line::from(ImportTab::Students.title()),
        Line::from(ImportTab::Scores.title()),
    ];
    let selected = match tab {
        ImportTab::Students => 0,
        ImportTab::Scores => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Import"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_selection_summary(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let classroom = app
        .classroom_select
        .selected()
        .map(|choice| choice.name)
        .unwrap_or_else(|| "-".to_string());
    let summary = match app.wizard.tab {
        ImportTab::Students => format!("Classroom: {classroom}"),
        ImportTab::Scores => {
            let assignment = app
                .assignment_select
                .selected()
                .map(|choice| choice.to_string())
                .unwrap_or_else(|| "None".to_string());
            format!("Classroom: {classroom}  Assignment: {assignment}")
        }
    };
    let widget = Paragraph::new(summary)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Selection"),
        )
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
