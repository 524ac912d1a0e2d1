/*
[INPUT]:  App state and a ratatui frame
[OUTPUT]: Full-screen console layout (tab bar, content, footer, overlays)
[POS]:    TUI rendering root and shared style helpers
[UPDATE]: When changing layout, palette, or hotkey hints
*/

mod accounts;
mod import;
pub mod select;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use crate::notify::{Notification, Severity};
use crate::tui::app::{App, Screen};

pub(super) fn draw_ui(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    draw_screen_tabs(frame, layout[0], app.screen);

    match app.screen {
        Screen::Accounts => accounts::draw_accounts(frame, layout[1], app),
        Screen::Import => import::draw_import(frame, layout[1], app),
    }

    draw_footer(frame, layout[2], app);

    if app.screen == Screen::Accounts && app.accounts.is_loading() {
        draw_loading_overlay(frame, area);
    }
}

fn draw_screen_tabs(frame: &mut ratatui::Frame, area: Rect, screen: Screen) {
    let titles = vec![Line::from("[1] Accounts"), Line::from("[2] Import")];
    let selected = match screen {
        Screen::Accounts => 0,
        Screen::Import => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let hints = match app.screen {
        Screen::Accounts if app.editor.is_some() => Line::from(vec![
            Span::styled("[Enter]", key_style),
            Span::raw(" Save  "),
            Span::styled("[Esc]", key_style),
            Span::raw(" Cancel"),
        ]),
        Screen::Accounts => Line::from(vec![
            Span::styled("[Up/Down]", key_style),
            Span::raw(" Select  "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Edit SID  "),
            Span::styled("[x]", key_style),
            Span::raw(" Unmap  "),
            Span::styled("[r]", key_style),
            Span::raw(" Reload  "),
            Span::styled("[1/2/Tab]", key_style),
            Span::raw(" Screens  "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit"),
        ]),
        Screen::Import => Line::from(vec![
            Span::styled("[s]", key_style),
            Span::raw(" Tab  "),
            Span::styled("[Left/Right]", key_style),
            Span::raw(" Focus  "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Confirm  "),
            Span::styled("[u]", key_style),
            Span::raw(" Upload  "),
            Span::styled("[r]", key_style),
            Span::raw(" Reload  "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit"),
        ]),
    };

    let notification = match app.screen {
        Screen::Accounts => app.accounts.notifications.current(),
        Screen::Import => app.wizard.notifications.current(),
    };
    let status = match notification {
        Some(notification) => Line::from(Span::styled(
            notification.message.clone(),
            severity_style(notification),
        )),
        None => Line::from(""),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let widget = Paragraph::new(Text::from(vec![hints, status]))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn draw_loading_overlay(frame: &mut ratatui::Frame, area: Rect) {
    let overlay = centered_rect(area, 40, 20);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());
    let widget = Paragraph::new("Fetching data from server ...")
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(ratatui::widgets::Clear, overlay);
    frame.render_widget(widget, overlay);
}

fn severity_style(notification: &Notification) -> Style {
    match notification.severity {
        Severity::Info => Style::default().fg(Color::Cyan),
        Severity::Success => Style::default().fg(Color::LightGreen),
        Severity::Error => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    }
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
