use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use photo_importer_app::App;

mod dialog;
mod form;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form and progress
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    form::draw(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    if let Some(dialog) = &app.dialog {
        dialog::draw(f, dialog);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let (state_text, state_color) = if app.is_importing() {
        ("Importing...", Color::Cyan)
    } else {
        ("Idle", Color::Green)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Photo Importer",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(state_text, Style::default().fg(state_color)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
    );

    f.render_widget(header, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let status = Paragraph::new(app.status.as_str())
        .style(Style::default().fg(Color::Rgb(200, 200, 200)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
        );

    let shortcuts = if app.dialog.is_some() {
        "Enter/Esc: Dismiss"
    } else if app.is_importing() {
        "Ctrl+C: Quit"
    } else {
        "Tab: Switch | Enter: Import | Esc: Quit"
    };

    let hints = Paragraph::new(shortcuts)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
        );

    f.render_widget(status, chunks[0]);
    f.render_widget(hints, chunks[1]);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
