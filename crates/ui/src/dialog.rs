use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use photo_importer_models::{Dialog, DialogKind};

use crate::centered_rect;

pub fn draw(f: &mut Frame, dialog: &Dialog) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let color = match dialog.kind {
        DialogKind::Info => Color::Green,
        DialogKind::Warning => Color::Yellow,
        DialogKind::Error => Color::Red,
    };

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(dialog.message.as_str(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", dialog.title))
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Rgb(20, 20, 30))),
        );

    f.render_widget(popup, area);
}
