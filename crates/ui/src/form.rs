use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use photo_importer_app::App;
use photo_importer_models::EditingField;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Source
            Constraint::Length(3), // Destination
            Constraint::Length(3), // Gauge
            Constraint::Length(1), // Timing
            Constraint::Min(0),
        ])
        .split(area);

    draw_path_field(
        f,
        chunks[0],
        " Source Folder (Camera) ",
        &app.source_input,
        app.editing_field == EditingField::SourceFolder && !app.is_importing(),
    );
    draw_path_field(
        f,
        chunks[1],
        " Destination Folder ",
        &app.destination_input,
        app.editing_field == EditingField::DestinationFolder && !app.is_importing(),
    );
    draw_gauge(f, chunks[2], app);
    draw_timing(f, chunks[3], app);
}

fn draw_path_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Rgb(80, 80, 80))
    };

    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(field, area);
}

fn draw_gauge(f: &mut Frame, area: Rect, app: &App) {
    let label = if app.progress_max > 0 {
        format!("{} / {}", app.progress_value, app.progress_max)
    } else {
        String::new()
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(40, 40, 40)))
        .ratio(app.progress_ratio())
        .label(label)
        .use_unicode(true);

    f.render_widget(gauge, area);
}

fn draw_timing(f: &mut Frame, area: Rect, app: &App) {
    let Some(job) = app.job.as_ref().filter(|_| app.is_importing()) else {
        return;
    };

    let text = match job.eta() {
        Some(eta) => format!(
            "Elapsed: {} | ETA: {}",
            format_duration(job.elapsed()),
            format_duration(eta)
        ),
        None => format!("Elapsed: {}", format_duration(job.elapsed())),
    };

    let timing = Paragraph::new(Span::styled(text, Style::default().fg(Color::Green))).alignment(Alignment::Center);
    f.render_widget(timing, area);
}

fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
