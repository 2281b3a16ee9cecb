//! The single FocusDots screen
//!
//! Header with the app title, the countdown dial, the dot collection for
//! today's completed sessions, and a footer with key hints (or a transient
//! status banner when a save failed).

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::timer::{Phase, SessionTimer};

use super::theme::Theme;

/// Render the main view
#[allow(clippy::too_many_arguments)]
pub fn render_main_view(
    frame: &mut Frame,
    area: Rect,
    timer: &SessionTimer,
    todays_count: usize,
    caption: &str,
    dots_per_row: u16,
    theme: &Theme,
    status_message: Option<&str>,
) {
    // Paint the background for the active palette
    let background = Block::default().style(Style::default().bg(theme.background).fg(theme.text));
    frame.render_widget(background, area);

    // Layout: header, timer dial, dot collection, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Timer dial
            Constraint::Min(4),    // Dot collection
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], theme);
    render_timer_dial(frame, chunks[1], timer, theme);
    render_dot_collection(frame, chunks[2], todays_count, caption, dots_per_row, theme);
    render_footer(frame, chunks[3], timer.phase(), theme, status_message);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let header = Paragraph::new("FocusDots")
        .style(theme.header_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, area);
}

/// Human-readable phase label under the countdown
fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Running => "Focusing",
        Phase::Paused => "Paused",
        Phase::Idle => "Ready",
    }
}

fn render_timer_dial(frame: &mut Frame, area: Rect, timer: &SessionTimer, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            timer.format_remaining(),
            theme.timer_style(timer.phase()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            phase_label(timer.phase()),
            theme.muted_style(),
        )),
    ];

    let dial = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(dial, area);
}

fn render_dot_collection(
    frame: &mut Frame,
    area: Rect,
    todays_count: usize,
    caption: &str,
    dots_per_row: u16,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title("Today");

    if todays_count == 0 {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(caption, theme.muted_style())),
            Line::from(Span::styled(
                "Complete sessions to collect dots",
                theme.muted_style(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(caption.to_string(), theme.muted_style())),
        Line::from(""),
    ];

    for (row_start, row_len) in dot_rows(todays_count, dots_per_row) {
        let spans: Vec<Span> = (row_start..row_start + row_len)
            .map(|i| Span::styled("● ", Style::default().fg(theme.dot_color(i))))
            .collect();
        lines.push(Line::from(spans));
    }

    let dots = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(dots, area);
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    phase: Phase,
    theme: &Theme,
    status_message: Option<&str>,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));

    // A status banner (save failure) replaces the key hints until it expires
    let footer = if let Some(message) = status_message {
        Paragraph::new(message).style(theme.warning_style()).block(block)
    } else {
        let toggle_hint = match phase {
            Phase::Idle => "Space: start",
            Phase::Running => "Space: pause",
            Phase::Paused => "Space: resume",
        };
        let hints = format!("{} | r: reset | d: theme | q: quit", toggle_hint);
        Paragraph::new(hints).style(theme.muted_style()).block(block)
    };

    frame.render_widget(footer, area);
}

/// Break a dot count into rows: (starting dot index, dots in row)
///
/// The last row holds the remainder. A zero wrap width is treated as 1.
pub fn dot_rows(count: usize, per_row: u16) -> Vec<(usize, usize)> {
    let per_row = per_row.max(1) as usize;
    let mut rows = Vec::new();
    let mut start = 0;
    while start < count {
        let len = (count - start).min(per_row);
        rows.push((start, len));
        start += len;
    }
    rows
}
