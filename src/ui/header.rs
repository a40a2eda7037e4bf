use crate::error::AppError;
use crate::hotspot::Hotspot;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const KEY_HINTS: &str = " j/k move · e edit · d delete · q quit";

/// Hotspot summary shown above the history.
pub fn header_widget(hotspot: &Hotspot) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let status = match &hotspot.resolution {
        Some(resolution) => format!("{} ({})", hotspot.status, resolution),
        None => hotspot.status.clone(),
    };
    let status_color = if hotspot.status == "REVIEWED" {
        STATUS_OK
    } else {
        ACCENT
    };
    let line = Line::from(vec![
        Span::styled(" ", text_style),
        Span::styled(status, Style::default().fg(status_color).add_modifier(Modifier::BOLD)),
        Span::styled(" │ ", text_style.add_modifier(Modifier::DIM)),
        Span::styled(hotspot.message.clone(), text_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .title(format!(" {} ", hotspot.key))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Key hints, or the latest unacknowledged error.
pub fn footer_widget(error: Option<&AppError>) -> Paragraph<'static> {
    let line = match error {
        Some(error) => Line::from(vec![
            Span::styled(
                format!(" ✗ {}", error.message),
                Style::default().fg(STATUS_ERROR),
            ),
            Span::styled(
                "  [x] dismiss",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        ]),
        None => Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    };
    Paragraph::new(line)
}
