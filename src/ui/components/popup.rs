use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Reusable centered popup dialog with an accented title and bordered frame.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    footer: Option<&'a str>,
    fixed_width: Option<u16>,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            footer: None,
            fixed_width: None,
        }
    }

    pub fn footer(mut self, text: &'a str) -> Self {
        self.footer = Some(text);
        self
    }

    /// Fix the outer width; longer lines wrap.
    pub fn fixed_width(mut self, w: u16) -> Self {
        self.fixed_width = Some(w);
        self
    }

    /// Render the dialog and return the occupied `Rect`.
    pub fn render(mut self, frame: &mut Frame, area: Rect) -> Rect {
        if let Some(text) = self.footer {
            self.lines.push(Line::from(""));
            self.lines.push(
                Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT))).centered(),
            );
        }

        let popup_width = match self.fixed_width {
            Some(w) => w,
            None => {
                let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
                content_width.saturating_add(4)
            }
        };
        let inner_width = usize::from(popup_width.saturating_sub(2).max(1));
        let rows: usize = self
            .lines
            .iter()
            .map(|line| line.width().max(1).div_ceil(inner_width))
            .sum();
        let popup_height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
        let rect = centered_rect_by_size(area, popup_width, popup_height);

        frame.render_widget(Clear, rect);
        let title = Line::from(vec![
            Span::styled("─", Style::default().fg(POPUP_BORDER)),
            Span::styled(format!(" {} ", self.title), Style::default().fg(ACCENT)),
        ]);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, rect);

        rect
    }
}
