use crate::ui::theme::{ACCENT_PURPLE, GLOBAL_BORDER, TITLE_GOLD};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("✦ ", Style::default().fg(ACCENT_PURPLE)),
            Span::styled(
                "Daily Inspiration Generator",
                Style::default().fg(TITLE_GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ✦", Style::default().fg(ACCENT_PURPLE)),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
