//! Dialog rendering for the generator modal.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK, TITLE_GOLD};

use super::state::GeneratorDialogState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Width of the generator dialog.
const DIALOG_WIDTH: u16 = 52;

/// Height of the generator dialog (varies by state).
fn dialog_height(state: &GeneratorDialogState) -> u16 {
    match state {
        GeneratorDialogState::Hidden => 0,
        GeneratorDialogState::Processing { .. } => 5,
        GeneratorDialogState::Ready { .. } => 9,
        GeneratorDialogState::Failed { .. } => 7,
    }
}

/// Render the generator dialog overlay on top of the page.
pub fn render_generator_dialog(frame: &mut Frame, state: &GeneratorDialogState) {
    if !state.is_visible() {
        return;
    }

    let height = dialog_height(state);
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Make a Quote ", Style::default().fg(TITLE_GOLD)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state {
        GeneratorDialogState::Hidden => {}

        GeneratorDialogState::Processing { animation_tick } => {
            render_processing(frame, inner, *animation_tick);
        }

        GeneratorDialogState::Ready { quote } => {
            render_ready(frame, inner, quote);
        }

        GeneratorDialogState::Failed { error } => {
            render_failed(frame, inner, error);
        }
    }
}

fn render_processing(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Generating your quote...", Style::default().fg(HEADER_TEXT)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_ready(frame: &mut Frame, area: Rect, quote: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("“{}”", quote),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "g/Enter: Another one   Esc: Close",
            Style::default().fg(POPUP_BORDER),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_failed(frame: &mut Frame, area: Rect, error: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Error: ", Style::default().fg(STATUS_ERROR)),
            Span::styled(truncate_error(error, 38), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  g/Enter: Retry   Esc: Close",
            Style::default().fg(POPUP_BORDER),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Truncate error message to fit in the dialog.
fn truncate_error(error: &str, max_len: usize) -> String {
    if error.chars().count() <= max_len {
        error.to_string()
    } else {
        let truncated: String = error.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
