use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::generator::render_generator_dialog;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT_PURPLE, HEADER_TEXT, POPUP_BORDER, TITLE_GOLD};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);

    frame.render_widget(Clear, body);
    frame.render_widget(page_body(), body);

    frame.render_widget(Footer::new().widget(footer, app.displayed_count()), footer);

    render_generator_dialog(frame, app.generator());
}

/// Static page content: subtitle, provider link, and the call-to-action.
fn page_body() -> Paragraph<'static> {
    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Looking for a splash of inspiration?",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(vec![
            Span::styled("Generate a random inspirational quote provided by ", dim),
            Span::styled("https://zenquotes.io", Style::default().fg(ACCENT_PURPLE)),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ ", Style::default().fg(POPUP_BORDER)),
            Span::styled(
                "Make a Quote",
                Style::default().fg(TITLE_GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ]", Style::default().fg(POPUP_BORDER)),
        ]),
        Line::from(Span::styled("press g or Enter", dim)),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}
