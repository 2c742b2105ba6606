use crate::ui::app::{App, Focus};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const CARET: &str = "▏";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title, search box, decrement amount box and the current count.
    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = text_style.add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("usercards", title_style),
            Span::styled("  │  ", separator_style),
        ];
        spans.extend(input_box(
            "Search",
            app.search_input(),
            app.focus() == Focus::Search,
        ));
        spans.push(Span::styled("  │  ", separator_style));
        spans.extend(input_box(
            "Amount",
            app.amount_input(),
            app.focus() == Focus::Amount,
        ));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(format!("Count: {}", app.count()), title_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn input_box(label: &'static str, value: &str, focused: bool) -> Vec<Span<'static>> {
    let label_style = Style::default().fg(MUTED_TEXT);
    let value_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let mut spans = vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(value.to_string(), value_style),
    ];
    if focused {
        spans.push(Span::styled(CARET, value_style));
    }
    spans
}
