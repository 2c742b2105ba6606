use crate::ui::app::{App, Focus};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = hints(app);
        let right = match app.notice() {
            Some(notice) => format!("{} │ v{} ", notice, VERSION),
            None => format!("v{} ", VERSION),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints(app: &App) -> String {
    match app.focus() {
        Focus::Search => " Type to search │ Enter: Results │ Esc: Back".to_string(),
        Focus::Amount => " Type decrement amount │ Enter/Esc: Back".to_string(),
        Focus::List(_) => {
            let counter: Vec<String> = app
                .bindings()
                .iter()
                .map(|(key, kind)| format!("{}: {}", key, kind))
                .collect();
            format!(
                " ←→ Column │ d: Remove │ r: Restore │ /: Search │ Tab: Amount │ {} │ q: Quit",
                counter.join(" │ ")
            )
        }
    }
}
