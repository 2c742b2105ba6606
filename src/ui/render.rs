use crate::domain::ListedUser;
use crate::ui::app::{App, Focus, Pane};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{columns, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, AVATAR_ACTIVE, AVATAR_REMOVED, AVATAR_RESULT, FOCUS_BORDER, GLOBAL_BORDER,
    HEADER_TEXT, MUTED_TEXT,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app), header);

    for (pane, area) in Pane::ALL.into_iter().zip(columns(body)) {
        let focused = app.focus() == Focus::List(pane);
        let cards = app.cards(pane);
        let items: Vec<ListItem<'static>> = cards
            .iter()
            .map(|user| card_item(user, avatar_color(pane)))
            .collect();

        let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" {} ({}) ", pane.title(), cards.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

        let mut state = ListState::default();
        if focused {
            state.select(app.selected_index(pane));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);
}

fn avatar_color(pane: Pane) -> Color {
    match pane {
        Pane::Active => AVATAR_ACTIVE,
        Pane::Removed => AVATAR_REMOVED,
        Pane::Results => AVATAR_RESULT,
    }
}

/// Two-line card: avatar initial and username, then company and age.
fn card_item(user: &ListedUser, avatar: Color) -> ListItem<'static> {
    let avatar_style = Style::default()
        .fg(Color::Black)
        .bg(avatar)
        .add_modifier(Modifier::BOLD);
    let name_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let detail_style = Style::default().fg(MUTED_TEXT);

    let action = if user.is_removed { "r: restore" } else { "d: remove" };
    let title = Line::from(vec![
        Span::styled(format!(" {} ", user.initial()), avatar_style),
        Span::raw(" "),
        Span::styled(user.username.clone(), name_style),
        Span::styled(format!("  [{}]", action), detail_style),
    ]);
    let subtitle = Line::from(Span::styled(
        format!("    {} · age {} · #{}", user.company_name, user.age, user.id),
        detail_style,
    ));

    ListItem::new(vec![title, subtitle, Line::from("")])
}
