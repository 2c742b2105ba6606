use crate::ui::app::{App, Focus, Pane};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Esc => app.set_focus(Focus::List(Pane::Active)),
            KeyCode::Enter => app.set_focus(Focus::List(Pane::Results)),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(ch) => app.push_search_char(ch),
            _ => {}
        },
        Focus::Amount => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                app.set_focus(Focus::List(Pane::Active))
            }
            KeyCode::Backspace => app.pop_amount_char(),
            KeyCode::Char(ch) => app.push_amount_char(ch),
            _ => {}
        },
        Focus::List(_) => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Tab => app.set_focus(Focus::Amount),
        KeyCode::Left => app.cycle_pane(false),
        KeyCode::Right => app.cycle_pane(true),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('r') => app.restore_selected(),
        KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char(ch) => {
            if let Some(kind) = app.binding_for(ch) {
                let count = app.apply_counter(kind);
                tracing::debug!(action = %kind, count, "Counter updated");
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
