use crate::domain::ListedUser;
use crate::engine::{CounterAction, CounterActionKind, CounterEngine, UserListEngine};

/// How many ticks a status notice stays on screen.
const NOTICE_TICKS: u8 = 12;

/// One of the three card columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Active,
    Removed,
    Results,
}

impl Pane {
    pub const ALL: [Pane; 3] = [Pane::Active, Pane::Removed, Pane::Results];

    pub fn title(self) -> &'static str {
        match self {
            Pane::Active => "Users",
            Pane::Removed => "Removed",
            Pane::Results => "Search results",
        }
    }

    fn index(self) -> usize {
        match self {
            Pane::Active => 0,
            Pane::Removed => 1,
            Pane::Results => 2,
        }
    }

    fn next(self) -> Self {
        match self {
            Pane::Active => Pane::Removed,
            Pane::Removed => Pane::Results,
            Pane::Results => Pane::Active,
        }
    }

    fn prev(self) -> Self {
        match self {
            Pane::Active => Pane::Results,
            Pane::Removed => Pane::Active,
            Pane::Results => Pane::Removed,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List(Pane),
    /// Typing into the search box.
    Search,
    /// Typing into the decrement amount box.
    Amount,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    users: UserListEngine,
    counter: CounterEngine,
    bindings: Vec<(char, CounterActionKind)>,
    search_input: String,
    amount_input: String,
    selection: [usize; 3],
    notice: Option<(String, u8)>,
}

impl App {
    pub fn new(
        users: UserListEngine,
        counter: CounterEngine,
        bindings: Vec<(char, CounterActionKind)>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Focus::List(Pane::Active),
            users,
            counter,
            bindings,
            search_input: String::new(),
            amount_input: String::new(),
            selection: [0; 3],
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn users(&self) -> &UserListEngine {
        &self.users
    }

    pub fn cards(&self, pane: Pane) -> &[ListedUser] {
        match pane {
            Pane::Active => self.users.active(),
            Pane::Removed => self.users.removed(),
            Pane::Results => self.users.search_results(),
        }
    }

    /// Selected row in `pane`, clamped to the current list length.
    pub fn selected_index(&self, pane: Pane) -> Option<usize> {
        let len = self.cards(pane).len();
        if len == 0 {
            None
        } else {
            Some(self.selection[pane.index()].min(len - 1))
        }
    }

    pub fn selected_card(&self) -> Option<&ListedUser> {
        let Focus::List(pane) = self.focus else {
            return None;
        };
        self.selected_index(pane)
            .and_then(|index| self.cards(pane).get(index))
    }

    pub fn move_selection(&mut self, delta: isize) {
        let Focus::List(pane) = self.focus else {
            return;
        };
        let len = self.cards(pane).len();
        if len == 0 {
            return;
        }
        let current = self.selected_index(pane).unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.selection[pane.index()] = next;
    }

    pub fn cycle_pane(&mut self, forward: bool) {
        if let Focus::List(pane) = self.focus {
            self.focus = Focus::List(if forward { pane.next() } else { pane.prev() });
        }
    }

    /// Removes the selected card if it is active.
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_card().map(|card| card.id.clone()) else {
            return;
        };
        match self.users.remove(&id) {
            Ok(()) => self.set_notice(format!("Removed {}", id)),
            Err(err) => {
                tracing::warn!(error = %err, "Remove ignored");
                self.set_notice(err.to_string());
            }
        }
    }

    /// Restores the selected card if it is removed.
    pub fn restore_selected(&mut self) {
        let Some(id) = self.selected_card().map(|card| card.id.clone()) else {
            return;
        };
        match self.users.restore(&id) {
            Ok(()) => self.set_notice(format!("Restored {}", id)),
            Err(err) => {
                tracing::warn!(error = %err, "Restore ignored");
                self.set_notice(err.to_string());
            }
        }
    }

    /// Removes an active card or restores a removed one.
    pub fn toggle_selected(&mut self) {
        match self.selected_card().map(|card| card.is_removed) {
            Some(true) => self.restore_selected(),
            Some(false) => self.remove_selected(),
            None => {}
        }
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
        self.users.search(&self.search_input);
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.users.search(&self.search_input);
        }
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn push_amount_char(&mut self, ch: char) {
        self.amount_input.push(ch);
    }

    pub fn pop_amount_char(&mut self) {
        self.amount_input.pop();
    }

    pub fn binding_for(&self, ch: char) -> Option<CounterActionKind> {
        self.bindings
            .iter()
            .find(|(key, _)| *key == ch)
            .map(|(_, kind)| *kind)
    }

    pub fn bindings(&self) -> &[(char, CounterActionKind)] {
        &self.bindings
    }

    /// Runs a counter action, reading the decrement amount from its box.
    pub fn apply_counter(&mut self, kind: CounterActionKind) -> u64 {
        let action = CounterAction::from_kind(kind, &self.amount_input);
        self.counter.dispatch(action)
    }

    pub fn count(&self) -> u64 {
        self.counter.count()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn on_tick(&mut self) {
        if let Some((_, ticks)) = self.notice.as_mut() {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.notice = None;
            }
        }
    }

    fn set_notice(&mut self, text: String) {
        self.notice = Some((text, NOTICE_TICKS));
    }
}
