//! State for the user card list.

use crate::domain::{ListedUser, UserId};
use crate::ui::mvi::UiState;

/// Active, removed and search-result collections of listed users.
///
/// Fields are private: the only way to build a state is
/// [`UserListState::with_collections`], which recomputes the search results
/// from the other collections. Search results therefore never drift from
/// list membership.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserListState {
    active: Vec<ListedUser>,
    removed: Vec<ListedUser>,
    search_term: String,
    search_results: Vec<ListedUser>,
}

impl UiState for UserListState {}

impl UserListState {
    pub(crate) fn with_collections(
        active: Vec<ListedUser>,
        removed: Vec<ListedUser>,
        search_term: String,
    ) -> Self {
        let search_results = project_search(&active, &removed, &search_term);
        Self {
            active,
            removed,
            search_term,
            search_results,
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<ListedUser>, Vec<ListedUser>, String) {
        (self.active, self.removed, self.search_term)
    }

    pub fn active(&self) -> &[ListedUser] {
        &self.active
    }

    pub fn removed(&self) -> &[ListedUser] {
        &self.removed
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_results(&self) -> &[ListedUser] {
        &self.search_results
    }

    pub fn is_active(&self, id: &UserId) -> bool {
        self.active.iter().any(|u| u.id == *id)
    }

    pub fn is_removed(&self, id: &UserId) -> bool {
        self.removed.iter().any(|u| u.id == *id)
    }
}

/// Active matches first (in active order), then removed matches.
///
/// An empty term matches nothing.
pub fn project_search(
    active: &[ListedUser],
    removed: &[ListedUser],
    term: &str,
) -> Vec<ListedUser> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    active
        .iter()
        .chain(removed.iter())
        .filter(|user| user.username_contains(&needle))
        .cloned()
        .collect()
}
