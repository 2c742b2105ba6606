//! Intents for the user card list.

use crate::config::RestorePlacement;
use crate::domain::{ListedUser, UserId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UserListIntent {
    /// Replace the collections with freshly ingested users.
    /// The removed collection is emptied; the search term is kept.
    Load { users: Vec<ListedUser> },

    /// Move an active user to the removed collection.
    Remove { id: UserId },

    /// Move a removed user back to the active collection.
    Restore {
        id: UserId,
        placement: RestorePlacement,
    },

    /// Text in the search box changed.
    Search { term: String },
}

impl Intent for UserListIntent {}
