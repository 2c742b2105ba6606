use std::mem;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::RestorePlacement;
use crate::domain::{ingest, ListedUser, RawUser, UserId};
use crate::ui::mvi::Reducer;
use crate::ui::users::{UserListIntent, UserListReducer, UserListState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserListError {
    #[error("No active user with id '{id}'")]
    NotActive { id: UserId },

    #[error("No removed user with id '{id}'")]
    NotRemoved { id: UserId },
}

/// Owns the user list state and the RNG used for id generation.
///
/// `remove` and `restore` report unknown ids as errors and leave the state
/// untouched. Callers that want the lenient behavior can ignore the result.
pub struct UserListEngine {
    state: UserListState,
    rng: StdRng,
    placement: RestorePlacement,
}

impl UserListEngine {
    pub fn new(placement: RestorePlacement) -> Self {
        Self {
            state: UserListState::default(),
            rng: StdRng::from_os_rng(),
            placement,
        }
    }

    /// Deterministic id generation, for tests and `--seed`.
    pub fn with_seed(placement: RestorePlacement, seed: u64) -> Self {
        Self {
            state: UserListState::default(),
            rng: StdRng::seed_from_u64(seed),
            placement,
        }
    }

    /// Ingests `raw` and replaces all collections with the result.
    ///
    /// Prior remove/restore history is discarded. The search term is kept.
    pub fn initialize(&mut self, raw: &[RawUser]) {
        let users = ingest(raw, &mut self.rng);
        tracing::info!(
            feed = raw.len(),
            listed = users.len(),
            filtered = raw.len() - users.len(),
            "Ingested user feed"
        );
        self.dispatch(UserListIntent::Load { users });
    }

    pub fn remove(&mut self, id: &UserId) -> Result<(), UserListError> {
        if !self.state.is_active(id) {
            return Err(UserListError::NotActive { id: id.clone() });
        }
        self.dispatch(UserListIntent::Remove { id: id.clone() });
        Ok(())
    }

    pub fn restore(&mut self, id: &UserId) -> Result<(), UserListError> {
        if !self.state.is_removed(id) {
            return Err(UserListError::NotRemoved { id: id.clone() });
        }
        self.dispatch(UserListIntent::Restore {
            id: id.clone(),
            placement: self.placement,
        });
        Ok(())
    }

    pub fn search(&mut self, term: &str) {
        self.dispatch(UserListIntent::Search {
            term: term.to_string(),
        });
    }

    pub fn state(&self) -> &UserListState {
        &self.state
    }

    pub fn active(&self) -> &[ListedUser] {
        self.state.active()
    }

    pub fn removed(&self) -> &[ListedUser] {
        self.state.removed()
    }

    pub fn search_results(&self) -> &[ListedUser] {
        self.state.search_results()
    }

    pub fn search_term(&self) -> &str {
        self.state.search_term()
    }

    fn dispatch(&mut self, intent: UserListIntent) {
        tracing::debug!(intent = intent_name(&intent), "User list dispatch");
        self.state = UserListReducer::reduce(mem::take(&mut self.state), intent);
    }
}

fn intent_name(intent: &UserListIntent) -> &'static str {
    match intent {
        UserListIntent::Load { .. } => "load",
        UserListIntent::Remove { .. } => "remove",
        UserListIntent::Restore { .. } => "restore",
        UserListIntent::Search { .. } => "search",
    }
}
