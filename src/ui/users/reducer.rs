//! Reducer for the user card list.

use std::cmp::Ordering;

use crate::config::RestorePlacement;
use crate::domain::listing_order;
use crate::ui::mvi::Reducer;

use super::intent::UserListIntent;
use super::state::UserListState;

/// Reducer for user list transitions.
///
/// Ids that are not in the expected collection leave the state untouched.
/// Every transition rebuilds the search results from the updated collections.
pub struct UserListReducer;

impl Reducer for UserListReducer {
    type State = UserListState;
    type Intent = UserListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let (mut active, mut removed, mut search_term) = state.into_parts();

        match intent {
            UserListIntent::Load { users } => {
                active = users
                    .into_iter()
                    .map(|mut user| {
                        user.is_removed = false;
                        user
                    })
                    .collect();
                removed.clear();
            }

            UserListIntent::Remove { id } => {
                if let Some(pos) = active.iter().position(|u| u.id == id) {
                    let mut user = active.remove(pos);
                    user.is_removed = true;
                    removed.push(user);
                }
            }

            UserListIntent::Restore { id, placement } => {
                if let Some(pos) = removed.iter().position(|u| u.id == id) {
                    let mut user = removed.remove(pos);
                    user.is_removed = false;
                    match placement {
                        RestorePlacement::Append => active.push(user),
                        RestorePlacement::Sorted => {
                            let at = active.partition_point(|other| {
                                listing_order(other, &user) != Ordering::Greater
                            });
                            active.insert(at, user);
                        }
                    }
                }
            }

            UserListIntent::Search { term } => search_term = term,
        }

        UserListState::with_collections(active, removed, search_term)
    }
}
