//! User card list feature module.
//!
//! Holds the active, removed and search-result collections.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Collections plus the derived search results
//! - `intent.rs` - Load, Remove, Restore, Search
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::UserListIntent;
pub use reducer::UserListReducer;
pub use state::{project_search, UserListState};
