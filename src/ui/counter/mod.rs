//! Counter feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The non-negative count
//! - `intent.rs` - Resolved counter steps (random amounts already drawn)
//! - `reducer.rs` - Saturating arithmetic, never below zero

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
