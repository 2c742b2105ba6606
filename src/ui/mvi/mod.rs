//! Model-View-Intent (MVI) primitives shared by the card list and the counter.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what the view renders
//! - **Intent**: A key press or text edit forwarded by the view
//! - **Reducer**: Pure function that turns (State, Intent) into the next State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
