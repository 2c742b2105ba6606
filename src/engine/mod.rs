//! Stateful front doors for the view.
//!
//! Each engine owns one MVI state plus whatever effects its reducer must not
//! perform itself (random number generation). The view only reads state
//! through the engines and only changes it through their operations.

pub mod counter;
pub mod users;

pub use counter::{
    parse_decrement_amount, CounterAction, CounterActionKind, CounterEngine, CounterError,
    RANDOM_STEP,
};
pub use users::{UserListEngine, UserListError};
