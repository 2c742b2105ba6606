//! Intents for the counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,

    /// Add a fixed amount. Random increments arrive here with the roll
    /// already drawn, keeping the reducer pure.
    IncrementBy { amount: u64 },

    /// Jump to the next odd number strictly above the current count.
    IncrementToNextOdd,

    /// Subtract, clamping at zero.
    Decrement { by: u64 },

    Reset,
}

impl Intent for CounterIntent {}
