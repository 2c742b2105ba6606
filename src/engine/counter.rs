use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

/// Range a random increment is drawn from.
pub const RANDOM_STEP: RangeInclusive<u64> = 1..=10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error(
        "Unknown counter action '{}' (expected one of: {})",
        .action,
        CounterActionKind::NAMES.join(", ")
    )]
    InvalidAction { action: String },
}

/// Name of a counter action, without its payload.
///
/// This is what key bindings refer to. Parsing an unknown name fails with
/// [`CounterError::InvalidAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterActionKind {
    Increment,
    IncrementRandom,
    IncrementOdd,
    Decrement,
    Reset,
}

impl CounterActionKind {
    pub const NAMES: [&'static str; 5] = [
        "increment",
        "incrementRandom",
        "incrementOdd",
        "decrement",
        "reset",
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::IncrementRandom => "incrementRandom",
            Self::IncrementOdd => "incrementOdd",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
        }
    }
}

impl FromStr for CounterActionKind {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increment" => Ok(Self::Increment),
            "incrementRandom" => Ok(Self::IncrementRandom),
            "incrementOdd" => Ok(Self::IncrementOdd),
            "decrement" => Ok(Self::Decrement),
            "reset" => Ok(Self::Reset),
            other => Err(CounterError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CounterActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A counter operation requested by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    IncrementRandom,
    IncrementToNextOdd,
    Decrement { by: u64 },
    Reset,
}

impl CounterAction {
    /// Builds the action for `kind`, reading the decrement amount from the
    /// companion text field.
    pub fn from_kind(kind: CounterActionKind, decrement_input: &str) -> Self {
        match kind {
            CounterActionKind::Increment => Self::Increment,
            CounterActionKind::IncrementRandom => Self::IncrementRandom,
            CounterActionKind::IncrementOdd => Self::IncrementToNextOdd,
            CounterActionKind::Decrement => Self::Decrement {
                by: parse_decrement_amount(decrement_input),
            },
            CounterActionKind::Reset => Self::Reset,
        }
    }
}

/// Reads a decrement amount from free text.
///
/// Anything that is not a non-negative integer counts as zero.
pub fn parse_decrement_amount(input: &str) -> u64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u64>() {
        Ok(by) => by,
        Err(err) => {
            tracing::debug!(input = trimmed, error = %err, "Invalid decrement amount, using 0");
            0
        }
    }
}

/// Owns the counter state and the RNG used for random increments.
pub struct CounterEngine {
    state: CounterState,
    rng: StdRng,
}

impl CounterEngine {
    pub fn new(initial: u64) -> Self {
        Self {
            state: CounterState::new(initial),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic random increments, for tests and `--seed`.
    pub fn with_seed(initial: u64, seed: u64) -> Self {
        Self {
            state: CounterState::new(initial),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn count(&self) -> u64 {
        self.state.count
    }

    /// Applies `action` and returns the new count.
    pub fn dispatch(&mut self, action: CounterAction) -> u64 {
        let intent = match action {
            CounterAction::Increment => CounterIntent::Increment,
            CounterAction::IncrementRandom => CounterIntent::IncrementBy {
                amount: self.rng.random_range(RANDOM_STEP),
            },
            CounterAction::IncrementToNextOdd => CounterIntent::IncrementToNextOdd,
            CounterAction::Decrement { by } => CounterIntent::Decrement { by },
            CounterAction::Reset => CounterIntent::Reset,
        };
        tracing::debug!(?intent, from = self.state.count, "Counter dispatch");
        self.state = CounterReducer::reduce(self.state, intent);
        self.state.count
    }
}
