use crate::ui::mvi::UiState;

/// The counter shown in the header.
///
/// Unsigned, so the count can never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}
