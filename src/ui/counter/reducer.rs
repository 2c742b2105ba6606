//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = state.count;
        let next = match intent {
            CounterIntent::Increment => count.saturating_add(1),
            CounterIntent::IncrementBy { amount } => count.saturating_add(amount),
            CounterIntent::IncrementToNextOdd => {
                if count % 2 == 0 {
                    count.saturating_add(1)
                } else {
                    count.saturating_add(2)
                }
            }
            CounterIntent::Decrement { by } => count.saturating_sub(by),
            CounterIntent::Reset => 0,
        };
        CounterState::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(count: u64, intent: CounterIntent) -> u64 {
        CounterReducer::reduce(CounterState::new(count), intent).count
    }

    #[test]
    fn increment_adds_one() {
        assert_eq!(reduce(0, CounterIntent::Increment), 1);
        assert_eq!(reduce(41, CounterIntent::Increment), 42);
    }

    #[test]
    fn increment_by_adds_amount() {
        assert_eq!(reduce(3, CounterIntent::IncrementBy { amount: 7 }), 10);
    }

    #[test]
    fn next_odd_from_even() {
        assert_eq!(reduce(0, CounterIntent::IncrementToNextOdd), 1);
        assert_eq!(reduce(4, CounterIntent::IncrementToNextOdd), 5);
    }

    #[test]
    fn next_odd_from_odd_skips_ahead() {
        assert_eq!(reduce(5, CounterIntent::IncrementToNextOdd), 7);
        assert_eq!(reduce(1, CounterIntent::IncrementToNextOdd), 3);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        assert_eq!(reduce(3, CounterIntent::Decrement { by: 10 }), 0);
        assert_eq!(reduce(10, CounterIntent::Decrement { by: 4 }), 6);
        assert_eq!(reduce(0, CounterIntent::Decrement { by: 0 }), 0);
    }

    #[test]
    fn reset_returns_to_zero() {
        assert_eq!(reduce(99, CounterIntent::Reset), 0);
        assert_eq!(reduce(0, CounterIntent::Reset), 0);
    }

    #[test]
    fn increments_saturate_at_max() {
        assert_eq!(reduce(u64::MAX, CounterIntent::Increment), u64::MAX);
        assert_eq!(
            reduce(u64::MAX - 1, CounterIntent::IncrementBy { amount: 10 }),
            u64::MAX
        );
    }
}
