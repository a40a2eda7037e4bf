//! Model-View-Intent primitives.
//!
//! A screen is described by an immutable [`UiState`]; user input is turned
//! into [`Intent`] values; a [`Reducer`] folds intents into the next state.
//! Reducers are pure so they can be tested without a terminal.

/// Marker for values that describe something the user asked for.
pub trait Intent: std::fmt::Debug + Clone {}

/// Marker for renderable UI state.
pub trait UiState: std::fmt::Debug + Clone + Default {}

/// Pure state transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Apply a sequence of intents in order, starting from `state`.
pub fn fold<R: Reducer>(
    state: R::State,
    intents: impl IntoIterator<Item = R::Intent>,
) -> R::State {
    intents.into_iter().fold(state, R::reduce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter(i32);

    impl UiState for Counter {}

    #[derive(Debug, Clone)]
    enum Step {
        Up,
        Down,
    }

    impl Intent for Step {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = Step;

        fn reduce(state: Counter, intent: Step) -> Counter {
            match intent {
                Step::Up => Counter(state.0 + 1),
                Step::Down => Counter(state.0 - 1),
            }
        }
    }

    #[test]
    fn fold_applies_intents_in_order() {
        let state = fold::<CounterReducer>(Counter::default(), [Step::Up, Step::Up, Step::Down]);
        assert_eq!(state, Counter(1));
    }
}
