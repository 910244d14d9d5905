//! Reducer for the generator dialog.

use crate::config::RetriggerPolicy;
use crate::ui::mvi::Reducer;

use super::intent::GeneratorIntent;
use super::state::GeneratorDialogState;

/// Reducer for generator dialog state transitions.
pub struct GeneratorReducer;

impl Reducer for GeneratorReducer {
    type State = GeneratorDialogState;
    type Intent = GeneratorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GeneratorIntent::Activate { policy } => match (&state, policy) {
                // In-flight and ignore: the activation is a no-op.
                (GeneratorDialogState::Processing { .. }, RetriggerPolicy::Ignore) => state,
                // Everything else (idle, ready, failed, or restart while
                // processing) starts a fresh cycle.
                _ => GeneratorDialogState::Processing { animation_tick: 0 },
            },

            GeneratorIntent::AnimationTick => match state {
                GeneratorDialogState::Processing { animation_tick } => {
                    GeneratorDialogState::Processing {
                        animation_tick: animation_tick.wrapping_add(1),
                    }
                }
                other => other,
            },

            // Completion and failure only apply to an in-flight cycle; a
            // result that arrives after dismissal is discarded.
            GeneratorIntent::Completed { quote } => match state {
                GeneratorDialogState::Processing { .. } => GeneratorDialogState::Ready { quote },
                other => other,
            },

            GeneratorIntent::Error { message } => match state {
                GeneratorDialogState::Processing { .. } => {
                    GeneratorDialogState::Failed { error: message }
                }
                other => other,
            },

            GeneratorIntent::Dismiss => GeneratorDialogState::Hidden,
        }
    }
}
