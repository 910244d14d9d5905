//! Intents for the generator dialog.

use crate::config::RetriggerPolicy;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the generator dialog.
#[derive(Debug, Clone)]
pub enum GeneratorIntent {
    /// User activated the "Make a Quote" control. The policy decides what
    /// happens when a generation is already in flight.
    Activate { policy: RetriggerPolicy },

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// The generation call completed with quote text.
    Completed { quote: String },

    /// The generation call failed.
    Error { message: String },

    /// User dismissed the modal. Always valid, from any state.
    Dismiss,
}

impl Intent for GeneratorIntent {}
