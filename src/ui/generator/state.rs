//! State for the generator modal dialog.

use crate::ui::mvi::UiState;

/// State of the generator dialog.
///
/// Each variant encodes one combination of the three underlying fields:
/// `Hidden` is closed / not processing / no quote, `Processing` is open
/// with the spinner running, `Ready` is open with the quote text, and
/// `Failed` is open after an error with processing cleared so the modal
/// never spins forever.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeneratorDialogState {
    /// Dialog is not visible.
    #[default]
    Hidden,

    /// A generation call is in flight.
    Processing {
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// Quote text arrived and is on display.
    Ready { quote: String },

    /// The generation call failed; the user may retry manually.
    Failed { error: String },
}

impl UiState for GeneratorDialogState {}

impl GeneratorDialogState {
    /// Check if the dialog should be visible.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Check if a generation cycle is in flight.
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing { .. })
    }

    /// Get the quote text, once available.
    pub fn quote(&self) -> Option<&str> {
        match self {
            Self::Ready { quote } => Some(quote),
            _ => None,
        }
    }

    /// Get the current error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
