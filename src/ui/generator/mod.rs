//! Generator workflow feature module.
//!
//! Implements the modal dialog that drives the "Make a Quote" workflow:
//! open with a spinner, show the quote when the backend answers, show
//! the error and allow a manual retry when it doesn't.
//!
//! Uses the MVI pattern:
//! - `state.rs` - Dialog state enum
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_generator_dialog;
pub use intent::GeneratorIntent;
pub use reducer::GeneratorReducer;
pub use state::GeneratorDialogState;
