use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{Config, RetriggerPolicy};
use crate::ui::generator::{GeneratorDialogState, GeneratorIntent, GeneratorReducer};
use crate::ui::mvi::Reducer;
use crate::worker::{WorkerCommand, WorkerCommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Counter value on display. Starts at the initialized default and
    /// only changes when the backend confirms a value.
    displayed_count: u64,
    /// State of the generator dialog (MVI pattern).
    generator: GeneratorDialogState,
    /// Sequence number of the latest activation. Results tagged with an
    /// older number are stale and dropped.
    generation_seq: u64,
    retrigger: RetriggerPolicy,
    commands: WorkerCommandSender,
}

impl App {
    pub fn new(config: &Config, commands: WorkerCommandSender) -> Self {
        Self {
            should_quit: false,
            displayed_count: 0,
            generator: GeneratorDialogState::default(),
            generation_seq: 0,
            retrigger: config.generator.retrigger,
            commands,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn displayed_count(&self) -> u64 {
        self.displayed_count
    }

    pub fn generator(&self) -> &GeneratorDialogState {
        &self.generator
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.request_quit();
            return;
        }
        match key.code {
            KeyCode::Char('g') | KeyCode::Enter => self.activate_generator(),
            KeyCode::Esc if self.generator.is_visible() => self.dismiss_generator(),
            KeyCode::Char('q') if !self.generator.is_visible() => self.request_quit(),
            _ => {}
        }
    }

    /// User activated the "Make a Quote" control.
    ///
    /// Opens the modal in the processing state synchronously and asks the
    /// worker to invoke the remote generate operation. While a cycle is
    /// already in flight the configured retrigger policy applies.
    pub fn activate_generator(&mut self) {
        if self.generator.is_processing() && self.retrigger == RetriggerPolicy::Ignore {
            return;
        }

        self.generation_seq += 1;
        dispatch_mvi!(
            self,
            generator,
            GeneratorReducer,
            GeneratorIntent::Activate {
                policy: self.retrigger,
            }
        );
        // A failed enqueue means no cycle is in flight; surface it so the
        // dialog does not spin forever waiting for a result.
        if let Err(err) = self.commands.try_send(WorkerCommand::GenerateQuote {
            seq: self.generation_seq,
        }) {
            tracing::warn!(
                seq = self.generation_seq,
                error = %err,
                "could not start generation cycle"
            );
            dispatch_mvi!(
                self,
                generator,
                GeneratorReducer,
                GeneratorIntent::Error {
                    message: "could not start generation, try again".to_string(),
                }
            );
        }
    }

    /// Dismiss the modal. Safe and synchronous from any state; an
    /// in-flight result is discarded when it eventually arrives.
    pub fn dismiss_generator(&mut self) {
        dispatch_mvi!(self, generator, GeneratorReducer, GeneratorIntent::Dismiss);
    }

    pub fn on_tick(&mut self) {
        if self.generator.is_processing() {
            dispatch_mvi!(
                self,
                generator,
                GeneratorReducer,
                GeneratorIntent::AnimationTick
            );
        }
    }

    pub fn on_counter_loaded(&mut self, count: u64) {
        self.displayed_count = count;
    }

    /// Apply a completed generation: quote text and the updated counter
    /// land in the same update, so the view never shows one without the
    /// other.
    pub fn on_quote_generated(&mut self, seq: u64, quote: String, count: u64) {
        if seq != self.generation_seq || !self.generator.is_processing() {
            tracing::debug!(
                seq,
                current = self.generation_seq,
                "dropping stale quote result"
            );
            return;
        }
        dispatch_mvi!(
            self,
            generator,
            GeneratorReducer,
            GeneratorIntent::Completed { quote }
        );
        self.displayed_count = count;
    }

    pub fn on_quote_failed(&mut self, seq: u64, message: String) {
        if seq != self.generation_seq || !self.generator.is_processing() {
            tracing::debug!(
                seq,
                current = self.generation_seq,
                "dropping stale quote failure"
            );
            return;
        }
        dispatch_mvi!(
            self,
            generator,
            GeneratorReducer,
            GeneratorIntent::Error { message }
        );
    }
}
