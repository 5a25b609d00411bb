//! Typing-effect state machine.
//!
//! DESIGN
//! ======
//! The engine is a pure state machine: [`TypingEngine::advance`] applies one
//! transition and reports how long the caller should wait before the next
//! tick. The hero component drives it from a self-rescheduling timeout whose
//! handle it owns, so the loop is cancellable on unmount. Keeping the timer
//! outside means the whole cycle is testable by calling `advance` in a loop.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay between ticks while typing characters.
pub const TYPE_STEP_MS: u32 = 100;
/// Delay between ticks while deleting characters.
pub const DELETE_STEP_MS: u32 = 50;
/// Pause after a phrase has been fully typed.
pub const HOLD_MS: u32 = 2000;
/// Pause after a phrase has been fully deleted, before the next one.
pub const REST_MS: u32 = 500;

/// Phase of the typing loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    /// Growing the rendered prefix one character per tick.
    Typing,
    /// Phrase fully typed; the next tick performs the first deletion.
    Holding,
    /// Shrinking the rendered prefix one character per tick.
    Deleting,
    /// Phrase fully deleted and index advanced; waiting before typing.
    Resting,
}

/// Cyclic typing/deleting engine over a fixed phrase list.
#[derive(Clone, Debug)]
pub struct TypingEngine {
    phrases: Vec<String>,
    index: usize,
    cursor: usize,
    phase: TypingPhase,
}

impl TypingEngine {
    /// Returns `None` for an empty phrase list; the effect must not run.
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, index: 0, cursor: 0, phase: TypingPhase::Typing })
    }

    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Currently rendered prefix of the current phrase.
    #[must_use]
    pub fn rendered(&self) -> String {
        self.phrases[self.index].chars().take(self.cursor).collect()
    }

    fn current_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    /// Remove one character; on reaching zero advance the phrase index
    /// and rest, otherwise keep deleting.
    fn delete_one(&mut self) -> u32 {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        if self.cursor == 0 {
            self.index = (self.index + 1) % self.phrases.len();
            self.phase = TypingPhase::Resting;
            REST_MS
        } else {
            self.phase = TypingPhase::Deleting;
            DELETE_STEP_MS
        }
    }

    /// Apply one transition and return the delay until the next tick.
    ///
    /// The phrase index advances (mod N) only at the moment the cursor
    /// returns to zero at the end of a deleting phase.
    pub fn advance(&mut self) -> u32 {
        let len = self.current_len();
        match self.phase {
            TypingPhase::Typing => {
                if self.cursor < len {
                    self.cursor += 1;
                }
                if self.cursor == len {
                    self.phase = TypingPhase::Holding;
                    HOLD_MS
                } else {
                    TYPE_STEP_MS
                }
            }
            // The hold expiry deletes the first character itself, so the
            // visible text changes on the tick that ends the pause.
            TypingPhase::Holding | TypingPhase::Deleting => self.delete_one(),
            TypingPhase::Resting => {
                self.phase = TypingPhase::Typing;
                // Type the first character as part of leaving the rest
                // phase so a tick always changes something visible.
                if self.current_len() > 0 {
                    self.cursor = 1;
                    if self.cursor == self.current_len() {
                        self.phase = TypingPhase::Holding;
                        return HOLD_MS;
                    }
                } else {
                    self.phase = TypingPhase::Holding;
                    return HOLD_MS;
                }
                TYPE_STEP_MS
            }
        }
    }
}
