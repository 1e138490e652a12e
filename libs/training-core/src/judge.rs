//! Session judge: one card presentation, one verdict.
//!
//! A `TrainingSession` moves `AwaitingInput -> Evaluating -> Revealed`.
//! The first submit is judged and reported; any later submit for the same
//! presentation is ignored. Advancing to the next card means building a new
//! session (see `TrainingQueue`).

use crate::normalize::{highlight_sentence, normalize};
use crate::types::{AnswerAttempt, FlashCard, Verdict};

pub const POSITIVE_MESSAGE: &str = "Correct!";
pub const NEGATIVE_MESSAGE: &str = "Incorrect!";

/// UI capabilities the judge drives.
pub trait Presenter {
    fn reveal_sentence(&mut self, sentence: &str);
    fn reveal_audio(&mut self, audio_ref: &str);
    fn show_message(&mut self, text: &str, correctness: bool);
    fn focus_next(&mut self);
    fn focus_finish(&mut self);
}

/// Progress sink for verdicts. Must not block on the network.
pub trait Reporter {
    fn report(&self, verdict: &Verdict);
}

/// Judge state for the live card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Evaluating,
    Revealed,
}

/// What caused a submit. Both triggers are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Click,
    EnterKey,
}

/// Input events understood by the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Submit(Trigger),
    Judged,
}

/// Transition table. `None` means the event is ignored in that state.
pub fn transition(state: SessionState, event: SessionEvent) -> Option<SessionState> {
    use SessionEvent::*;
    use SessionState::*;

    match (state, event) {
        (AwaitingInput, Submit(_)) => Some(Evaluating),
        (Evaluating, Judged) => Some(Revealed),
        (Evaluating, Submit(_)) | (Revealed, _) | (AwaitingInput, Judged) => None,
    }
}

/// One presentation of one card.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    card: FlashCard,
    is_last: bool,
    state: SessionState,
    attempt: Option<AnswerAttempt>,
    submitted_by: Option<Trigger>,
}

impl TrainingSession {
    pub fn new(card: FlashCard, is_last: bool) -> Self {
        Self {
            card,
            is_last,
            state: SessionState::AwaitingInput,
            attempt: None,
            submitted_by: None,
        }
    }

    pub fn card(&self) -> &FlashCard {
        &self.card
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// The judged attempt, once one has been made.
    pub fn attempt(&self) -> Option<&AnswerAttempt> {
        self.attempt.as_ref()
    }

    pub fn submitted_by(&self) -> Option<Trigger> {
        self.submitted_by
    }

    /// Handle a submit from the learner.
    ///
    /// Returns the verdict when the submit was judged, `None` when it was
    /// ignored because this presentation already has one.
    pub fn submit<P, R>(
        &mut self,
        trigger: Trigger,
        raw_input: &str,
        presenter: &mut P,
        reporter: &R,
    ) -> Option<Verdict>
    where
        P: Presenter + ?Sized,
        R: Reporter + ?Sized,
    {
        self.state = transition(self.state, SessionEvent::Submit(trigger))?;
        self.submitted_by = Some(trigger);

        let correctness = is_correct(&self.card, raw_input);
        if correctness {
            if let Some(sentence) = self.card.sentence() {
                let marked = match self.card.reference_word() {
                    Some(word) => highlight_sentence(sentence, word),
                    None => sentence.to_string(),
                };
                presenter.reveal_sentence(&marked);
            }
            if let Some(audio) = self.card.audio() {
                presenter.reveal_audio(audio);
            }
            presenter.show_message(POSITIVE_MESSAGE, true);
            if self.is_last {
                presenter.focus_finish();
            } else {
                presenter.focus_next();
            }
        } else {
            presenter.show_message(NEGATIVE_MESSAGE, false);
        }

        let verdict = Verdict::new(&self.card, correctness);
        reporter.report(&verdict);

        self.attempt = Some(AnswerAttempt {
            card: self.card.clone(),
            raw_input: raw_input.to_string(),
        });
        if let Some(next) = transition(self.state, SessionEvent::Judged) {
            self.state = next;
        }

        Some(verdict)
    }
}

/// Correctness predicate. A card without an expected answer never matches.
pub fn is_correct(card: &FlashCard, raw_input: &str) -> bool {
    match card.answer() {
        Some(expected) => normalize(raw_input) == normalize(expected),
        None => false,
    }
}
