//! Training session engine for vocabulary flashcards.
//!
//! Provides:
//! - Answer normalization and example-sentence highlighting
//! - The session judge state machine (one card presentation, one verdict)
//! - Presenter / Reporter capability traits for the UI and backend sync
//! - Shared types (FlashCard, Direction, Verdict, etc.)

pub mod error;
pub mod judge;
pub mod normalize;
pub mod queue;
pub mod types;

pub use error::{Result, TrainingError};
pub use judge::{
    is_correct, transition, Presenter, Reporter, SessionEvent, SessionState, TrainingSession,
    Trigger, NEGATIVE_MESSAGE, POSITIVE_MESSAGE,
};
pub use normalize::{highlight_sentence, normalize, strip_leading_particle};
pub use queue::TrainingQueue;
pub use types::{AnswerAttempt, Direction, FlashCard, Verdict, WordId};
