//! Terminal presenter.

use std::io::Write;

use training_core::{FlashCard, Presenter};

use crate::session::SessionSummary;

/// Renders the training flow as plain text.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Show the card prompt. `position` is 1-based.
    pub fn show_prompt(&mut self, card: &FlashCard, position: usize, total: usize) {
        self.line(format_args!("\n[{position}/{total}] {}", card.prompt));
        self.write(format_args!("> "));
    }

    pub fn show_summary(&mut self, summary: &SessionSummary) {
        self.line(format_args!(
            "\nSession finished: {} of {} correct ({}s)",
            summary.correct,
            summary.presented,
            summary.elapsed().num_seconds()
        ));
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to console");
        }
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = write!(self.out, "{args}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to console");
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn reveal_sentence(&mut self, sentence: &str) {
        self.line(format_args!("  {sentence}"));
    }

    fn reveal_audio(&mut self, audio_ref: &str) {
        self.line(format_args!("  ♪ {audio_ref}"));
    }

    fn show_message(&mut self, text: &str, correctness: bool) {
        let mark = if correctness { '✓' } else { '✗' };
        self.line(format_args!("{mark} {text}"));
    }

    fn focus_next(&mut self) {
        self.line(format_args!("Press Enter for the next card"));
    }

    fn focus_finish(&mut self) {
        self.line(format_args!("Press Enter to finish"));
    }
}
