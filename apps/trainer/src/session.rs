//! Drives a training run over line-based input.

use std::io::Write;

use chrono::{DateTime, Duration, Utc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use training_core::{Reporter, TrainingQueue, Trigger};

use crate::error::Result;
use crate::presenter::ConsolePresenter;

/// Totals for one training run.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub presented: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SessionSummary {
    fn start() -> Self {
        let now = Utc::now();
        Self {
            presented: 0,
            correct: 0,
            incorrect: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }
}

/// Run every card in `queue`.
///
/// Each input line is an Enter-key submit while a card awaits input, and an
/// advance once it has been revealed. End of input ends the run early.
pub async fn run_training<I, W, R>(
    mut queue: TrainingQueue,
    input: I,
    presenter: &mut ConsolePresenter<W>,
    reporter: &R,
) -> Result<SessionSummary>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: Reporter + ?Sized,
{
    let mut lines = input.lines();
    let mut summary = SessionSummary::start();
    let total = queue.len();

    while let Some(mut session) = queue.present_next() {
        presenter.show_prompt(session.card(), summary.presented + 1, total);

        let Some(answer) = lines.next_line().await? else {
            tracing::info!("input closed before the card was answered");
            break;
        };

        if let Some(verdict) = session.submit(Trigger::EnterKey, &answer, presenter, reporter) {
            summary.presented += 1;
            if verdict.correctness {
                summary.correct += 1;
            } else {
                summary.incorrect += 1;
            }
        }

        // The revealed card stays up until the learner advances.
        if lines.next_line().await?.is_none() {
            break;
        }
    }

    summary.finished_at = Utc::now();
    tracing::info!(
        presented = summary.presented,
        correct = summary.correct,
        incorrect = summary.incorrect,
        "training run finished"
    );
    Ok(summary)
}
