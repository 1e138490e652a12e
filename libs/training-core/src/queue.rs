//! Ordered card queue for one training run.

use std::collections::VecDeque;

use crate::error::{Result, TrainingError};
use crate::judge::TrainingSession;
use crate::types::FlashCard;

/// Cards still to be presented, in page order.
#[derive(Debug, Clone)]
pub struct TrainingQueue {
    cards: VecDeque<FlashCard>,
    total: usize,
}

impl TrainingQueue {
    /// Build a queue. An empty deck is rejected.
    pub fn new(cards: Vec<FlashCard>) -> Result<Self> {
        if cards.is_empty() {
            return Err(TrainingError::EmptyQueue);
        }
        Ok(Self {
            total: cards.len(),
            cards: cards.into(),
        })
    }

    /// Start a fresh presentation of the next card.
    pub fn present_next(&mut self) -> Option<TrainingSession> {
        let card = self.cards.pop_front()?;
        Some(TrainingSession::new(card, self.cards.is_empty()))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Number of cards the queue started with.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
