//! Core types for training sessions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TrainingError;

/// Opaque word identifier, echoed back to the backend unchanged.
///
/// The backend hands out integer keys, so both JSON strings and numbers are
/// accepted; the id is always written back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// Translation direction a card tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    NativeToStudying,
    StudyingToNative,
}

impl Direction {
    /// Wire name of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NativeToStudying => "native_to_studying",
            Self::StudyingToNative => "studying_to_native",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native_to_studying" => Ok(Self::NativeToStudying),
            "studying_to_native" => Ok(Self::StudyingToNative),
            other => Err(TrainingError::UnknownDirection(other.to_string())),
        }
    }
}

/// A single flashcard as supplied by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCard {
    pub id: WordId,
    pub direction: Direction,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_ref: Option<String>,
}

impl FlashCard {
    /// Expected answer, or `None` when it is missing or blank.
    pub fn answer(&self) -> Option<&str> {
        self.expected_answer
            .as_deref()
            .filter(|answer| !answer.trim().is_empty())
    }

    /// Example sentence, if the card has a non-blank one.
    pub fn sentence(&self) -> Option<&str> {
        self.example_sentence
            .as_deref()
            .filter(|sentence| !sentence.trim().is_empty())
    }

    /// Audio reference, if the card has a non-blank one.
    pub fn audio(&self) -> Option<&str> {
        self.audio_ref
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
    }

    /// Word to highlight inside the example sentence.
    ///
    /// The sentence is written in the studying language, so that is the
    /// answer side for native-to-studying cards and the prompt otherwise.
    pub fn reference_word(&self) -> Option<&str> {
        match self.direction {
            Direction::NativeToStudying => self.answer(),
            Direction::StudyingToNative => Some(self.prompt.as_str()),
        }
    }
}

/// One submission by the learner.
#[derive(Debug, Clone)]
pub struct AnswerAttempt {
    pub card: FlashCard,
    pub raw_input: String,
}

/// Outcome of one attempt, reported to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub id: WordId,
    pub direction: Direction,
    pub correctness: bool,
    #[serde(skip)]
    pub judged_at: DateTime<Utc>,
}

impl Verdict {
    pub fn new(card: &FlashCard, correctness: bool) -> Self {
        Self {
            id: card.id.clone(),
            direction: card.direction,
            correctness,
            judged_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_from_json_with_numeric_id() {
        let card: FlashCard = serde_json::from_str(
            r#"{"id": 42, "direction": "studying_to_native", "prompt": "cat", "expected_answer": "кот"}"#,
        )
        .unwrap();

        assert_eq!(card.id, WordId::new("42"));
        assert_eq!(card.direction, Direction::StudyingToNative);
        assert_eq!(card.answer(), Some("кот"));
        assert_eq!(card.sentence(), None);
        assert_eq!(card.audio(), None);
    }

    #[test]
    fn test_blank_fields_treated_as_missing() {
        let card = FlashCard {
            id: WordId::new("1"),
            direction: Direction::NativeToStudying,
            prompt: "стол".to_string(),
            expected_answer: Some("   ".to_string()),
            example_sentence: Some(String::new()),
            audio_ref: Some(" ".to_string()),
        };

        assert_eq!(card.answer(), None);
        assert_eq!(card.sentence(), None);
        assert_eq!(card.audio(), None);
    }

    #[test]
    fn test_reference_word_follows_direction() {
        let mut card = FlashCard {
            id: WordId::new("1"),
            direction: Direction::NativeToStudying,
            prompt: "стол".to_string(),
            expected_answer: Some("the table".to_string()),
            example_sentence: None,
            audio_ref: None,
        };
        assert_eq!(card.reference_word(), Some("the table"));

        card.direction = Direction::StudyingToNative;
        card.prompt = "the table".to_string();
        card.expected_answer = Some("стол".to_string());
        assert_eq!(card.reference_word(), Some("the table"));
    }

    #[test]
    fn test_direction_round_trip_names() {
        assert_eq!("native_to_studying".parse::<Direction>().unwrap(), Direction::NativeToStudying);
        assert_eq!(Direction::StudyingToNative.to_string(), "studying_to_native");
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_verdict_wire_shape() {
        let card = FlashCard {
            id: WordId::new("7"),
            direction: Direction::NativeToStudying,
            prompt: "стол".to_string(),
            expected_answer: Some("table".to_string()),
            example_sentence: None,
            audio_ref: None,
        };
        let verdict = Verdict::new(&card, true);

        assert_eq!(
            serde_json::to_value(&verdict).unwrap(),
            serde_json::json!({"id": "7", "direction": "native_to_studying", "correctness": true})
        );
    }
}
