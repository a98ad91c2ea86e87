//! Deck is a set of flashcards
use super::Flashcard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub flashcards: Vec<Flashcard>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            name: "My Deck".to_string(),
            flashcards: Vec::new(),
        }
    }
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flashcards: Vec::new(),
        }
    }

    pub fn due_flashcards(&self, now: DateTime<Utc>) -> Vec<&Flashcard> {
        self.flashcards.iter().filter(|card| card.is_due(now)).collect()
    }

    pub fn due_count(&self, now: DateTime<Utc>) -> usize {
        self.flashcards.iter().filter(|card| card.is_due(now)).count()
    }
}
