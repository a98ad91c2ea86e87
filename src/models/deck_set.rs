//! Container for all available decks
use super::{Deck, Flashcard};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Default)]
pub struct DeckSet {
    pub decks: Vec<Deck>,
}

impl DeckSet {
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.name == name)
    }

    pub fn deck_mut(&mut self, name: &str) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.name == name)
    }

    /// Cards due at `now` across all decks, or only in `deck_name` when given.
    ///
    /// Never-reviewed cards come first, then the rest ordered by next review
    /// date (oldest first).
    pub fn due_flashcards(&self, deck_name: Option<&str>, now: DateTime<Utc>) -> Vec<&Flashcard> {
        let mut due: Vec<&Flashcard> = self
            .decks
            .iter()
            .filter(|deck| deck_name.is_none_or(|name| deck.name == name))
            .flat_map(|deck| deck.flashcards.iter())
            .filter(|card| card.is_due(now))
            .collect();

        // None sorts before Some
        due.sort_by_key(|card| card.review.next_review_date);
        due
    }
}
