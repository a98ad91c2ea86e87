//! Learning session management for spaced repetition practice.
//! Handles multi-round flashcard review on top of the review scheduler.

use super::{Deck, Difficulty, Flashcard, LearningCard, ReviewOutcome, ReviewScheduler};
use crate::clock::Clock;
use crate::error::Result;
use tracing::{info, warn};

/// Manages a learning session with multiple review rounds.
/// Cards rated `Again` are repeated in subsequent rounds.
///
/// Cards are copies of the deck's cards; results go back to the deck by term,
/// which is unique within a deck.
pub struct LearningSession<C: Clock> {
    pub deck_name: String,
    pub all_cards: Vec<LearningCard>,
    pub current_round_cards: Vec<usize>,
    pub current_index: usize,
    pub show_definition: bool,
    pub round_number: usize,
    scheduler: ReviewScheduler,
    clock: C,
}

impl<C: Clock> LearningSession<C> {
    /// Creates a new learning session from the deck's cards that are due now.
    pub fn new_from_due_cards(deck: &Deck, scheduler: ReviewScheduler, clock: C) -> Self {
        let now = clock.now();
        let learning_cards: Vec<_> = deck
            .due_flashcards(now)
            .into_iter()
            .map(|fc| LearningCard::new(fc.clone()))
            .collect();

        let indices: Vec<usize> = (0..learning_cards.len()).collect();
        info!(deck = %deck.name, due = indices.len(), "starting learning session");

        Self {
            deck_name: deck.name.clone(),
            all_cards: learning_cards,
            current_round_cards: indices,
            current_index: 0,
            show_definition: false,
            round_number: 1,
            scheduler,
            clock,
        }
    }

    pub fn current_card(&self) -> Option<&LearningCard> {
        self.current_round_cards
            .get(self.current_index)
            .and_then(|&idx| self.all_cards.get(idx))
    }

    pub fn toggle_definition(&mut self) {
        self.show_definition = !self.show_definition;
    }

    pub fn next_card(&mut self) {
        if self.current_index + 1 < self.current_round_cards.len() {
            self.current_index += 1;
            self.show_definition = false;
        } else {
            self.start_next_round();
        }
    }

    /// Starts a new round with the cards that were forgotten.
    /// If none remain, the session is complete.
    fn start_next_round(&mut self) {
        let failed_indices: Vec<usize> = self
            .current_round_cards
            .iter()
            .copied()
            .filter(|&idx| {
                self.all_cards
                    .get(idx)
                    .map(|card| !card.is_learned)
                    .unwrap_or(false)
            })
            .collect();

        if !failed_indices.is_empty() {
            self.current_round_cards = failed_indices;
            self.current_index = 0;
            self.show_definition = false;
            self.round_number += 1;
            info!(
                round = self.round_number,
                cards = self.current_round_cards.len(),
                "starting retry round"
            );
        }
    }

    /// Grades the current card.
    /// Every card except one rated `Again` counts as learned for this session.
    ///
    /// Only the first grade of a card in a session reschedules it; retries in
    /// later rounds just update session progress. Returns the new schedule,
    /// or `Ok(None)` for a retry or when there is no current card.
    pub fn grade_current_card(&mut self, difficulty: Difficulty) -> Result<Option<ReviewOutcome>> {
        let Some(&actual_idx) = self.current_round_cards.get(self.current_index) else {
            return Ok(None);
        };
        let Some(card) = self.all_cards.get_mut(actual_idx) else {
            return Ok(None);
        };

        // One instant for both the schedule and the last-reviewed stamp
        let now = self.clock.now();
        let outcome = if card.rescheduled {
            None
        } else {
            let outcome = card
                .flashcard
                .record_review(&self.scheduler, difficulty, now)?;
            card.rescheduled = true;
            Some(outcome)
        };

        if difficulty.is_recalled() {
            card.mark_as_learned(now);
        } else {
            card.is_learned = false;
        }

        Ok(outcome)
    }

    pub fn learned_count(&self) -> usize {
        self.current_round_cards
            .iter()
            .filter(|&&idx| {
                self.all_cards
                    .get(idx)
                    .map(|card| card.is_learned)
                    .unwrap_or(false)
            })
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.current_round_cards.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.learned_count()
    }

    /// Returns true when the current round is empty or fully learned.
    pub fn is_completed(&self) -> bool {
        self.current_round_cards.is_empty() || self.learned_count() == self.total_count()
    }

    pub fn phase_message(&self) -> String {
        if self.round_number == 1 {
            format!("Round {}: {} cards", self.round_number, self.total_count())
        } else {
            format!(
                "Round {} (Review): {} cards to retry",
                self.round_number,
                self.total_count()
            )
        }
    }

    /// Cards that were graded in this session, with their new schedule.
    pub fn into_reviewed_cards(self) -> Vec<Flashcard> {
        self.all_cards
            .into_iter()
            .filter(|card| card.rescheduled)
            .map(|card| card.flashcard)
            .collect()
    }

    /// Copies the new schedules into the matching cards of `deck`.
    ///
    /// Only review data is written, so edits made to the deck meanwhile are
    /// kept. Cards no longer in the deck are skipped. Returns how many cards
    /// were updated.
    pub fn apply_to(self, deck: &mut Deck) -> usize {
        let mut applied = 0;
        for card in self.into_reviewed_cards() {
            match deck.flashcards.iter_mut().find(|fc| fc.term == card.term) {
                Some(slot) => {
                    slot.review = card.review;
                    applied += 1;
                }
                None => {
                    warn!(term = %card.term, deck = %deck.name, "reviewed card no longer in deck")
                }
            }
        }
        applied
    }
}
