pub mod clock;
pub mod error;
pub mod models;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use error::{Result, SchedulerError};
pub use models::{
    Deck, DeckSet, Difficulty, Flashcard, LearningCard, LearningSession, ReviewData,
    ReviewOutcome, ReviewScheduler, SchedulingPolicy, compute_next_review,
};
