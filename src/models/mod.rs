pub mod deck;
pub mod deck_set;
pub mod difficulty;
pub mod flashcard;
pub mod learning_card;
pub mod learning_session;
pub mod policy;
pub mod review_data;
pub mod scheduler;

pub use deck::Deck;
pub use deck_set::DeckSet;
pub use difficulty::Difficulty;
pub use flashcard::Flashcard;
pub use learning_card::LearningCard;
pub use learning_session::LearningSession;
pub use policy::SchedulingPolicy;
pub use review_data::{ReviewData, ReviewOutcome};
pub use scheduler::{ReviewScheduler, compute_next_review};
