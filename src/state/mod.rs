//! Dashboard state: the data store and the views derived from it.

pub mod derived;
pub mod store;

pub use derived::{
    category_distribution, category_navigation, difficulty_distribution, sample_questions,
    unique_question_categories, visible_questions, Bucket, CategoryFilter, ALL_CATEGORIES,
    SAMPLE_SIZE,
};
pub use store::{LoadOutcome, LoadTicket, TriviaStore, DEFAULT_AMOUNT, MAX_AMOUNT};
