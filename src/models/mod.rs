//! Data models for the Open Trivia DB API.
//!
//! - [`Category`] - an entry of the category list
//! - [`Question`] - a single trivia question
//! - [`Difficulty`] / [`QuestionType`] - question attributes
//! - [`CategoryListResponse`] / [`QuestionListResponse`] - raw payloads

mod category;
mod question;

pub use category::{Category, CategoryListResponse};
pub use question::{Difficulty, Question, QuestionListResponse, QuestionType};
