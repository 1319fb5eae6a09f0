//! Trivia question model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decode::decode;

/// Question difficulty. The order of [`Difficulty::ALL`] is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Position in [`Difficulty::ALL`].
    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Four answers, one correct
    Multiple,
    /// True / False
    Boolean,
    /// Any type this client does not know about
    #[serde(other)]
    Other,
}

/// A single trivia question.
///
/// Questions carry no identity; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Copy of this question with every textual field entity-decoded.
    pub fn decoded(self) -> Self {
        Self {
            category: decode(&self.category),
            question_type: self.question_type,
            difficulty: self.difficulty,
            question: decode(&self.question),
            correct_answer: decode(&self.correct_answer),
            incorrect_answers: self.incorrect_answers.iter().map(|a| decode(a)).collect(),
        }
    }
}

/// Body of `GET /api.php?amount=n`.
///
/// `results` stays raw until `response_code` has been checked, so an error
/// payload never fails on the shape of its results.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionListResponse {
    /// 0 on success, an API error code otherwise
    pub response_code: i64,
    #[serde(default)]
    pub results: serde_json::Value,
}

impl QuestionListResponse {
    /// Deserialize the results. A missing list is empty.
    pub fn questions(self) -> Result<Vec<Question>, serde_json::Error> {
        if self.results.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "hard",
                "category": "Science &amp; Nature",
                "question": "What is the chemical symbol for &quot;gold&quot;?",
                "correct_answer": "Au",
                "incorrect_answers": ["Ag", "Gd", "G&amp;d"]
            },
            {
                "type": "boolean",
                "difficulty": "easy",
                "category": "General Knowledge",
                "question": "The sky is blue.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            }
        ]
    }"#;

    fn sample_questions() -> Vec<Question> {
        let parsed: QuestionListResponse = serde_json::from_str(SAMPLE).unwrap();
        parsed.questions().unwrap()
    }

    #[test]
    fn test_parse_question_list() {
        let parsed: QuestionListResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(parsed.response_code, 0);

        let questions = parsed.questions().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].difficulty, Difficulty::Hard);
        assert_eq!(questions[0].question_type, QuestionType::Multiple);
        assert_eq!(questions[1].question_type, QuestionType::Boolean);
    }

    #[test]
    fn test_error_payload_without_results() {
        let parsed: QuestionListResponse =
            serde_json::from_str(r#"{"response_code": 5}"#).unwrap();
        assert_eq!(parsed.response_code, 5);
        assert!(parsed.questions().unwrap().is_empty());
    }

    #[test]
    fn test_error_payload_with_malformed_results_still_parses() {
        let parsed: QuestionListResponse =
            serde_json::from_str(r#"{"response_code":1,"results":[{"bogus":1}]}"#).unwrap();
        assert_eq!(parsed.response_code, 1);
        assert!(parsed.questions().is_err());
    }

    #[test]
    fn test_unknown_type_maps_to_other() {
        let json = r#"{"type":"open","difficulty":"medium","category":"c","question":"q","correct_answer":"a","incorrect_answers":[]}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.question_type, QuestionType::Other);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let json = r#"{"type":"multiple","difficulty":"insane","category":"c","question":"q","correct_answer":"a","incorrect_answers":[]}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn test_decoded_decodes_every_text_field() {
        let question = sample_questions()[0].clone().decoded();

        assert_eq!(question.category, "Science & Nature");
        assert_eq!(question.question, "What is the chemical symbol for \"gold\"?");
        assert_eq!(question.correct_answer, "Au");
        assert_eq!(question.incorrect_answers, vec!["Ag", "Gd", "G&d"]);
        assert_eq!(question.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_order_and_display() {
        let labels: Vec<String> = Difficulty::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(labels, vec!["easy", "medium", "hard"]);
    }

    #[test]
    fn test_index_matches_display_order() {
        for (position, difficulty) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(difficulty.index(), position);
        }
    }
}
