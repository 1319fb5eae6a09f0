//! Pure views derived from `(questions, selected category)`.
//!
//! Everything here is recomputed on every render; at a few dozen questions
//! there is nothing worth caching.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::models::{Category, Difficulty, Question};

/// Filter value meaning "no filtering".
pub const ALL_CATEGORIES: &str = "all";

/// Rows shown in the sample table.
pub const SAMPLE_SIZE: usize = 10;

/// The selected category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show every question
    #[default]
    All,
    /// Show questions whose category equals this name exactly
    Named(String),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` is the no-filter sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    /// The selector value, `"all"` for [`CategoryFilter::All`].
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Label shown in the filter bar.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All categories",
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Case-sensitive exact match on the question's category.
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => question.category == *name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `{name, value}` entry of a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<N> {
    pub name: N,
    pub value: usize,
}

impl<N> Bucket<N> {
    pub fn new(name: N, value: usize) -> Self {
        Self { name, value }
    }
}

/// Questions passing `filter`, in their original order.
pub fn visible_questions<'a>(questions: &'a [Question], filter: &CategoryFilter) -> Vec<&'a Question> {
    questions.iter().filter(|q| filter.matches(q)).collect()
}

/// Count of visible questions per category, in first-seen order.
pub fn category_distribution(visible: &[&Question]) -> Vec<Bucket<String>> {
    let mut buckets: Vec<Bucket<String>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for question in visible {
        match index.get(question.category.as_str()) {
            Some(&i) => buckets[i].value += 1,
            None => {
                index.insert(question.category.as_str(), buckets.len());
                buckets.push(Bucket::new(question.category.clone(), 1));
            }
        }
    }

    buckets
}

/// Count of visible questions per difficulty: always easy, medium, hard.
pub fn difficulty_distribution(visible: &[&Question]) -> [Bucket<Difficulty>; 3] {
    let mut counts = [0usize; 3];
    for question in visible {
        counts[question.difficulty.index()] += 1;
    }

    let [easy, medium, hard] = counts;
    [
        Bucket::new(Difficulty::Easy, easy),
        Bucket::new(Difficulty::Medium, medium),
        Bucket::new(Difficulty::Hard, hard),
    ]
}

/// Distinct categories across all questions (ignoring the filter), sorted.
pub fn unique_question_categories(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .map(|q| q.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Every fetched category paired with its number of visible questions.
pub fn category_navigation<'a>(
    categories: &'a [Category],
    visible: &[&Question],
) -> Vec<(&'a Category, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for question in visible {
        *counts.entry(question.category.as_str()).or_default() += 1;
    }

    categories
        .iter()
        .map(|c| (c, counts.get(c.name.as_str()).copied().unwrap_or(0)))
        .collect()
}

/// The first `limit` visible questions.
pub fn sample_questions<'a, 'q>(visible: &'a [&'q Question], limit: usize) -> &'a [&'q Question] {
    &visible[..visible.len().min(limit)]
}
