//! Trivia category model.

use serde::{Deserialize, Serialize};

use crate::decode::decode;

/// A trivia category. Identity is the numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Copy of this category with an entity-decoded name.
    pub fn decoded(self) -> Self {
        Self {
            id: self.id,
            name: decode(&self.name),
        }
    }
}

/// Body of `GET /api_category.php`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListResponse {
    pub trivia_categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_list() {
        let json = r#"{"trivia_categories":[{"id":9,"name":"General Knowledge"},{"id":17,"name":"Science &amp; Nature"}]}"#;
        let parsed: CategoryListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.trivia_categories.len(), 2);
        assert_eq!(parsed.trivia_categories[0], Category::new(9, "General Knowledge"));
    }

    #[test]
    fn test_decoded_keeps_id() {
        let category = Category::new(17, "Science &amp; Nature").decoded();
        assert_eq!(category.id, 17);
        assert_eq!(category.name, "Science & Nature");
    }
}
