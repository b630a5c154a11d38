//! Category resolution and category-scoped listings

use std::collections::BTreeMap;

use crate::errors::{Result, TriviaError};
use crate::model::{Category, Question};

/// Find the category with `id`
///
/// # Errors
/// Returns `CategoryNotFound` when no category has this id.
pub fn resolve_category(id: i64, categories: &[Category]) -> Result<&Category> {
    categories
        .iter()
        .find(|c| c.id == id)
        .ok_or(TriviaError::CategoryNotFound { category_id: id })
}

/// Questions belonging to `category`, in storage order
pub fn questions_in_category<'a>(category: &Category, all: &'a [Question]) -> Vec<&'a Question> {
    all.iter().filter(|q| q.category == category.id).collect()
}

/// `{id: type}` lookup used by the question listing envelope
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_keys_by_id() {
        let map = category_map(&[Category::new(2, "Art"), Category::new(1, "Science")]);
        assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
        assert_eq!(map.get(&2).map(String::as_str), Some("Art"));
        assert_eq!(map.len(), 2);
    }
}
