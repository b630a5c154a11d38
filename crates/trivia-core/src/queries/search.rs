//! Case-insensitive substring search over question text

use crate::model::Question;

/// Whether `text` contains `needle_lower` ignoring case.
///
/// `needle_lower` must already be lowercased.
pub fn matches_term(text: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || text.to_lowercase().contains(needle_lower)
}

/// Questions whose text contains `term`, ignoring case, in corpus order.
///
/// An empty term matches every question.
pub fn search<'a>(term: &str, corpus: &'a [Question]) -> Vec<&'a Question> {
    let needle = term.to_lowercase();
    corpus
        .iter()
        .filter(|q| matches_term(&q.question, &needle))
        .collect()
}
