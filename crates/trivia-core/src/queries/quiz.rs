//! Random quiz question selection
//!
//! The selector keeps no session state. Callers pass the ids already asked
//! and accumulate the returned id themselves before the next draw.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Question;

/// Category constraint for a quiz draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Draw from every category
    All,
    /// Draw only from one category id
    Only(i64),
}

impl CategoryFilter {
    /// Map a requested category id to a filter; absent and `0` mean all.
    pub fn from_id(id: Option<i64>) -> Self {
        match id {
            None | Some(0) => CategoryFilter::All,
            Some(id) => CategoryFilter::Only(id),
        }
    }

    pub fn admits(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => question.category == *id,
        }
    }
}

/// Questions eligible for the next draw: inside the filter and not yet asked
pub fn quiz_candidates<'a>(
    filter: CategoryFilter,
    excluded: &HashSet<i64>,
    all: &'a [Question],
) -> Vec<&'a Question> {
    all.iter()
        .filter(|q| !excluded.contains(&q.id) && filter.admits(q))
        .collect()
}

/// Pick one eligible question uniformly at random
///
/// Returns `None` once every question inside the filter has been asked.
pub fn next_quiz_question<'a, R>(
    filter: CategoryFilter,
    excluded: &HashSet<i64>,
    all: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    quiz_candidates(filter, excluded, all).choose(rng).copied()
}
