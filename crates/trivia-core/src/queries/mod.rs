//! Read-only query operations
//!
//! - All queries are pure: they take already-loaded slices and never touch a store
//! - Results keep the input order (storage order, ascending id)
//! - Empty results are values, not errors; signaling is left to the engine

pub mod category;
pub mod pager;
pub mod quiz;
pub mod search;

pub use category::{category_map, questions_in_category, resolve_category};
pub use pager::{page_bounds, paginate, PageNumber, QUESTIONS_PER_PAGE};
pub use quiz::{next_quiz_question, quiz_candidates, CategoryFilter};
pub use search::{matches_term, search};
