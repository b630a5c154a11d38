pub mod question_ops;
pub mod store;

pub use question_ops::{add_question, delete_question, validate_draft};
pub use store::{MemoryStore, QuestionStore, StoreResult};
