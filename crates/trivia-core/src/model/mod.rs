pub mod category;
pub mod draft;
pub mod question;

pub use category::Category;
pub use draft::{NumberInput, QuestionDraft};
pub use question::{NewQuestion, Question, DIFFICULTY_RANGE};
