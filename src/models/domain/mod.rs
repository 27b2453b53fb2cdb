pub mod exam;
pub mod question;
pub use exam::{Difficulty, GenerationRequest, Language, QuestionCounts, RegenerationTarget};
pub use question::{option_label, Question, QuestionType};
