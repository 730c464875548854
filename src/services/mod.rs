pub mod option_shuffler;
pub mod question_validator;

pub use option_shuffler::OptionShuffler;
pub use question_validator::{validate_question, validate_questions};
