pub mod label;
pub mod processed;
pub mod question;

pub use label::{option_letter, set_name};
pub use processed::{ProcessedOption, ProcessedQuestion, QuestionSet};
pub use question::{OptionId, Question, QuestionOption};
