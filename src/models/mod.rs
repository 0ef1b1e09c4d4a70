mod question;
mod state;

pub use question::{AnswerLetter, Question};
pub use state::{AppState, QuizOutcome, Response, Verdict};
