//! # mcq-quiz
//!
//! A line-oriented multiple-choice quiz for the terminal.
//!
//! Each question is printed with its four options, one answer token is read
//! per question, and feedback plus a running score are kept until the final
//! score line.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mcq_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // The question bank bundled with the crate
//!     let quiz = Quiz::bundled()?;
//!
//!     // Run the quiz on stdin/stdout
//!     let outcome = quiz.run()?;
//!     println!("{:.0}%", outcome.percentage());
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod input;
mod models;
pub mod terminal;
mod ui;

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

pub use app::App;
pub use data::{load_questions, load_questions_from_str, LoadError};
pub use input::{normalize_choice, TokenReader};
pub use models::{AnswerLetter, AppState, Question, QuizOutcome, Response, Verdict};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution, including input ending early.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The runner reached a question position the bank does not have.
    #[error("no question at position {0}")]
    MissingQuestion(usize),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// The quiz over the question bank compiled into the crate.
    pub fn bundled() -> Result<Self, QuizError> {
        Ok(Self::new(load_questions()?))
    }

    /// Load a quiz from a JSON array of questions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mcq_quiz::Quiz;
    ///
    /// let json = r#"[{
    ///     "prompt": "Pick A",
    ///     "options": ["A. yes", "B. no", "C. no", "D. no"],
    ///     "answer": "A"
    /// }]"#;
    /// let quiz = Quiz::from_json_str(json).expect("valid bank");
    /// assert_eq!(quiz.app().total_questions(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        Ok(Self::new(load_questions_from_str(json)?))
    }

    /// Run the quiz on the process stdin and stdout.
    ///
    /// Both handles stay locked until the quiz ends, successfully or not.
    pub fn run(mut self) -> Result<QuizOutcome, QuizError> {
        let mut console = terminal::init();
        let terminal::Console { input, output } = &mut console;
        self.run_with(input, output)
    }

    /// Run the quiz from its current position against arbitrary streams.
    ///
    /// Fails with an [`io::ErrorKind::UnexpectedEof`] error if `input` runs
    /// out before every question is answered; nothing further is written in
    /// that case.
    pub fn run_with<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<QuizOutcome, QuizError> {
        let mut tokens = TokenReader::new(input);
        run_loop(&mut self.app, &mut tokens, output)?;

        let outcome = self.app.outcome();
        debug!(
            score = outcome.score,
            total = outcome.total,
            percentage = outcome.percentage(),
            "quiz finished"
        );
        Ok(outcome)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }
}

fn run_loop<R: BufRead, W: Write>(
    app: &mut App,
    tokens: &mut TokenReader<R>,
    out: &mut W,
) -> Result<(), QuizError> {
    loop {
        match app.state() {
            AppState::Presenting => {
                let question = app
                    .current_question()
                    .ok_or(QuizError::MissingQuestion(app.current_question_number()))?;
                ui::render_question(out, question)?;
                ui::render_choice_prompt(out)?;
                app.await_input();
            }
            AppState::AwaitingInput => {
                let token = tokens.require_token()?;
                app.submit_choice(normalize_choice(&token));
            }
            AppState::Judged(verdict) => {
                ui::render_verdict(out, verdict)?;
                app.advance();
            }
            AppState::Finished => {
                ui::render_final_score(out, app.score(), app.total_questions())?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(input: &str) -> (Result<QuizOutcome, QuizError>, String) {
        let mut quiz = Quiz::bundled().unwrap();
        let mut out = Vec::new();
        let result = quiz.run_with(Cursor::new(input.to_owned()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_one_token_per_question() {
        let (result, text) = run("A\nC B\n\nD A extra tokens\n");
        assert_eq!(result.unwrap().score, 5);
        assert!(text.ends_with("Your final score is 5/5\n"));
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let (upper, upper_text) = run("A C B D A");
        let (lower, lower_text) = run("a c b d a");
        assert_eq!(upper.unwrap(), lower.unwrap());
        assert_eq!(upper_text, lower_text);
    }

    #[test]
    fn test_eof_is_io_error() {
        let (result, text) = run("");
        match result {
            Err(QuizError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(text.ends_with("Enter your choice (A/B/C/D): "));
    }

    #[test]
    fn test_empty_bank_prints_zero_score() {
        let mut quiz = Quiz::new(Vec::new());
        let mut out = Vec::new();
        let outcome = quiz.run_with(Cursor::new(""), &mut out).unwrap();
        assert_eq!(outcome.total, 0);
        assert_eq!(out, b"Your final score is 0/0\n");
    }

    #[test]
    fn test_out_of_range_question_renders_nothing() {
        let mut quiz = Quiz::new(Vec::new());
        quiz.app.force_state(AppState::Presenting);
        let mut out = Vec::new();
        let result = quiz.run_with(Cursor::new("A"), &mut out);
        assert!(matches!(result, Err(QuizError::MissingQuestion(1))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_finished_quiz_does_not_rescore() {
        let mut quiz = Quiz::bundled().unwrap();
        let mut out = Vec::new();
        quiz.run_with(Cursor::new("A C B D A"), &mut out).unwrap();

        let mut again = Vec::new();
        let outcome = quiz.run_with(Cursor::new("A A A A A"), &mut again).unwrap();
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.responses.len(), 5);
        assert_eq!(again, b"Your final score is 5/5\n");
    }

    #[test]
    fn test_error_display() {
        let err = QuizError::from(LoadError::Empty);
        assert_eq!(
            err.to_string(),
            "Failed to load questions: question bank must contain at least one question"
        );
    }
}
