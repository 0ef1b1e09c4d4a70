use super::AnswerLetter;

/// Where the runner is within the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Question text and options are about to be shown.
    Presenting,
    /// Prompt shown, waiting for a token.
    AwaitingInput,
    /// The last choice has been judged.
    Judged(Verdict),
    /// All questions answered.
    Finished,
}

/// Result of judging a single choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong { correct: AnswerLetter },
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// A judged answer for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub question_index: usize,
    /// First character of the token after ASCII upper-casing.
    pub choice: Option<char>,
    pub correct_answer: AnswerLetter,
    pub verdict: Verdict,
}

/// Final score plus the per-question breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub responses: Vec<Response>,
}

impl QuizOutcome {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn missed(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter().filter(|r| !r.verdict.is_correct())
    }
}
