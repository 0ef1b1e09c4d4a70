use tracing::debug;

use crate::models::{AppState, Question, QuizOutcome, Response, Verdict};

/// Quiz progress over an immutable question bank.
pub struct App {
    state: AppState,
    questions: Vec<Question>,
    current_question_index: usize,
    score: usize,
    responses: Vec<Response>,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let num_questions = questions.len();
        let state = if num_questions == 0 {
            AppState::Finished
        } else {
            AppState::Presenting
        };

        Self {
            state,
            questions,
            current_question_index: 0,
            score: 0,
            responses: Vec::with_capacity(num_questions),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == AppState::Finished
    }

    /// The current question has been shown and the prompt is up.
    pub fn await_input(&mut self) {
        if self.state == AppState::Presenting {
            self.state = AppState::AwaitingInput;
        }
    }

    /// Judges a normalized choice against the current question.
    ///
    /// Anything other than the stored letter, including `None` and letters
    /// outside `A`..`D`, is judged wrong. Returns `None` once finished.
    pub fn submit_choice(&mut self, choice: Option<char>) -> Option<Verdict> {
        let question = self.questions.get(self.current_question_index)?;
        if !matches!(self.state, AppState::Presenting | AppState::AwaitingInput) {
            return None;
        }

        let correct_answer = question.answer;
        let verdict = match choice {
            Some(c) if question.is_correct(c) => Verdict::Correct,
            _ => Verdict::Wrong {
                correct: correct_answer,
            },
        };

        if verdict.is_correct() {
            self.score += 1;
        }

        debug!(
            question = self.current_question_number(),
            ?choice,
            ?verdict,
            score = self.score,
            "judged answer"
        );

        self.responses.push(Response {
            question_index: self.current_question_index,
            choice,
            correct_answer,
            verdict,
        });
        self.state = AppState::Judged(verdict);

        Some(verdict)
    }

    /// Moves past a judged question, to the next one or to the end.
    pub fn advance(&mut self) {
        if !matches!(self.state, AppState::Judged(_)) {
            return;
        }

        self.current_question_index += 1;
        self.state = if self.current_question_index >= self.questions.len() {
            AppState::Finished
        } else {
            AppState::Presenting
        };
    }

    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome {
            score: self.score,
            total: self.total_questions(),
            responses: self.responses.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: AppState) {
        self.state = state;
    }
}
