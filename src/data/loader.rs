use thiserror::Error;

use crate::models::{AnswerLetter, Question};

const BUNDLED_QUESTIONS: &str = include_str!("questions.json");

/// Errors raised while decoding or validating a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("question {question} has an empty prompt")]
    EmptyPrompt { question: usize },
    #[error("question {question}: option {option:?} must start with \"{letter}.\"")]
    MislabeledOption {
        question: usize,
        letter: AnswerLetter,
        option: String,
    },
}

/// The question bank compiled into the binary.
pub fn load_questions() -> Result<Vec<Question>, LoadError> {
    load_questions_from_str(BUNDLED_QUESTIONS)
}

pub fn load_questions_from_str(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    for (index, question) in questions.iter().enumerate() {
        validate_question(index + 1, question)?;
    }

    Ok(questions)
}

fn validate_question(number: usize, question: &Question) -> Result<(), LoadError> {
    if question.prompt.trim().is_empty() {
        return Err(LoadError::EmptyPrompt { question: number });
    }

    for (letter, option) in AnswerLetter::ALL.into_iter().zip(question.options.iter()) {
        let label = format!("{}.", letter);
        if !option.starts_with(&label) {
            return Err(LoadError::MislabeledOption {
                question: number,
                letter,
                option: option.clone(),
            });
        }
    }

    Ok(())
}
