use std::fmt;

use serde::Deserialize;

/// One of the four option labels a question can be answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Option lines, each already carrying its `A.`..`D.` label.
    pub options: [String; 4],
    pub answer: AnswerLetter,
}

impl Question {
    pub fn is_correct(&self, choice: char) -> bool {
        choice == self.answer.as_char()
    }
}
