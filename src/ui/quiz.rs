use std::io::{self, Write};

use crate::models::{Question, Verdict};

const CHOICE_PROMPT: &str = "Enter your choice (A/B/C/D): ";

pub fn render_question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    writeln!(out, "{}", question.prompt)?;
    for option in &question.options {
        writeln!(out, "{}", option)?;
    }
    Ok(())
}

/// Writes the prompt without a newline and flushes so it shows before the read.
pub fn render_choice_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", CHOICE_PROMPT)?;
    out.flush()
}

pub fn render_verdict<W: Write>(out: &mut W, verdict: Verdict) -> io::Result<()> {
    match verdict {
        Verdict::Correct => writeln!(out, "Correct!")?,
        Verdict::Wrong { correct } => writeln!(out, "Wrong! The correct answer is {}", correct)?,
    }
    writeln!(out)
}
