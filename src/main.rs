//! Logging: set `RUST_LOG=mcq_quiz=debug` to see judging and score logs on stderr.

use std::process::ExitCode;

use clap::Parser;
use mcq_quiz::Quiz;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Multiple-choice Java quiz for the terminal", long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    // stdout carries only the quiz transcript
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcq_quiz=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let quiz = match Quiz::bundled() {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error loading quiz: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
