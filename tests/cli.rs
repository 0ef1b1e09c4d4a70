use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcq-quiz"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn quiz binary");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("write input");

    child.wait_with_output().expect("wait for quiz binary")
}

#[test]
fn completes_with_exit_zero() {
    let output = run_binary("A C B D A\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Correct!\n\n").count(), 5);
    assert!(stdout.ends_with("Your final score is 5/5\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn premature_eof_exits_nonzero() {
    let output = run_binary("A C");
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Correct!\n\n").count(), 2);
    assert!(stdout.ends_with("Enter your choice (A/B/C/D): "));
    assert!(!stdout.contains("Your final score"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error running quiz"));
}

#[test]
fn rejects_unknown_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_mcq-quiz"))
        .arg("--questions")
        .stdin(Stdio::null())
        .output()
        .expect("run quiz binary");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
