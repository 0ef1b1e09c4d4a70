//! Whitespace-delimited token reading.
//!
//! Tokens may be spread over several lines, or several may share one line;
//! leading whitespace and blank lines are skipped. Separators follow Java's
//! `Character.isWhitespace`, so no-break spaces stay inside a token.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use tracing::trace;

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(%token, "read token");
                return Ok(Some(token));
            }

            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&buf);
            self.pending.extend(
                line.split(is_separator)
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned),
            );
        }
    }

    /// Like [`next_token`](Self::next_token), but end of input is an error.
    pub fn require_token(&mut self) -> io::Result<String> {
        self.next_token()?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all questions were answered",
            )
        })
    }
}

fn is_separator(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    }
}

/// First character of `token`, upper-cased with ASCII folding.
pub fn normalize_choice(token: &str) -> Option<char> {
    token.chars().next().map(|c| c.to_ascii_uppercase())
}
