//! Process stdio handles for the quiz.

use std::io::{self, StdinLock, StdoutLock, Write};

/// Locked stdin and stdout, held for the whole run and released on drop.
pub struct Console {
    pub input: StdinLock<'static>,
    pub output: StdoutLock<'static>,
}

pub fn init() -> Console {
    Console {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        let _ = self.output.flush();
    }
}
