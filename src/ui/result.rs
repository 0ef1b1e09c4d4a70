use std::io::{self, Write};

pub fn render_final_score<W: Write>(out: &mut W, score: usize, total: usize) -> io::Result<()> {
    writeln!(out, "Your final score is {}/{}", score, total)?;
    out.flush()
}
