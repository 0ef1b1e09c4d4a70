//! Plain-text rendering of the quiz transcript.
//!
//! Every function writes only to the sink it is given.

mod quiz;
mod result;

pub use quiz::{render_choice_prompt, render_question, render_verdict};
pub use result::render_final_score;
