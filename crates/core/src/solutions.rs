//! Prompt construction for AI-generated solutions.

use crate::error::CoreError;
use crate::validation::validate_required_text;

/// Build the text-completion prompt asking for a fix to `problem` in `game_name`.
pub fn build_solution_prompt(game_name: &str, problem: &str) -> Result<String, CoreError> {
    validate_required_text("problem", problem)?;

    Ok(format!(
        "You are a helpful gaming assistant. A user is playing the game \"{game_name}\" \
         and is stuck on the following problem. Provide a clear, concise, and step-by-step \
         solution.\n\nProblem: {problem}"
    ))
}
