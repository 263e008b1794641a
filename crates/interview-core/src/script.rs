//! The interviewer's script: a fixed greeting plus one canned prompt per turn.

/// First message of every session
pub const OPENING_MESSAGE: &str = "Hello! Welcome to your interview. I'm looking forward to \
learning more about you. To begin, please tell me about yourself and your background.";

/// Prompt sent after user turn `n` is `PROMPTS[n - 1]`.
pub const PROMPTS: [&str; 8] = [
    "Thanks for the introduction. Can you describe a challenging project you worked on recently?",
    "How do you handle working under pressure or against tight deadlines?",
    "Which technologies are you most comfortable with, and why?",
    "Walk me through how you approach a difficult technical problem.",
    "Tell me about a time you had to learn something new quickly. How did you go about it?",
    "What motivates you at work, and what kind of environment helps you do your best?",
    "Do you have any questions about the company, the role or the team?",
    "Thank you for your answers. That covers everything I wanted to ask today.",
];

/// Prompt to send after the user's `turn`-th message (1-based).
/// Saturates at the last entry once the script runs out.
pub fn prompt_for_turn(turn: usize) -> &'static str {
    let index = turn.saturating_sub(1).min(PROMPTS.len() - 1);
    PROMPTS[index]
}
