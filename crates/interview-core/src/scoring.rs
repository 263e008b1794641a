//! Evaluation scoring.
//!
//! This is a transparent heuristic, not an assessment of answer quality:
//! it rewards answering every slot with a reasonably complete answer.
//!
//! - each answer scores `min(words / TARGET_WORDS, 1)`
//! - coverage is `min(answered / expected, 1)`
//! - the score is the mean answer score times coverage, to two decimals

/// Word count at which an answer counts as complete
pub const TARGET_WORDS: usize = 40;

pub fn score_answers(answers: &[&str], expected: usize) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    let completeness: f64 = answers
        .iter()
        .map(|a| {
            let words = a.split_whitespace().count();
            (words as f64 / TARGET_WORDS as f64).min(1.0)
        })
        .sum::<f64>()
        / answers.len() as f64;

    let coverage = if expected == 0 {
        1.0
    } else {
        (answers.len() as f64 / expected as f64).min(1.0)
    };

    round2((completeness * coverage).clamp(0.0, 1.0))
}

pub fn feedback_for(score: f64) -> &'static str {
    if score >= 0.8 {
        "Excellent conversation! Your answers were thorough and covered every question. \
         You communicated clearly and backed your points with concrete experience."
    } else if score >= 0.5 {
        "Good interview. Your answers were clear, but some of them were brief. \
         Try adding specific examples of your achievements and their impact."
    } else if score > 0.0 {
        "Thanks for taking part. Several answers were short or missing. \
         Practise giving fuller answers that walk through the situation, your actions and the result."
    } else {
        "No answers were recorded for this interview."
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
