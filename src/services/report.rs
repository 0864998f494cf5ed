//! Score report rendering

use crate::locale::{text, MessageKey};
use crate::models::language::Language;
use crate::models::score::ScoreResult;

/// Render the localized score report
///
/// Line order: total questions, correct count, incorrect question numbers
/// (or the language's none token), a blank line, then the checker's own
/// message verbatim.
pub fn render_score_report(language: Language, score: &ScoreResult) -> String {
    let incorrect = if score.incorrect_questions.is_empty() {
        text(language, MessageKey::NoneToken).to_string()
    } else {
        score
            .incorrect_questions
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{}{}\n{}{}\n{}{}\n\n{}",
        text(language, MessageKey::TotalQuestionsLabel),
        score.total_questions,
        text(language, MessageKey::CorrectAnswersLabel),
        score.correct_count,
        text(language, MessageKey::IncorrectQuestionsLabel),
        incorrect,
        score.message,
    )
}
