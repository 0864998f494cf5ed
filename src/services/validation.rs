//! Answer-key validation
//!
//! Pure checks over a filled form, applied in a fixed order. A failed
//! check stops the attempt before anything touches the network.

use crate::error::{AppError, AppResult};
use crate::models::form::{CheckForm, CheckSubmission};
use crate::models::language::Language;
use tracing::debug;

/// Canonical form of a raw answer key
///
/// Surrounding whitespace is removed and Latin letters are uppercased.
/// Bengali letters have no case and pass through unchanged.
pub fn normalize_answer_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Whether a normalized key uses only the language's four option letters
///
/// An empty key is invalid: a check needs at least one answer.
pub fn is_valid_answer_key(key: &str, language: Language) -> bool {
    !key.is_empty() && key.chars().all(|c| language.accepts(c))
}

/// Parse the declared question count, strictly
///
/// The whole trimmed field must be a positive integer. Trailing garbage
/// ("20x") is rejected rather than silently truncated.
pub fn parse_question_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&n| n >= 1)
}

/// Validate a filled form into a submission ready for the checker
///
/// Checks run in a fixed order and the first failure wins: question
/// count, key length, alphabet, image. Key length is counted in
/// characters, so a Bengali key is measured in letters rather than
/// UTF-8 bytes.
pub fn validate_submission(form: &CheckForm) -> AppResult<CheckSubmission> {
    let num_questions = parse_question_count(&form.num_questions)
        .ok_or_else(|| AppError::invalid_question_count(form.num_questions.clone()))?;

    let answers = normalize_answer_key(&form.raw_answers);
    let answer_count = answers.chars().count();

    if answer_count != num_questions as usize {
        return Err(AppError::length_mismatch(answer_count, num_questions));
    }

    if !is_valid_answer_key(&answers, form.language) {
        return Err(AppError::invalid_alphabet(form.language));
    }

    let image = match &form.image {
        Some(image) if !image.is_empty() => image.clone(),
        _ => return Err(AppError::missing_image()),
    };

    debug!(
        "Validation passed: {} answers in {}",
        answer_count, form.language
    );

    Ok(CheckSubmission {
        num_questions,
        answers,
        language: form.language,
        image,
    })
}
