//! Localized operator-facing text
//!
//! Every English/Bengali string the tool displays lives here, keyed by
//! `(Language, MessageKey)`, plus format helpers for the parameterized
//! messages. Nothing outside this module hardcodes display text.

use crate::error::{AppError, ValidationError};
use crate::models::language::Language;

/// Key into the localized text table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    AnswerKeyLabel,
    AnswerKeyPlaceholder,
    InvalidQuestionCount,
    InvalidAlphabet,
    MissingImage,
    TotalQuestionsLabel,
    CorrectAnswersLabel,
    IncorrectQuestionsLabel,
    NoneToken,
    ErrorPrefix,
}

/// Fixed display string for a language/key pair
pub fn text(language: Language, key: MessageKey) -> &'static str {
    use Language::{Bengali, English};
    use MessageKey::*;

    match (language, key) {
        (English, AnswerKeyLabel) => "Correct Answers (e.g. ABCD...):",
        (English, AnswerKeyPlaceholder) => "Example: ABCDABCD...",
        (English, InvalidQuestionCount) => "Please enter a valid number of questions.",
        (English, InvalidAlphabet) => {
            "Correct answers contain invalid characters. Allowed: A, B, C, D"
        }
        (English, MissingImage) => "Please upload an answer sheet image.",
        (English, TotalQuestionsLabel) => "Total Questions: ",
        (English, CorrectAnswersLabel) => "Correct Answers: ",
        (English, IncorrectQuestionsLabel) => "Incorrect Questions: ",
        (English, NoneToken) => "None",
        (English, ErrorPrefix) => "Error:",

        (Bengali, AnswerKeyLabel) => "সঠিক উত্তর (যেমন: কখগঘ...):",
        (Bengali, AnswerKeyPlaceholder) => "উদাহরণ: কখগঘকখ...",
        (Bengali, InvalidQuestionCount) => "দয়া করে বৈধ প্রশ্ন সংখ্যা লিখুন।",
        (Bengali, InvalidAlphabet) => "সঠিক উত্তরে অবৈধ অক্ষর রয়েছে। অনুমোদিত: ক, খ, গ, ঘ",
        (Bengali, MissingImage) => "অনুগ্রহ করে উত্তরপত্রের ছবি আপলোড করুন।",
        (Bengali, TotalQuestionsLabel) => "মোট প্রশ্ন: ",
        (Bengali, CorrectAnswersLabel) => "সঠিক উত্তর: ",
        (Bengali, IncorrectQuestionsLabel) => "ভুল প্রশ্ন: ",
        (Bengali, NoneToken) => "কোনো নেই",
        (Bengali, ErrorPrefix) => "ত্রুটি:",
    }
}

/// Length-mismatch message citing both lengths
pub fn length_mismatch_message(
    language: Language,
    answer_count: usize,
    question_count: u32,
) -> String {
    match language {
        Language::English => format!(
            "Number of answers ({}) does not match number of questions ({}).",
            answer_count, question_count
        ),
        Language::Bengali => format!(
            "উত্তরের সংখ্যা ({}) প্রশ্নের সংখ্যার ({}) সাথে মেলে না।",
            answer_count, question_count
        ),
    }
}

/// Label and placeholder of the answer-key input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Field text for the answer-key input after a language selection
///
/// Pure and idempotent: the same language always yields the same pair.
pub fn answer_key_field_text(language: Language) -> FieldText {
    FieldText {
        label: text(language, MessageKey::AnswerKeyLabel),
        placeholder: text(language, MessageKey::AnswerKeyPlaceholder),
    }
}

/// The single localized line displayed for a failed attempt
///
/// Validation failures map to their full localized sentences; everything
/// else is the language's error prefix followed by the technical
/// description.
pub fn error_message(language: Language, error: &AppError) -> String {
    match error {
        AppError::Validation(v) => match v {
            ValidationError::InvalidQuestionCount { .. } => {
                text(language, MessageKey::InvalidQuestionCount).to_string()
            }
            ValidationError::LengthMismatch {
                answer_count,
                question_count,
            } => length_mismatch_message(language, *answer_count, *question_count),
            ValidationError::InvalidAlphabet { .. } => {
                text(language, MessageKey::InvalidAlphabet).to_string()
            }
            ValidationError::MissingImage => text(language, MessageKey::MissingImage).to_string(),
        },
        AppError::Api(api) => format!("{} {}", text(language, MessageKey::ErrorPrefix), api),
        AppError::File(file) => format!("{} {}", text(language, MessageKey::ErrorPrefix), file),
        AppError::Other(msg) => format!("{} {}", text(language, MessageKey::ErrorPrefix), msg),
    }
}
