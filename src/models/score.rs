use serde::{Deserialize, Serialize};

/// Score summary returned by the checker service
///
/// Parsed from the JSON body of a successful `/check-answers` response and
/// rendered directly; the client never recomputes any of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_questions: u32,
    pub correct_count: u32,
    /// 1-based question numbers the sheet got wrong, in sheet order
    pub incorrect_questions: Vec<u32>,
    pub message: String,

    /// Answer string the service read off the sheet, when it reports one.
    /// Kept for logging; not part of the rendered summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_answers: Option<String>,
}

impl ScoreResult {
    /// Whether every question on the sheet was answered correctly
    pub fn is_perfect(&self) -> bool {
        self.incorrect_questions.is_empty()
    }
}
