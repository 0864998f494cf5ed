pub mod report;
pub mod validation;

pub use report::render_score_report;
pub use validation::{
    is_valid_answer_key, normalize_answer_key, parse_question_count, validate_submission,
};
