//! Sheet check flow
//!
//! Core responsibility: the complete handling of one answer sheet.
//!
//! Order of operations:
//! 1. validate the form (first failure wins, nothing sent)
//! 2. submit the validated check to the remote checker
//! 3. hand the parsed score back to the caller

use tracing::{debug, info};

use crate::clients::CheckerClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::form::CheckForm;
use crate::models::score::ScoreResult;
use crate::services::validation::validate_submission;
use crate::workflow::check_ctx::CheckCtx;

/// Sheet check flow
///
/// - Orchestrates validation and submission for one sheet
/// - Holds the checker client but no per-sheet state
/// - Never displays anything itself; the caller owns the output
pub struct CheckFlow {
    client: CheckerClient,
    verbose_logging: bool,
}

impl CheckFlow {
    /// Create a new check flow
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            client: CheckerClient::new(config)?,
            verbose_logging: config.verbose_logging,
        })
    }

    /// Run one sheet through validation and checking
    ///
    /// # Arguments
    /// - `form`: the raw form input for this sheet
    /// - `ctx`: run context for log prefixes
    ///
    /// # Returns
    /// The checker's score result. Validation and checker errors are
    /// propagated untouched so the caller can localize them.
    pub async fn run(&self, form: &CheckForm, ctx: &CheckCtx) -> AppResult<ScoreResult> {
        self.log_answer_key(ctx.sheet_index, &form.raw_answers);

        // ========== Step 1: validate ==========
        info!("[sheet {}] 📋 Validating form input...", ctx.sheet_index);

        let submission = validate_submission(form)?;

        info!(
            "[sheet {}] ✓ Validation passed ({} questions, {})",
            ctx.sheet_index, submission.num_questions, submission.language
        );

        if self.verbose_logging {
            info!(
                "[sheet {}] Normalized key: {}",
                ctx.sheet_index, submission.answers
            );
        }

        // ========== Step 2: submit ==========
        info!(
            "[sheet {}] 📤 Submitting {} to checker...",
            ctx.sheet_index, submission.image.file_name
        );

        let score = self.client.check_answers(&submission).await?;

        info!(
            "[sheet {}] ✓ Checked: {}/{} correct",
            ctx.sheet_index, score.correct_count, score.total_questions
        );

        if let Some(detected) = &score.detected_answers {
            debug!("[sheet {}] Detected answers: {}", ctx.sheet_index, detected);
        }

        Ok(score)
    }

    /// Probe the checker service, returning its banner
    pub async fn ping(&self) -> AppResult<String> {
        self.client.ping().await
    }

    /// Show a preview of the raw answer key
    fn log_answer_key(&self, sheet_index: usize, raw_answers: &str) {
        let preview = if raw_answers.chars().count() > 80 {
            raw_answers.chars().take(80).collect::<String>() + "..."
        } else {
            raw_answers.to_string()
        };
        info!("[sheet {}] Answer key: {}", sheet_index, preview);
    }
}
