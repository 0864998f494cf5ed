//! OMR checker API client
//!
//! Wraps every call to the remote answer-checker service.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::form::CheckSubmission;
use crate::models::score::ScoreResult;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

/// Client for the remote answer checker
pub struct CheckerClient {
    http: reqwest::Client,
    base_url: String,
}

impl CheckerClient {
    /// Create a new checker client from the loaded configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.checker_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit a validated check to the scoring endpoint
    ///
    /// # Arguments
    /// - `submission`: validated answer key, language and sheet image
    ///
    /// # Returns
    /// The parsed score result. A non-2xx status is reported as a server
    /// error without reading the body.
    pub async fn check_answers(&self, submission: &CheckSubmission) -> AppResult<ScoreResult> {
        let endpoint = format!("{}/check-answers", self.base_url);

        let image = Part::bytes(submission.image.bytes.clone())
            .file_name(submission.image.file_name.clone())
            .mime_str(mime_for_file_name(&submission.image.file_name))
            .map_err(|e| AppError::request_failed(endpoint.clone(), e))?;

        let form = Form::new()
            .text("correct_answers", submission.answers.clone())
            .text("language", submission.language.wire_code())
            .part("image", image);

        debug!(
            "POST {} ({} questions, sheet {})",
            endpoint, submission.num_questions, submission.image.file_name
        );

        let response = self.http.post(&endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::server_error(status.as_u16()));
        }

        let body = response.bytes().await?;
        let score: ScoreResult = serde_json::from_slice(&body)?;

        Ok(score)
    }

    /// Probe the checker service root
    ///
    /// # Returns
    /// The service banner text
    pub async fn ping(&self) -> AppResult<String> {
        let endpoint = format!("{}/", self.base_url);

        debug!("GET {}", endpoint);

        let response = self.http.get(&endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::server_error(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// Content type for an uploaded sheet, guessed from the file extension
fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
