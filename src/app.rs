//! Application orchestration
//!
//! ## Responsibilities
//!
//! This module is the entry point of the tool. It owns the run modes and
//! the resources they share.
//!
//! ## Core functions
//!
//! 1. **Initialization**: startup banner, checker client, check flow
//! 2. **Mode dispatch**: ping, single sheet, or a whole folder of sheets
//! 3. **Concurrency control**: a Semaphore caps in-flight checks
//! 4. **Display**: prints exactly one score report or one localized
//!    error message per sheet
//! 5. **Statistics**: totals across all checked sheets
//!
//! ## Design notes
//!
//! - A failed check is a displayed outcome, not a program error; the
//!   process still exits cleanly
//! - Sheets are spawned concurrently but results print in sheet order

use crate::cli::CliArgs;
use crate::config::Config;
use crate::error::AppError;
use crate::locale;
use crate::models::form::{CheckForm, SheetImage};
use crate::models::language::Language;
use crate::models::loaders::{load_sheet_image, load_sheet_images_from_dir};
use crate::services::report::render_score_report;
use crate::workflow::{CheckCtx, CheckFlow};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// Application main structure
pub struct App {
    config: Config,
    flow: Arc<CheckFlow>,
}

impl App {
    /// Initialize the application
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let flow = Arc::new(CheckFlow::new(&config)?);

        Ok(Self { config, flow })
    }

    /// Run the selected mode
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        if args.ping {
            return self.run_ping().await;
        }

        let language = self.resolve_language(args.language.as_deref())?;

        // Absent flags behave like empty form fields: validation speaks
        let answers = args.answers.unwrap_or_default();
        let questions = args.questions.unwrap_or_default();

        if let Some(dir) = args.image_dir.as_deref() {
            return self.run_batch(language, answers, questions, dir).await;
        }

        self.run_single(language, answers, questions, args.image.as_deref())
            .await
    }

    /// Probe the checker service and print its banner
    async fn run_ping(&self) -> Result<()> {
        info!("📡 Probing checker service...");

        let banner = self.flow.ping().await?;
        println!("{}", banner.trim());

        info!("✅ Checker reachable");
        Ok(())
    }

    /// Check one sheet and display its outcome
    async fn run_single(
        &self,
        language: Language,
        answers: String,
        questions: String,
        image_path: Option<&Path>,
    ) -> Result<()> {
        let image = match image_path {
            Some(path) => match load_sheet_image(path).await {
                Ok(image) => Some(image),
                Err(e) => {
                    error!("❌ {}", e);
                    self.display_error(language, &e);
                    return Ok(());
                }
            },
            None => None,
        };

        let label = image
            .as_ref()
            .map(|i| i.file_name.clone())
            .unwrap_or_else(|| "-".to_string());

        let form = CheckForm {
            language,
            num_questions: questions,
            raw_answers: answers,
            image,
        };
        let ctx = CheckCtx::new(1, label);

        match self.flow.run(&form, &ctx).await {
            Ok(score) => {
                println!("{}", render_score_report(language, &score));
            }
            Err(e) => {
                error!("{} ❌ Check failed: {}", ctx, e);
                self.display_error(language, &e);
            }
        }

        Ok(())
    }

    /// Check every image in a folder against the same answer key
    async fn run_batch(
        &self,
        language: Language,
        answers: String,
        questions: String,
        dir: &str,
    ) -> Result<()> {
        info!("\n📁 Scanning for sheet images...");

        let images = match load_sheet_images_from_dir(dir).await {
            Ok(images) => images,
            Err(e) => {
                error!("❌ {}", e);
                self.display_error(language, &e);
                return Ok(());
            }
        };

        if images.is_empty() {
            warn!("⚠️ No sheet images found, nothing to check");
            return Ok(());
        }

        let total = images.len();
        log_sheets_loaded(total, self.config.max_concurrent_checks);

        let stats = self
            .check_all_sheets(language, &answers, &questions, images)
            .await?;

        print_final_stats(&stats);

        Ok(())
    }

    /// Spawn one check per sheet, capped by the semaphore
    async fn check_all_sheets(
        &self,
        language: Language,
        answers: &str,
        questions: &str,
        images: Vec<SheetImage>,
    ) -> Result<CheckStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_checks));
        let mut stats = CheckStats {
            total: images.len(),
            ..Default::default()
        };

        let mut handles = Vec::new();

        for (idx, image) in images.into_iter().enumerate() {
            let sheet_index = idx + 1;
            let file_name = image.file_name.clone();
            let permit = semaphore.clone().acquire_owned().await?;

            let flow = Arc::clone(&self.flow);
            let form = CheckForm {
                language,
                num_questions: questions.to_string(),
                raw_answers: answers.to_string(),
                image: Some(image),
            };
            let ctx = CheckCtx::new(sheet_index, file_name.clone());

            let handle = tokio::spawn(async move {
                let _permit = permit;
                match flow.run(&form, &ctx).await {
                    Ok(score) => Ok(score),
                    Err(e) => {
                        error!("{} ❌ Check failed: {}", ctx, e);
                        Err(e)
                    }
                }
            });
            handles.push((sheet_index, file_name, handle));
        }

        // Results print in sheet order even though checks overlap
        for (sheet_index, file_name, handle) in handles {
            match handle.await {
                Ok(Ok(score)) => {
                    println!("\n[{}]", file_name);
                    println!("{}", render_score_report(language, &score));
                    stats.success += 1;
                }
                Ok(Err(e)) => {
                    println!("\n[{}]", file_name);
                    self.display_error(language, &e);
                    stats.failed += 1;
                }
                Err(e) => {
                    error!("[sheet {}] Task failed: {}", sheet_index, e);
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Resolve the answer language from the CLI or the configured default
    fn resolve_language(&self, cli_language: Option<&str>) -> Result<Language> {
        let raw = cli_language.unwrap_or(self.config.default_language.as_str());
        let language =
            Language::find(raw).ok_or_else(|| anyhow::anyhow!("Unknown language: {}", raw))?;

        debug!(
            "Answer key field: {:?}",
            locale::answer_key_field_text(language)
        );

        Ok(language)
    }

    /// Print the single localized error line for a failed attempt
    fn display_error(&self, language: Language, error: &AppError) {
        println!("{}", locale::error_message(language, error));
    }
}

/// Run statistics
#[derive(Debug, Default)]
struct CheckStats {
    success: usize,
    failed: usize,
    total: usize,
}

// ========== Logging helpers ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Answer sheet checker starting");
    info!("📊 Checker endpoint: {}", config.checker_base_url);
    info!("{}", "=".repeat(60));
}

fn log_sheets_loaded(total: usize, max_concurrent: usize) {
    info!("✓ Found {} sheet image(s) to check", total);
    info!("📋 Checking up to {} at a time\n", max_concurrent);
}

fn print_final_stats(stats: &CheckStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 All checks finished");
    info!(
        "Finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ Checked: {}/{}", stats.success, stats.total);
    info!("❌ Failed: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
