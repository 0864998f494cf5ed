//! # Answer Sheet Check
//!
//! A tool that checks scanned answer sheets against an answer key through
//! a remote OMR checker service, with English and Bengali answer support.
//!
//! ## Architecture
//!
//! The system keeps a strict layering:
//!
//! ### ① Model layer (Models)
//! - `models/` - raw form input, validated submissions, score results
//! - `models/loaders` - reads sheet images from disk
//!
//! ### ② Service layer (Services)
//! - `services/validation` - ordered form validation, fully offline
//! - `services/report` - localized score report rendering
//!
//! ### ③ Client layer (Clients)
//! - `clients/checker_client` - the only module that talks to the
//!   checker service
//!
//! ### ④ Flow layer (Workflow)
//! - `workflow/` - the complete handling of one sheet
//! - `CheckCtx` - context (sheet index + label)
//! - `CheckFlow` - validate, then submit, then hand back the score
//!
//! ### ⑤ Orchestration layer
//! - `app` - run modes, concurrency, display, statistics

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod locale;
pub mod logger;
pub mod models;
pub mod services;
pub mod workflow;

// Re-export common types
pub use app::App;
pub use cli::CliArgs;
pub use clients::CheckerClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use locale::{answer_key_field_text, error_message, FieldText, MessageKey};
pub use models::{CheckForm, CheckSubmission, Language, ScoreResult, SheetImage};
pub use services::{render_score_report, validate_submission};
pub use workflow::{CheckCtx, CheckFlow};
