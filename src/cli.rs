//! Command-line arguments
//!
//! # Usage
//!
//! ```bash
//! # Check one sheet
//! answer-sheet-check --answers ABCDA --questions 5 --image sheet.png
//!
//! # Check every image in a folder, in Bengali
//! answer-sheet-check --answers কখগঘক --questions 5 --language ben --image-dir scans/
//!
//! # Probe the checker service
//! answer-sheet-check --ping
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "answer-sheet-check")]
#[command(about = "Check scanned answer sheets against an answer key")]
pub struct CliArgs {
    /// Answer key, e.g. ABCDA or কখগঘক
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Declared number of questions, kept as raw text for validation
    #[arg(short, long)]
    pub questions: Option<String>,

    /// Answer language: eng or ben
    #[arg(short, long)]
    pub language: Option<String>,

    /// Answer sheet image to check
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Check every image in this folder instead of a single file
    #[arg(long)]
    pub image_dir: Option<String>,

    /// Probe the checker service and exit
    #[arg(long)]
    pub ping: bool,
}
