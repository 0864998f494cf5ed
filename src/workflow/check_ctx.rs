//! Check context
//!
//! Carries "which sheet of this run am I checking" for log prefixes.

use std::fmt::Display;

/// Context for a single sheet check
#[derive(Debug, Clone)]
pub struct CheckCtx {
    /// Sheet number within the run (starting at 1)
    pub sheet_index: usize,

    /// Short label for log lines, usually the image file name
    pub sheet_label: String,
}

impl CheckCtx {
    /// Create a new check context
    pub fn new(sheet_index: usize, sheet_label: impl Into<String>) -> Self {
        Self {
            sheet_index,
            sheet_label: sheet_label.into(),
        }
    }
}

impl Display for CheckCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[sheet #{} {}]", self.sheet_index, self.sheet_label)
    }
}
