use crate::models::language::Language;

/// Raw operator input for one check attempt
///
/// Fields arrive exactly as entered: the question count is still a string
/// and the answer key is neither trimmed nor case-folded. Validation turns
/// this into a [`CheckSubmission`] or rejects it.
#[derive(Debug, Clone)]
pub struct CheckForm {
    pub language: Language,
    /// Declared question count, unparsed
    pub num_questions: String,
    /// Answer key as typed
    pub raw_answers: String,
    /// Uploaded sheet image, if one was selected
    pub image: Option<SheetImage>,
}

/// An uploaded answer-sheet image
///
/// Opaque bytes at this layer; the checker service does all content
/// inspection.
#[derive(Debug, Clone)]
pub struct SheetImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SheetImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// An empty selection counts as no image at all
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A fully validated check, ready to submit
///
/// Invariants established by validation: `answers` is trimmed, uppercased,
/// exactly `num_questions` characters long, and drawn entirely from the
/// language's alphabet; `image` is non-empty.
#[derive(Debug, Clone)]
pub struct CheckSubmission {
    pub num_questions: u32,
    pub answers: String,
    pub language: Language,
    pub image: SheetImage,
}
