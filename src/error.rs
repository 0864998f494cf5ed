use crate::models::language::Language;
use std::fmt;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Operator-input validation failures
    Validation(ValidationError),
    /// Checker-service call failures
    Api(ApiError),
    /// File access failures
    File(FileError),
    /// Other errors (wraps third-party library errors)
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "validation error: {}", e),
            AppError::Api(e) => write!(f, "checker API error: {}", e),
            AppError::File(e) => write!(f, "file error: {}", e),
            AppError::Other(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Api(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// Operator-input validation failures
///
/// One variant per rejected precondition of a check attempt, in the order
/// the checks run. Localized display text comes from the locale table; the
/// `Display` impls here are for logs.
#[derive(Debug)]
pub enum ValidationError {
    /// Question count missing, non-numeric, or below 1
    InvalidQuestionCount { raw: String },
    /// Answer-key length differs from the declared question count
    LengthMismatch {
        answer_count: usize,
        question_count: u32,
    },
    /// Answer key contains symbols outside the selected language's alphabet
    InvalidAlphabet { language: Language },
    /// No sheet image selected, or the selection was empty
    MissingImage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidQuestionCount { raw } => {
                write!(f, "invalid question count: '{}'", raw)
            }
            ValidationError::LengthMismatch {
                answer_count,
                question_count,
            } => {
                write!(
                    f,
                    "answer count ({}) does not match question count ({})",
                    answer_count, question_count
                )
            }
            ValidationError::InvalidAlphabet { language } => {
                write!(
                    f,
                    "answer key contains characters outside the {} alphabet",
                    language
                )
            }
            ValidationError::MissingImage => write!(f, "no answer sheet image selected"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checker-service call failures
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be sent, or the transport failed mid-flight
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Service answered with a non-success HTTP status
    ServerError { status: u16 },
    /// Response body was not the expected JSON shape
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "Request failed ({}): {}", endpoint, source)
            }
            ApiError::ServerError { status } => write!(f, "Server error: {}", status),
            ApiError::JsonParseFailed { source } => {
                write!(f, "Malformed response body: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ApiError::ServerError { .. } => None,
        }
    }
}

/// File access failures
#[derive(Debug)]
pub enum FileError {
    /// File does not exist
    NotFound { path: String },
    /// File could not be read
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Directory does not exist
    DirectoryNotFound { path: String },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "File not found: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "Failed to read file ({}): {}", path, source)
            }
            FileError::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== Conversions from common error types ==========
// No manual From<AppError> for anyhow::Error is needed: anyhow provides the
// blanket conversion for every type implementing std::error::Error.

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err.url().map(|u| u.to_string()).unwrap_or_default();
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(), // io errors do not carry the path
            source: Box::new(err),
        })
    }
}

// ========== Convenience constructors ==========

impl AppError {
    /// Question count did not parse as an integer ≥ 1
    pub fn invalid_question_count(raw: impl Into<String>) -> Self {
        AppError::Validation(ValidationError::InvalidQuestionCount { raw: raw.into() })
    }

    /// Answer-key length differs from the declared question count
    pub fn length_mismatch(answer_count: usize, question_count: u32) -> Self {
        AppError::Validation(ValidationError::LengthMismatch {
            answer_count,
            question_count,
        })
    }

    /// Answer key contains symbols outside the language's alphabet
    pub fn invalid_alphabet(language: Language) -> Self {
        AppError::Validation(ValidationError::InvalidAlphabet { language })
    }

    /// No sheet image selected
    pub fn missing_image() -> Self {
        AppError::Validation(ValidationError::MissingImage)
    }

    /// Transport-level request failure
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// Non-success HTTP status from the checker service
    pub fn server_error(status: u16) -> Self {
        AppError::Api(ApiError::ServerError { status })
    }

    /// File does not exist
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// File read failure
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Directory does not exist
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::DirectoryNotFound { path: path.into() })
    }
}

// ========== Result type alias ==========

/// Application result type
pub type AppResult<T> = std::result::Result<T, AppError>;
