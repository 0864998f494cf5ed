use serde::Deserialize;
use std::path::Path;

/// Optional config file read before environment overrides
const CONFIG_FILE: &str = "checker.toml";

/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the checker service
    pub checker_base_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// How many sheets to check at the same time
    pub max_concurrent_checks: usize,
    /// Language used when none is given on the command line
    pub default_language: String,
    /// Whether to show verbose logs
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checker_base_url: "http://192.168.1.2:5000".to_string(),
            request_timeout_secs: 30,
            max_concurrent_checks: 4,
            default_language: "eng".to_string(),
            verbose_logging: false,
        }
    }
}

/// Subset of fields accepted from checker.toml, all optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    checker_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    max_concurrent_checks: Option<usize>,
    default_language: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// Full load order: defaults, then checker.toml, then environment
    ///
    /// A missing file is fine; a malformed one is logged and skipped so a
    /// bad edit never blocks a run.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same layering as [`Config::load`], reading the file part from the
    /// given path
    pub fn load_from(config_path: &Path) -> Self {
        Self::env_overrides(Self::file_overrides(Self::default(), config_path))
    }

    fn env_overrides(default: Self) -> Self {
        Self {
            checker_base_url: std::env::var("CHECKER_BASE_URL").unwrap_or(default.checker_base_url),
            request_timeout_secs: std::env::var("CHECKER_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            // Batch mode needs at least one semaphore permit
            max_concurrent_checks: std::env::var("MAX_CONCURRENT_CHECKS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_checks).max(1),
            default_language: std::env::var("DEFAULT_LANGUAGE").unwrap_or(default.default_language),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    fn file_overrides(default: Self, config_path: &Path) -> Self {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(_) => return default,
        };

        let file: FileConfig = match toml::from_str(&content) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", config_path.display(), e);
                return default;
            }
        };

        Self {
            checker_base_url: file.checker_base_url.unwrap_or(default.checker_base_url),
            request_timeout_secs: file.request_timeout_secs.unwrap_or(default.request_timeout_secs),
            max_concurrent_checks: file.max_concurrent_checks.unwrap_or(default.max_concurrent_checks),
            default_language: file.default_language.unwrap_or(default.default_language),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        }
    }
}
