use std::time::Duration;

/// Base URL of the hosted profile API used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "https://your-api.koyeb.app";

/// Account fetched when the command line names none.
pub const DEFAULT_USERNAME: &str = "khaby.lame";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What to print when the API answers `success: false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureReport {
    /// Print nothing.
    #[default]
    Silent,
    /// Print a one-line notice naming the account.
    Report,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    pub on_failure: FailureReport,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            on_failure: FailureReport::Silent,
        }
    }
}

impl Config {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Timeout in whole seconds, where zero means no timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self
    }

    pub fn with_failure_report(mut self, on_failure: FailureReport) -> Self {
        self.on_failure = on_failure;
        self
    }
}
