use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while fetching one profile.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", with_causes(.0))]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}{}", message_suffix(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected profile payload: {0}")]
    Schema(String),

    #[error("API reported failure{}", message_suffix(.message))]
    ApplicationFailure { message: Option<String> },
}

impl FetchError {
    /// Network-level failures and non-2xx statuses. These are reported and
    /// swallowed by the caller rather than aborting the run.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status { .. })
    }
}

/// `err` followed by each underlying cause, joined with `": "`.
///
/// reqwest's own message only names the request; the reason (refused, DNS,
/// timeout) lives further down the source chain.
fn with_causes(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.ends_with(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}
