use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Top-level envelope returned by `/api/v1/user/{username}`.
///
/// `data` is kept as raw JSON so that a missing or malformed payload can be
/// reported as a schema problem rather than a decode failure.
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    /// Absent and `null` both read as "not successful".
    pub success: Option<bool>,
    pub data: Option<Value>,
    pub error: Option<Value>,
}

impl ProfileResponse {
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    /// The server's failure message, if it sent one.
    pub fn error_message(&self) -> Option<String> {
        message_text(self.error.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileData {
    pub user: ProfileUser,
    pub stats: ProfileStats,
    pub url: String,
    #[serde(rename = "scrapedAt", default)]
    pub scraped_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileUser {
    pub nickname: String,
    #[serde(rename = "uniqueId")]
    pub unique_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileStats {
    pub followers: u64,
    pub videos: u64,
    pub likes: u64,
}

/// Body shape of a non-2xx reply; only the message is of interest.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: Option<Value>,
}

impl ErrorEnvelope {
    pub fn message(&self) -> Option<String> {
        message_text(self.error.as_ref())
    }
}

/// Strings are used as-is; any other non-null value is kept as compact JSON.
fn message_text(error: Option<&Value>) -> Option<String> {
    match error? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
