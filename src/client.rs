use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::profile::{ErrorEnvelope, ProfileData, ProfileResponse};

const USER_PATH: &str = "/api/v1/user/";

/// HTTP client for the profile API.
#[derive(Clone)]
pub struct ProfileClient {
    http: Client,
    api_base: String,
}

impl ProfileClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let api_base = config
            .api_base
            .strip_suffix('/')
            .unwrap_or(&config.api_base)
            .to_string();

        Ok(Self {
            http: builder.build()?,
            api_base,
        })
    }

    /// Request target for `username`. The name is used as-is.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}{USER_PATH}{username}", self.api_base)
    }

    /// Fetch and decode the profile of `username`. Prints nothing.
    pub async fn fetch(&self, username: &str) -> Result<ProfileData, FetchError> {
        let url = self.profile_url(username);
        debug!(%url, "Requesting profile");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            // The API wraps failures as {"success": false, "error": "..."}.
            let message = resp
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|e| e.message());
            debug!(%url, %status, ?message, "Profile request rejected");
            return Err(FetchError::Status { status, message });
        }

        let body = resp.text().await?;
        let profile = decode_profile(&body)?;
        debug!(username = %profile.user.unique_id, "Profile decoded");

        Ok(profile)
    }
}

/// Fetch one profile with a fresh client and default settings.
pub async fn fetch_profile(username: &str, api_base: &str) -> Result<ProfileData, FetchError> {
    ProfileClient::new(&Config::new(api_base))?
        .fetch(username)
        .await
}

/// Decode a 2xx response body into a profile.
pub(crate) fn decode_profile(body: &str) -> Result<ProfileData, FetchError> {
    let json: Value = serde_json::from_str(body)?;

    let envelope: ProfileResponse = serde_json::from_value(json)
        .map_err(|e| FetchError::Schema(format!("malformed envelope: {e}")))?;

    if !envelope.is_success() {
        return Err(FetchError::ApplicationFailure {
            message: envelope.error_message(),
        });
    }

    let data = envelope
        .data
        .ok_or_else(|| FetchError::Schema("`success` is true but `data` is missing".to_string()))?;

    serde_json::from_value(data).map_err(|e| FetchError::Schema(e.to_string()))
}
