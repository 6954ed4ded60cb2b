use std::io::Write;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::client::ProfileClient;
use crate::config::FailureReport;
use crate::error::FetchError;
use crate::format::summary_lines;
use crate::profile::ProfileData;

/// Fetch `username` and print its summary to `out`.
///
/// Returns `Ok(None)` when no profile could be shown: transport failures are
/// printed as a single `Error:` line, and `success: false` replies print
/// according to `on_failure`. Undecodable or malformed payloads are returned
/// as errors.
pub async fn show_profile<W: Write>(
    client: &ProfileClient,
    username: &str,
    on_failure: FailureReport,
    out: &mut W,
) -> Result<Option<ProfileData>> {
    match client.fetch(username).await {
        Ok(profile) => {
            for line in summary_lines(&profile) {
                writeln!(out, "{line}")?;
            }
            Ok(Some(profile))
        }
        Err(err) if err.is_transport() => {
            warn!(username, error = %err, "Profile request failed");
            writeln!(out, "Error: {err}")?;
            Ok(None)
        }
        Err(FetchError::ApplicationFailure { message }) => {
            info!(username, ?message, "API returned no profile");
            if on_failure == FailureReport::Report {
                match message {
                    Some(m) => writeln!(out, "No profile data for @{username}: {m}")?,
                    None => writeln!(out, "No profile data for @{username}")?,
                }
            }
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// A username whose reply could not be turned into a profile.
#[derive(Debug)]
pub struct ProfileFailure {
    pub username: String,
    pub error: FetchError,
}

/// Show each profile in order, with a blank line between usernames.
///
/// Decode and schema failures are logged and collected so the remaining
/// usernames are still fetched. Only write errors on `out` stop the loop.
pub async fn show_profiles<W: Write>(
    client: &ProfileClient,
    usernames: &[String],
    on_failure: FailureReport,
    out: &mut W,
) -> Result<Vec<ProfileFailure>> {
    let mut failures = Vec::new();

    for (i, username) in usernames.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        if let Err(err) = show_profile(client, username, on_failure, out).await {
            let err = err.downcast::<FetchError>()?;
            error!(username = %username, error = %err, "Could not read profile");
            failures.push(ProfileFailure {
                username: username.clone(),
                error: err,
            });
        }
    }

    Ok(failures)
}
