//! Client for a hosted social-profile API.
//!
//! Fetches `GET {api_base}/api/v1/user/{username}`, validates the JSON
//! envelope into typed structs and prints a short summary.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod profile;
pub mod report;

#[cfg(test)]
mod test_support;

pub use client::{ProfileClient, fetch_profile};
pub use config::{Config, FailureReport};
pub use error::FetchError;
pub use profile::{ProfileData, ProfileResponse, ProfileStats, ProfileUser};
pub use report::{ProfileFailure, show_profile, show_profiles};
