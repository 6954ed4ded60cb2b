use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;
use profile_fetch::config::{DEFAULT_API_BASE, DEFAULT_USERNAME};
use profile_fetch::{Config, FailureReport, ProfileClient, show_profiles};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "profile-fetch")]
#[command(about = "Fetch and print public account profiles from the profile API")]
#[command(version)]
struct Cli {
    /// Accounts to look up, in order
    #[arg(default_value = DEFAULT_USERNAME)]
    usernames: Vec<String>,

    /// Base URL of the profile API
    #[arg(long, env = "PROFILE_API_URL", default_value = DEFAULT_API_BASE)]
    api_url: String,

    /// Request timeout in seconds (0 waits forever)
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Print a notice when the API has no data for an account
    #[arg(long)]
    report_failures: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let on_failure = if cli.report_failures {
        FailureReport::Report
    } else {
        FailureReport::Silent
    };
    let config = Config::new(cli.api_url)
        .with_timeout_secs(cli.timeout_secs)
        .with_failure_report(on_failure);
    debug!(?config, "Starting");

    let client = ProfileClient::new(&config).context("Failed to create HTTP client")?;
    let mut stdout = io::stdout().lock();

    let failures = show_profiles(&client, &cli.usernames, config.on_failure, &mut stdout)
        .await
        .context("Failed to write profile output")?;

    if !failures.is_empty() {
        let names: Vec<String> = failures.iter().map(|f| format!("@{}", f.username)).collect();
        bail!("Could not read profile for {}", names.join(", "));
    }

    Ok(())
}
