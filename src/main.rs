//! tubemeta - video metadata and stream URL service
//!
//! A small HTTP service that asks yt-dlp about a video and returns either a
//! normalized list of its formats or a direct stream URL for a chosen format.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tubemeta::extractor::YtDlpExtractor;
use tubemeta::server::{self, AppState};
use tubemeta::utils::AppSettings;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "TUBEMETA_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "TUBEMETA_PORT")]
    port: Option<u16>,

    /// Cookie file passed to yt-dlp
    #[arg(long, env = "TUBEMETA_COOKIES")]
    cookies: Option<PathBuf>,

    /// Path to the yt-dlp binary
    #[arg(long, env = "TUBEMETA_YTDLP")]
    ytdlp: Option<PathBuf>,

    /// Timeout for a single yt-dlp call, in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the yt-dlp version and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = resolve_settings(&args)?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let extractor = YtDlpExtractor::new(
        settings.ytdlp_path.as_deref(),
        Duration::from_secs(settings.extract_timeout_secs),
    )
    .context("Please install yt-dlp: pip install yt-dlp, or see https://github.com/yt-dlp/yt-dlp")?;

    if args.check {
        return check_ytdlp(&extractor).await;
    }

    let state = AppState::new(Arc::new(extractor), &settings);
    server::serve(state, &settings).await
}

/// Defaults, then the settings file, then flags and environment
fn resolve_settings(args: &Args) -> Result<AppSettings> {
    let mut settings = match args.config.clone().or_else(AppSettings::default_file) {
        Some(path) => AppSettings::from_file(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => AppSettings::default(),
    };

    if let Some(host) = &args.host {
        settings.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(cookies) = &args.cookies {
        settings.cookie_file = cookies.clone();
    }
    if let Some(ytdlp) = &args.ytdlp {
        settings.ytdlp_path = Some(ytdlp.clone());
    }
    if let Some(timeout) = args.timeout {
        settings.extract_timeout_secs = timeout;
    }

    settings.validate()?;
    Ok(settings)
}

async fn check_ytdlp(extractor: &YtDlpExtractor) -> Result<()> {
    let output = tokio::process::Command::new(extractor.ytdlp_path())
        .arg("--version")
        .output()
        .await
        .context("Failed to run yt-dlp")?;

    anyhow::ensure!(output.status.success(), "yt-dlp --version exited with {}", output.status);

    println!(
        "yt-dlp {} at {}",
        String::from_utf8_lossy(&output.stdout).trim(),
        extractor.ytdlp_path().display()
    );
    Ok(())
}
