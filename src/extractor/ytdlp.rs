//! yt-dlp wrapper for video extraction
//!
//! This module handles video information extraction by running yt-dlp as a
//! child process and parsing its `--dump-json` output.

use crate::extractor::models::RawVideoInfo;
use crate::extractor::options::ExtractOptions;
use crate::extractor::traits::Extractor;
use crate::utils::error::AppError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Video extractor backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
    timeout: Duration,
}

impl YtDlpExtractor {
    /// Initialize extractor and verify yt-dlp availability
    ///
    /// Search order:
    /// 1. Explicit path from settings
    /// 2. Binary next to the executable
    /// 3. System PATH
    /// 4. Common installation paths
    pub fn new(explicit: Option<&Path>, timeout: Duration) -> Result<Self, AppError> {
        let ytdlp_path = match explicit {
            Some(path) if is_executable(path) => path.to_path_buf(),
            Some(path) => {
                error!("Configured yt-dlp is not executable: {}", path.display());
                return Err(AppError::YtDlpNotFound);
            }
            None => find_ytdlp().ok_or(AppError::YtDlpNotFound)?,
        };

        info!("Using yt-dlp at: {}", ytdlp_path.display());
        Ok(Self { ytdlp_path, timeout })
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    /// Uses: yt-dlp --dump-json [options] <url>
    async fn extract_info(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<RawVideoInfo, AppError> {
        debug!("Extracting video info for URL: {}", url);

        let child = AsyncCommand::new(&self.ytdlp_path)
            .args(build_args(url, options))
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(output) => output?,
            Err(_) => {
                error!("yt-dlp timed out after {}s", self.timeout.as_secs());
                return Err(AppError::Extraction(format!(
                    "yt-dlp timed out after {} seconds",
                    self.timeout.as_secs()
                )));
            }
        };

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(AppError::Extraction(failure_message(&error_msg)));
        }

        parse_dump(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Translate extraction options into yt-dlp arguments
pub fn build_args(url: &str, options: &ExtractOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["--dump-json".into()];

    if let Some(cookies) = &options.cookie_file {
        args.push("--cookies".into());
        args.push(cookies.into());
    }
    if let Some(agent) = &options.user_agent {
        args.push("--user-agent".into());
        args.push(agent.into());
    }
    if let Some(format) = &options.format {
        args.push("-f".into());
        args.push(format.into());
    }
    if options.skip_download {
        args.push("--skip-download".into());
    }
    if options.no_playlist {
        args.push("--no-playlist".into());
    }
    if options.no_warnings {
        args.push("--no-warnings".into());
    }
    if let Some(container) = &options.merge_output_format {
        args.push("--merge-output-format".into());
        args.push(container.into());
    }

    // `--` keeps a URL starting with '-' from being read as an option
    args.push("--".into());
    args.push(url.into());
    args
}

/// The `ERROR:` lines of yt-dlp's stderr, or all of it when there are none
fn failure_message(stderr: &str) -> String {
    let errors: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("ERROR:"))
        .collect();

    if errors.is_empty() {
        stderr.trim().to_string()
    } else {
        errors.join("\n")
    }
}

/// yt-dlp prints one JSON document per line; a single video yields one line.
/// More than one document means the URL expanded to a playlist.
fn parse_dump(stdout: &str) -> Result<RawVideoInfo, AppError> {
    let mut documents = stdout.lines().filter(|line| !line.trim().is_empty());
    let line = documents
        .next()
        .ok_or_else(|| AppError::Extraction("yt-dlp returned no video information".to_string()))?;

    let extra = documents.count();
    if extra > 0 {
        return Err(AppError::Extraction(format!(
            "URL resolves to {} videos; expected a single video",
            extra + 1
        )));
    }

    let info: RawVideoInfo = serde_json::from_str(line)?;
    debug!("yt-dlp reported {} formats", info.formats.len());
    Ok(info)
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. Next to the executable
/// 2. System PATH
/// 3. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(local) = find_beside_executable() {
        info!("Using bundled yt-dlp: {:?}", local);
        return Some(local);
    }

    if let Some(system) = find_in_path() {
        info!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found anywhere!");
    None
}

fn find_beside_executable() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;

    let candidate = exe_dir.join(if cfg!(windows) { "yt-dlp.exe" } else { "yt-dlp" });
    debug!("Checking bundled path: {:?}", candidate);

    is_executable(&candidate).then_some(candidate)
}

fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // Homebrew (Intel) / manual installs
        "/usr/local/bin/yt-dlp",
        // System packages
        "/usr/bin/yt-dlp",
        // pip --user
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = match path_str.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            },
            None => PathBuf::from(path_str),
        };

        if is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ============================================================
// Tests
// ============================================================
