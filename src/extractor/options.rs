//! Per-call options handed to an extractor

use std::path::PathBuf;

/// Options for a single extraction. Mirrors the yt-dlp knobs the service uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOptions {
    pub cookie_file: Option<PathBuf>,
    pub user_agent: Option<String>,
    /// Format selection expression, e.g. `137+140`
    pub format: Option<String>,
    pub skip_download: bool,
    pub no_playlist: bool,
    pub no_warnings: bool,
    /// Container hint for merged formats
    pub merge_output_format: Option<String>,
}

impl ExtractOptions {
    /// Options for a metadata lookup: credentials and user agent, nothing else
    pub fn metadata(cookie_file: Option<PathBuf>, user_agent: impl Into<String>) -> Self {
        Self {
            cookie_file,
            user_agent: Some(user_agent.into()),
            ..Default::default()
        }
    }

    /// Options for resolving the streams of a `video+audio` selection
    pub fn stream_selection(video_itag: &str, audio_itag: &str) -> Self {
        Self {
            format: Some(format!("{}+{}", video_itag, audio_itag)),
            skip_download: true,
            no_playlist: true,
            no_warnings: true,
            merge_output_format: Some("mp4".to_string()),
            ..Default::default()
        }
    }
}
