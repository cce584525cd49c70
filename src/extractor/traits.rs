use crate::extractor::models::RawVideoInfo;
use crate::extractor::options::ExtractOptions;
use crate::utils::error::AppError;
use async_trait::async_trait;

/// Core trait for video extractors
///
/// This trait isolates the HTTP layer from the extraction method, so handlers
/// can be driven by yt-dlp in production and by an in-memory fake in tests.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g. "ytdlp")
    fn id(&self) -> &'static str;

    /// Extracts video information without downloading anything
    async fn extract_info(&self, url: &str, options: &ExtractOptions)
        -> Result<RawVideoInfo, AppError>;
}
