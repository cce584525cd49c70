use crate::extractor::{ExtractOptions, Extractor};
use crate::utils::config::AppSettings;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Shared request context, built once at startup and cloned into handlers
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
    cookie_file: Option<PathBuf>,
    user_agent: String,
}

impl AppState {
    pub fn new(extractor: Arc<dyn Extractor>, settings: &AppSettings) -> Self {
        let cookie_file = if settings.cookie_file.is_file() {
            Some(settings.cookie_file.clone())
        } else {
            warn!(
                "Cookie file {} not found; metadata requests will run without cookies",
                settings.cookie_file.display()
            );
            None
        };

        Self {
            extractor,
            cookie_file,
            user_agent: settings.user_agent.clone(),
        }
    }

    /// Options for the metadata endpoint
    pub fn metadata_options(&self) -> ExtractOptions {
        ExtractOptions::metadata(self.cookie_file.clone(), self.user_agent.clone())
    }
}
