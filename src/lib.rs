//! tubemeta library

pub mod extractor;
pub mod formats;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{Extractor, FormatDescriptor, RawVideoInfo, YtDlpExtractor};
pub use formats::{NormalizedFormat, StreamLink, VideoSummary};
pub use server::AppState;
pub use utils::{AppError, AppSettings};
