pub mod models;
pub mod options;
pub mod traits;
pub mod ytdlp;

pub use models::{FormatDescriptor, RawSize, RawVideoInfo, Seconds};
pub use options::ExtractOptions;
pub use traits::Extractor;
pub use ytdlp::YtDlpExtractor;
