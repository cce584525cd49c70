//! Format normalization, stream selection and size helpers

pub mod normalize;
pub mod selector;
pub mod size;

pub use normalize::{normalize, summarize, NormalizedFormat, VideoSummary};
pub use selector::{select_stream_url, stream_file_name, StreamLink};
pub use size::{format_bytes, format_size, parse_size, UNKNOWN_SIZE};
