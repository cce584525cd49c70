//! Data structures for yt-dlp output

use serde::{Deserialize, Serialize};

/// Video information as reported by `yt-dlp --dump-json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVideoInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<Seconds>,
    #[serde(default)]
    pub formats: Vec<FormatDescriptor>,
}

/// One selectable stream variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub format_id: String,
    #[serde(default)]
    pub format_note: Option<String>,
    pub ext: String,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub filesize: Option<RawSize>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl FormatDescriptor {
    /// `"none"` is yt-dlp's marker for a missing stream; an absent field is not.
    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }

    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }
}

/// File size as it may appear in a descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSize {
    Bytes(u64),
    Fractional(f64),
    Text(String),
}

impl From<u64> for RawSize {
    fn from(bytes: u64) -> Self {
        RawSize::Bytes(bytes)
    }
}

impl From<&str> for RawSize {
    fn from(text: &str) -> Self {
        RawSize::Text(text.to_string())
    }
}

/// Duration in seconds; yt-dlp reports whole seconds for most sites and
/// fractional seconds for some.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seconds {
    Whole(u64),
    Fractional(f64),
}
