//! Normalization of yt-dlp output into the public response shape

use crate::extractor::models::{FormatDescriptor, RawVideoInfo, Seconds};
use crate::formats::size::format_size;
use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_QUALITY: &str = "Unknown quality";
pub const UNKNOWN_RESOLUTION: &str = "Unknown resolution";

/// A stream variant as exposed to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFormat {
    pub itag: String,
    pub quality: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub resolution: String,
    pub filesize: String,
    pub has_audio: bool,
    pub has_video: bool,
}

/// Metadata response for a single video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub title: String,
    pub description: String,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    pub duration: Option<Seconds>,
    pub formats: Vec<NormalizedFormat>,
}

impl TryFrom<&FormatDescriptor> for NormalizedFormat {
    type Error = AppError;

    fn try_from(format: &FormatDescriptor) -> Result<Self, Self::Error> {
        Ok(Self {
            itag: format.format_id.clone(),
            quality: format
                .format_note
                .clone()
                .unwrap_or_else(|| UNKNOWN_QUALITY.to_string()),
            mime_type: format.ext.clone(),
            resolution: format
                .resolution
                .clone()
                .unwrap_or_else(|| UNKNOWN_RESOLUTION.to_string()),
            filesize: format_size(format.filesize.as_ref())?,
            has_audio: format.has_audio(),
            has_video: format.has_video(),
        })
    }
}

/// Map every descriptor, in order. One bad descriptor fails the whole list.
pub fn normalize(raw_formats: &[FormatDescriptor]) -> Result<Vec<NormalizedFormat>, AppError> {
    raw_formats.iter().map(NormalizedFormat::try_from).collect()
}

/// Build the metadata response from a full extraction result
pub fn summarize(info: RawVideoInfo) -> Result<VideoSummary, AppError> {
    let formats = normalize(&info.formats)?;
    let title = info
        .title
        .ok_or_else(|| AppError::Extraction("yt-dlp output has no title".to_string()))?;

    Ok(VideoSummary {
        title,
        description: info.description.unwrap_or_default(),
        thumbnail_url: info.thumbnail,
        duration: info.duration,
        formats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::models::RawSize;
    use serde_json::json;

    fn descriptor(format_id: &str, ext: &str) -> FormatDescriptor {
        FormatDescriptor {
            format_id: format_id.to_string(),
            ext: ext.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fallbacks_applied() {
        let mut raw = descriptor("18", "mp4");
        raw.acodec = Some("none".to_string());
        raw.vcodec = Some("avc1".to_string());

        let normalized = normalize(&[raw]).unwrap();
        assert_eq!(
            normalized,
            vec![NormalizedFormat {
                itag: "18".to_string(),
                quality: "Unknown quality".to_string(),
                mime_type: "mp4".to_string(),
                resolution: "Unknown resolution".to_string(),
                filesize: "Unknown size".to_string(),
                has_audio: false,
                has_video: true,
            }]
        );
    }

    #[test]
    fn test_wire_field_names() {
        let mut raw = descriptor("251", "webm");
        raw.format_note = Some("medium".to_string());
        raw.resolution = Some("audio only".to_string());
        raw.filesize = Some(RawSize::from(4_194_304u64));
        raw.acodec = Some("opus".to_string());
        raw.vcodec = Some("none".to_string());

        let value = serde_json::to_value(NormalizedFormat::try_from(&raw).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "itag": "251",
                "quality": "medium",
                "mimeType": "webm",
                "resolution": "audio only",
                "filesize": "4.00 MB",
                "has_audio": true,
                "has_video": false
            })
        );
    }

    #[test]
    fn test_order_preserved_without_dedup() {
        let raws = vec![
            descriptor("22", "mp4"),
            descriptor("18", "mp4"),
            descriptor("22", "mp4"),
        ];
        let itags: Vec<String> = normalize(&raws).unwrap().into_iter().map(|f| f.itag).collect();
        assert_eq!(itags, vec!["22", "18", "22"]);
    }

    #[test]
    fn test_neither_stream_is_valid() {
        let mut raw = descriptor("sb0", "mhtml");
        raw.acodec = Some("none".to_string());
        raw.vcodec = Some("none".to_string());

        let normalized = normalize(&[raw]).unwrap();
        assert!(!normalized[0].has_audio);
        assert!(!normalized[0].has_video);
    }

    #[test]
    fn test_bad_size_fails_whole_list() {
        let mut bad = descriptor("18", "mp4");
        bad.filesize = Some(RawSize::from("unknown"));
        let result = normalize(&[descriptor("22", "mp4"), bad]);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_summarize_defaults_description() {
        let info = RawVideoInfo {
            title: Some("Clip".to_string()),
            description: None,
            thumbnail: Some("https://i.example/hq.jpg".to_string()),
            duration: Some(Seconds::Whole(61)),
            formats: vec![descriptor("18", "mp4")],
        };

        let summary = summarize(info).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["description"], "");
        assert_eq!(value["thumbnailUrl"], "https://i.example/hq.jpg");
        assert_eq!(value["duration"], 61);
        assert_eq!(value["formats"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_summarize_requires_title() {
        let result = summarize(RawVideoInfo::default());
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
