//! Stream URL lookup for a `video+audio` format selection

use crate::extractor::models::FormatDescriptor;
use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};

/// Stream resolution response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamLink {
    pub video_url: String,
    pub video_title: String,
}

/// Return the URL of the first descriptor whose id is either requested id.
///
/// The scan does not prefer the video id over the audio id and yields a single
/// URL; whichever of the two yt-dlp lists first wins.
// TODO: return both stream URLs once clients can merge separate tracks.
pub fn select_stream_url<'a>(
    raw_formats: &'a [FormatDescriptor],
    video_id: &str,
    audio_id: &str,
) -> Result<&'a str, AppError> {
    let format = raw_formats
        .iter()
        .find(|f| f.format_id == video_id || f.format_id == audio_id)
        .ok_or_else(|| AppError::NotFound("Video URL not found".to_string()))?;

    match format.url.as_deref() {
        Some("") => Err(AppError::NotFound("Video URL not found".to_string())),
        Some(url) => Ok(url),
        None => Err(AppError::Extraction(format!(
            "format {} has no stream url",
            format.format_id
        ))),
    }
}

/// Download file name derived from the video title
pub fn stream_file_name(title: Option<&str>) -> String {
    format!("{}.mp4", title.unwrap_or("video").replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(format_id: &str, url: &str) -> FormatDescriptor {
        FormatDescriptor {
            format_id: format_id.to_string(),
            ext: "mp4".to_string(),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_match_wins() {
        let formats = vec![with_url("18", "https://a"), with_url("140", "https://b")];
        assert_eq!(select_stream_url(&formats, "18", "140").unwrap(), "https://a");
    }

    #[test]
    fn test_audio_listed_first_wins() {
        let formats = vec![
            with_url("140", "https://audio"),
            with_url("137", "https://video"),
        ];
        assert_eq!(
            select_stream_url(&formats, "137", "140").unwrap(),
            "https://audio"
        );
    }

    #[test]
    fn test_no_match() {
        let formats = vec![with_url("18", "https://a"), with_url("140", "https://b")];
        let err = select_stream_url(&formats, "999", "888").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Video URL not found");
    }

    #[test]
    fn test_empty_url_is_not_found() {
        let formats = vec![with_url("18", "")];
        assert!(matches!(
            select_stream_url(&formats, "18", "140"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_missing_url_is_extraction_error() {
        let formats = vec![FormatDescriptor {
            format_id: "18".to_string(),
            ext: "mp4".to_string(),
            ..Default::default()
        }];
        assert!(matches!(
            select_stream_url(&formats, "18", "140"),
            Err(AppError::Extraction(_))
        ));
    }

    #[test]
    fn test_stream_file_name() {
        assert_eq!(stream_file_name(Some("My Great Clip")), "My_Great_Clip.mp4");
        assert_eq!(stream_file_name(None), "video.mp4");
    }
}
