use crate::extractor::ExtractOptions;
use crate::formats::{select_stream_url, stream_file_name, summarize, StreamLink, VideoSummary};
use crate::server::error::ErrorBody;
use crate::server::state::AppState;
use crate::utils::error::AppError;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, error};

#[derive(Debug, Default, Deserialize)]
pub struct VideoInfoRequest {
    pub url: Option<String>,
}

/// Query of `/api/download`: `url`, `videoItag`, `audioItag`
#[derive(Debug, Default)]
pub struct DownloadParams {
    pub url: Option<String>,
    pub video_itag: Option<String>,
    pub audio_itag: Option<String>,
}

impl DownloadParams {
    /// Collect from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "url" => &mut params.url,
                "videoItag" => &mut params.video_itag,
                "audioItag" => &mut params.audio_itag,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// POST /api/video-info
pub async fn video_info(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<VideoSummary>, AppError> {
    let request: VideoInfoRequest = serde_json::from_slice(&body).unwrap_or_default();
    let url = non_empty(request.url.as_deref())
        .ok_or_else(|| AppError::Validation("Missing YouTube URL".to_string()))?;

    debug!("Fetching video info for URL: {} via {}", url, state.extractor.id());

    let result = async {
        let info = state
            .extractor
            .extract_info(url, &state.metadata_options())
            .await?;
        summarize(info)
    }
    .await;

    match result {
        Ok(summary) => {
            debug!("Fetched {} formats", summary.formats.len());
            Ok(Json(summary))
        }
        Err(e) => {
            error!("Error in video_info ({}): {}", e.kind(), e);
            Err(e)
        }
    }
}

/// GET /api/download
pub async fn download(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<StreamLink>, AppError> {
    let params = DownloadParams::from_pairs(pairs);
    let (url, video_itag, audio_itag) = match (
        non_empty(params.url.as_deref()),
        non_empty(params.video_itag.as_deref()),
        non_empty(params.audio_itag.as_deref()),
    ) {
        (Some(url), Some(video), Some(audio)) => (url, video, audio),
        _ => {
            return Err(AppError::Validation(
                "Missing URL or format (itag)".to_string(),
            ))
        }
    };

    debug!(
        "Preparing download for URL: {} with video itag: {} and audio itag: {}",
        url, video_itag, audio_itag
    );

    let options = ExtractOptions::stream_selection(video_itag, audio_itag);
    let result = async {
        let info = state.extractor.extract_info(url, &options).await?;
        debug!("Video info extracted successfully");

        let video_url = select_stream_url(&info.formats, video_itag, audio_itag)?.to_string();
        let video_title = stream_file_name(info.title.as_deref());
        debug!("Video title: {}", video_title);

        Ok::<_, AppError>(StreamLink {
            video_url,
            video_title,
        })
    }
    .await;

    result.map(Json).map_err(|e| {
        error!("Error in download_video ({}): {}", e.kind(), e);
        e
    })
}

/// Unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Known path, wrong method
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
        }),
    )
}
