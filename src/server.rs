use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::error::ResolutionError;
use crate::provider::TranscriptProvider;
use crate::transcript::TranscriptService;

const MISSING_VIDEO_ID: &str = "Missing video ID";
const VIDEO_ID_PARAM: &str = "videoId";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ResolutionError> for ApiError {
    fn from(err: ResolutionError) -> Self {
        let status = match &err {
            ResolutionError::TranscriptsDisabled | ResolutionError::NoTranscriptFound => {
                StatusCode::NOT_FOUND
            }
            ResolutionError::Upstream(msg) => {
                log::error!("Upstream transcript failure: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TranscriptBody {
    pub transcript: String,
}

pub fn router<P>(service: TranscriptService<P>) -> Router
where
    P: TranscriptProvider + 'static,
{
    Router::new()
        .route("/transcript", get(get_transcript::<P>))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// First `videoId` value, trimmed. Repeated keys are allowed; later values
/// are ignored.
fn video_id_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == VIDEO_ID_PARAM)
        .map(|(_, value)| value.trim())
        .filter(|id| !id.is_empty())
}

async fn get_transcript<P: TranscriptProvider>(
    State(service): State<TranscriptService<P>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<TranscriptBody>> {
    let video_id =
        video_id_param(&params).ok_or_else(|| ApiError::bad_request(MISSING_VIDEO_ID))?;

    log::info!("Transcript requested for video {}", video_id);
    let transcript = service.resolve(video_id).await?;
    Ok(Json(TranscriptBody { transcript }))
}
