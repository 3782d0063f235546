//! HTTP synthesis server.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use podforge_speech::{Error as SpeechError, Pipeline, SpeechOptions};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
    duration: u64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Builds the application router with permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/synthesize-speech", post(synthesize_speech))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves until shutdown.
pub async fn serve(addr: &str, pipeline: Pipeline) -> anyhow::Result<()> {
    let app = router(AppState::new(pipeline));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn status_for(err: &SpeechError) -> StatusCode {
    match err {
        SpeechError::Validation(_) => StatusCode::BAD_REQUEST,
        SpeechError::Provider { .. } => StatusCode::BAD_GATEWAY,
        SpeechError::Config(_) | SpeechError::Processing(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn synthesize_speech(
    State(state): State<AppState>,
    payload: Result<Json<SpeechOptions>, JsonRejection>,
) -> Response {
    // A body that does not decode still gets the {error} wire shape.
    let Json(options) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("invalid request body: {rejection}"),
                }),
            )
                .into_response();
        }
    };

    match state.pipeline.run(&options).await {
        Ok(output) => {
            info!(
                bytes = output.audio.len(),
                duration = output.duration_secs,
                "synthesized"
            );
            Json(SynthesizeResponse {
                audio_content: BASE64.encode(&output.audio),
                duration: output.duration_secs,
            })
            .into_response()
        }
        Err(err) => {
            error!(%err, "synthesis failed");
            (
                status_for(&err),
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
