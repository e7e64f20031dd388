//! Article generation endpoint
//!
//! `POST /api/articles` runs one pipeline invocation per request. Validation
//! failures answer 400, generation failures 502, both with a JSON error body
//! (see the `IntoResponse` impl on [`crate::error::Error`]).

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::handlers::status::AppState;
use crate::pipeline::{ArticleRequest, ArticleResponse};

/// Article generation endpoint handler.
///
/// # Route
/// `POST /api/articles`
#[instrument(skip_all)]
pub async fn generate_article_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ArticleRequest>,
) -> Result<Json<ArticleResponse>> {
    let started = Instant::now();
    state.begin_generation();

    let result = state.pipeline().run(&request).await;

    state.end_generation();
    state.record_latency(started.elapsed());

    match result {
        Ok(response) => {
            let total = state.record_article();
            info!(
                article_id = %response.id,
                score = response.seo_score.score,
                total,
                "article request served"
            );
            Ok(Json(response))
        }
        Err(e) => {
            state.record_error();
            warn!(error = %e, "article request failed");
            Err(e)
        }
    }
}

/// Create the API router.
///
/// # Routes
/// - `POST /api/articles` - Generate and audit an article
pub fn api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/articles", post(generate_article_handler))
        .with_state(state)
}
