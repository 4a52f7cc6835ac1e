//! Axum route handler for the meme recommendation endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category;
use crate::errors::AppError;
use crate::meme_client::{Meme, RESULT_SIZE};
use crate::sentiment::classify;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// An absent field reads as empty text.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub sentiment_score: f64,
    pub memes: Vec<Meme>,
}

/// POST /recommend
///
/// Full pipeline: classify (score only, label discarded) → resolve category
/// → fetch and filter. A content fetch failure is not an error here; it
/// yields an empty `memes` list with `success` still true.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let sentiment = classify(&request.text, state.scorer.as_ref())?;
    let category = category::resolve(&request.text, sentiment.score);
    debug!(
        "resolved category {category} (compound {:.4})",
        sentiment.score
    );

    let memes = state.memes.fetch_safe(category, RESULT_SIZE).await;

    Ok(Json(RecommendResponse {
        success: true,
        sentiment_score: sentiment.score,
        memes,
    }))
}
